//! Font family and weight collection for text nodes.

use url::Url;

use crate::config::FontPolicy;
use crate::types::{FontRecord, FontSource};

/// Style-name to numeric weight table, in match priority order.
const WEIGHTS: [(&str, u16); 10] = [
    ("Thin", 100),
    ("ExtraLight", 200),
    ("Light", 300),
    ("Regular", 400),
    ("Medium", 500),
    ("SemiBold", 600),
    ("Semibold", 600),
    ("Bold", 700),
    ("ExtraBold", 800),
    ("Black", 900),
];

const DEFAULT_WEIGHT: u16 = 400;

/// Maps a font style name such as `"SemiBold Italic"` to a numeric weight.
///
/// Exact names match first, then the first table entry contained in the
/// style (case-insensitive), then 400.
pub fn font_weight(style: &str) -> u16 {
    if let Some((_, weight)) = WEIGHTS.iter().find(|(name, _)| *name == style) {
        return *weight;
    }
    let lowered = style.to_lowercase();
    WEIGHTS
        .iter()
        .find(|(name, _)| lowered.contains(&name.to_lowercase()))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Accumulates the fonts seen during one conversion, in first-seen order.
#[derive(Debug)]
pub struct FontTracker<'a> {
    policy: &'a FontPolicy,
    records: Vec<FontRecord>,
}

impl<'a> FontTracker<'a> {
    pub fn new(policy: &'a FontPolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
        }
    }

    pub fn track(&mut self, family: &str, style: &str) {
        let weight = font_weight(style);

        if let Some(record) = self.records.iter_mut().find(|r| r.family == family) {
            if record.weights.contains(&weight) {
                return;
            }
            record.weights.push(weight);
            record.weights.sort_unstable();
            if record.source == FontSource::Google {
                record.url = request_url(&self.policy.request_base, family, &record.weights);
            }
            return;
        }

        let source = if self.policy.web_fonts.iter().any(|f| f == family) {
            FontSource::Google
        } else {
            FontSource::System
        };
        let weights = vec![weight];
        let url = match source {
            FontSource::Google => request_url(&self.policy.request_base, family, &weights),
            FontSource::System => None,
        };
        self.records.push(FontRecord {
            source,
            family: family.to_string(),
            weights,
            url,
        });
    }

    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FontRecord> {
        self.records
    }
}

/// Builds `{base}?family=Open+Sans:wght@400,700&display=swap`.
fn request_url(base: &str, family: &str, weights: &[u16]) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    let family = family.split_whitespace().collect::<Vec<_>>().join("+");
    let weights = weights
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(",");
    url.set_query(Some(&format!(
        "family={family}:wght@{weights}&display=swap"
    )));
    Some(url.to_string())
}
