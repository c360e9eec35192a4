//! Paint color formatting with design-variable awareness.

use std::collections::BTreeMap;

use palette::Srgb;
use tracing::debug;

use crate::types::{ColorSource, RgbaColor, Variable, VariableRecord};
use crate::variables::VariableLookup;

/// Formats a color as CSS.
///
/// Translucent colors become `rgba(r, g, b, a)`; opaque ones become
/// uppercase hex, shortened to three digits when every channel pair repeats.
/// `opacity` overrides the color's own alpha. A missing color is
/// `transparent`.
pub fn format_color(color: Option<RgbaColor>, opacity: Option<f64>) -> String {
    let Some(color) = color else {
        return "transparent".to_string();
    };
    let alpha = opacity.unwrap_or(color.a);
    let channels: Srgb<u8> = Srgb::new(color.r, color.g, color.b).into_format();

    if alpha < 1.0 {
        return format!(
            "rgba({}, {}, {}, {})",
            channels.red, channels.green, channels.blue, alpha
        );
    }

    let hex = format!("{channels:X}");
    let b = hex.as_bytes();
    if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
        format!("#{}{}{}", b[0] as char, b[2] as char, b[4] as char)
    } else {
        format!("#{hex}")
    }
}

/// Resolves the CSS color for a paint or effect.
///
/// A bound variable that the lookup knows becomes
/// `var(--{name}, {direct color})` and is reported through `on_found`;
/// de-duplicating reports is up to the caller. Lookup misses fall back to
/// the direct color.
pub fn resolve_color<S, L, F>(source: &S, lookup: &L, mut on_found: F) -> String
where
    S: ColorSource + ?Sized,
    L: VariableLookup + ?Sized,
    F: FnMut(&str, &Variable),
{
    let direct = format_color(source.color(), source.opacity());

    let Some(id) = source.bound_color_variable() else {
        return direct;
    };
    match lookup.lookup(id) {
        Some(variable) => {
            on_found(id, &variable);
            format!("var(--{}, {})", variable.name, direct)
        }
        None => {
            debug!(variable_id = %id, "Bound variable not found; using direct color");
            direct
        }
    }
}

/// Turns paints and effects into CSS colors while a conversion runs.
pub trait ColorResolver {
    fn resolve(&mut self, source: &dyn ColorSource) -> String;
}

/// Resolver that records every variable it resolves, once per id.
pub struct VariableColorResolver<'a, L: ?Sized> {
    lookup: &'a L,
    used: BTreeMap<String, VariableRecord>,
}

impl<'a, L: VariableLookup + ?Sized> VariableColorResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            used: BTreeMap::new(),
        }
    }

    pub fn used(&self) -> &BTreeMap<String, VariableRecord> {
        &self.used
    }

    pub fn into_used(self) -> BTreeMap<String, VariableRecord> {
        self.used
    }
}

impl<L: VariableLookup + ?Sized> ColorResolver for VariableColorResolver<'_, L> {
    fn resolve(&mut self, source: &dyn ColorSource) -> String {
        let used = &mut self.used;
        resolve_color(source, self.lookup, |id, variable| {
            if !used.contains_key(id) {
                used.insert(
                    id.to_string(),
                    VariableRecord::color(id, variable, source.color()),
                );
            }
        })
    }
}
