//! Top-level conversion entry point.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{FwwError, Result};
use crate::result::ConversionResult;
use crate::types::SceneNode;
use crate::variables::VariableLookup;
use crate::walker::{NodeWalker, ProgressFn};

/// Converts selections with a fixed configuration.
///
/// The workflow holds no per-run state: each [`convert`](Self::convert) call
/// builds a fresh [`NodeWalker`], so repeated calls are independent and
/// produce identical output for identical input.
#[derive(Clone, Default)]
pub struct ConversionWorkflow {
    config: Config,
    progress: Option<Arc<ProgressFn>>,
}

impl std::fmt::Debug for ConversionWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionWorkflow")
            .field("config", &self.config)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl ConversionWorkflow {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: Arc<ProgressFn>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn report(&self, message: &str) {
        if let Some(progress) = &self.progress {
            progress(message);
        }
    }

    /// Converts the first node of `selection`.
    ///
    /// Fails with [`FwwError::EmptySelection`] before producing anything
    /// when `selection` is empty. Further roots are ignored.
    pub fn convert<L>(&self, selection: &[SceneNode], lookup: &L) -> Result<ConversionResult>
    where
        L: VariableLookup + ?Sized,
    {
        self.report("Starting conversion...");

        let Some(root) = selection.first() else {
            return Err(FwwError::EmptySelection);
        };
        if selection.len() > 1 {
            warn!(
                ignored = selection.len() - 1,
                root = %root.id(),
                "Only the first selected node is converted"
            );
        }
        self.report(&format!("Converting {} node: {}", root.kind(), root.name()));

        let mut walker = NodeWalker::new(&self.config, lookup).with_progress(self.progress.clone());
        let component = walker.visit(root, None);
        let visited = walker.visited();
        let collected = walker.finish();

        self.report("Conversion complete!");
        info!(
            root = %root.id(),
            nodes = visited,
            variables = collected.variables.len(),
            fonts = collected.fonts.len(),
            "Conversion finished"
        );

        Ok(ConversionResult::assemble(component, root.id(), collected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::NoVariables;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn empty_selection_fails_fast() {
        let err = ConversionWorkflow::default()
            .convert(&[], &NoVariables)
            .unwrap_err();
        assert!(matches!(err, FwwError::EmptySelection));
    }

    #[test]
    fn progress_milestones_are_reported_in_order() {
        let messages = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = messages.clone();
        let workflow = ConversionWorkflow::default().with_progress(Arc::new(move |m: &str| {
            sink.lock().unwrap().push(m.to_string())
        }));
        let root: SceneNode = serde_json::from_value(json!({
            "type": "FRAME",
            "id": "1:1",
            "name": "Hero",
            "children": [{"type": "TEXT", "id": "1:2", "characters": "Hi"}]
        }))
        .unwrap();

        workflow.convert(&[root], &NoVariables).unwrap();

        assert_eq!(
            messages.lock().unwrap().clone(),
            vec![
                "Starting conversion...",
                "Converting FRAME node: Hero",
                "Converting 1 children of Hero...",
                "Conversion complete!",
            ]
        );
    }

    #[test]
    fn only_first_root_is_converted() {
        let roots: Vec<SceneNode> = serde_json::from_value(json!([
            {"type": "FRAME", "id": "a"},
            {"type": "FRAME", "id": "b"}
        ]))
        .unwrap();
        let result = ConversionWorkflow::default()
            .convert(&roots, &NoVariables)
            .unwrap();
        assert_eq!(result.component.attrs.id, "a");
        assert_eq!(result.context.selected_node_ids.len(), 1);
    }
}
