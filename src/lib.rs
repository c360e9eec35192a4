pub mod color;
pub mod config;
pub mod error;
pub mod fonts;
pub mod output;
pub mod responsive;
pub mod result;
pub mod selection;
pub mod style;
pub mod types;
pub mod variables;
pub mod walker;
pub mod workflow;

pub use color::{format_color, resolve_color, ColorResolver, VariableColorResolver};
pub use config::Config;
pub use error::{ErrorCategory, ErrorPayload, FwwError, Result};
pub use fonts::{font_weight, FontTracker};
pub use output::{ConvertOutput, ErrorOutput, FwwOutput, FWW_OUTPUT_VERSION};
pub use responsive::ResponsiveDeriver;
pub use result::{Breakpoint, BreakpointName, ConversionContext, ConversionResult};
pub use selection::{load_selection, parse_selection};
pub use style::StyleResolver;
pub use types::{Component, ParentContext, SceneNode, StyleMap, Tag};
pub use variables::{NoVariables, VariableLookup, VariableTable};
pub use walker::{Collected, NodeWalker, ProgressFn};
pub use workflow::ConversionWorkflow;
