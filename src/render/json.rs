//! JSON dump of a flowable sequence.
//!
//! Each flowable becomes an object tagged by `type`, with style names in
//! snake case, so the dump can be diffed between builds.

use crate::error::{Error, Result};
use crate::model::Flowable;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Serialize the render sequence.
pub fn to_json(flowables: &[Flowable], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(flowables),
        JsonFormat::Compact => serde_json::to_string(flowables),
    };
    json.map_err(|e| {
        Error::Render(format!(
            "Cannot serialize {} flowables: {}",
            flowables.len(),
            e
        ))
    })
}
