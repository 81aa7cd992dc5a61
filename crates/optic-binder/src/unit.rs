//! Serialized unit of analysis exchanged with the host front end.

use serde::{Deserialize, Serialize};

use optic_syntax::{NodeArena, NodeIndex};

use crate::state::BinderState;

/// One file's syntax tree plus resolved facts.
///
/// This is the exchange format between a front end and the checker: the
/// front end parses and type-resolves a file, exports a `SourceUnit`, and
/// the checker consumes it read-only. JSON encoding via serde.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SourceUnit {
    pub file_name: String,
    pub root: NodeIndex,
    /// Byte offsets of line starts; empty when the exporter omits them.
    #[serde(default)]
    pub line_starts: Vec<u32>,
    pub arena: NodeArena,
    pub binder: BinderState,
}
