//! Arena-based syntax tree for the optic usage checker.
//!
//! A host front end (out of scope for this workspace) parses source files
//! and exports one `NodeArena` per file. Nodes are a tagged union: a flat
//! `Node` record carries the kind tag and source span, and per-kind payloads
//! live in typed pools inside the arena. The checker walks the tree through
//! `NodeIndex` handles and the checked `get_*` accessors; it never mutates
//! syntax.

pub mod node;
pub use node::{
    AssignmentData, BlockData, CallData, ExpressionStatementData, FunctionData, IdentifierData,
    IfData, LiteralData, Node, NodeIndex, NodeList, ParameterData, ReturnData, SelectorData,
    SourceFileData, UnaryData, UnaryOperator, VariableData,
};

pub mod node_arena;
pub use node_arena::NodeArena;

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;
