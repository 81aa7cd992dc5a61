//! Node and payload definitions for the syntax arena.

use optic_common::Span;
use serde::{Deserialize, Serialize};

use crate::syntax_kind::SyntaxKind;

/// Index of a node in a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node" (absent else-branch, missing initializer, ...).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        Self { nodes }
    }
}

/// A syntax node: kind tag, payload pool index, and source span.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub data: u32,
    pub span: Span,
}

// =============================================================================
// Per-kind payloads
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpressionStatementData {
    pub expression: NodeIndex,
}

/// A short variable declaration, `name := initializer`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// An assignment with one or more destinations and one or more values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssignmentData {
    pub targets: NodeList,
    pub values: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfData {
    pub condition: NodeIndex,
    pub then_branch: NodeIndex,
    /// `NodeIndex::NONE` when there is no else branch.
    pub else_branch: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    /// `NodeIndex::NONE` for a bare return.
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// A member access, `receiver.member`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectorData {
    pub receiver: NodeIndex,
    /// Identifier node naming the accessed member.
    pub member: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallData {
    pub callee: NodeIndex,
    pub arguments: NodeList,
}

/// Prefix unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Minus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryData {
    pub operator: UnaryOperator,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}
