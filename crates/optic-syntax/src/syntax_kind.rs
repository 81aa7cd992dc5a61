//! Node kind tags for the syntax tree.

use serde::{Deserialize, Serialize};

/// Kind tag for a syntax node.
///
/// The payload for each kind lives in a per-kind pool in the `NodeArena`;
/// `Node::data` indexes into the pool selected by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,
    SourceFile,
    Block,
    ExpressionStatement,
    VariableStatement,
    AssignmentStatement,
    IfStatement,
    ReturnStatement,
    FunctionDeclaration,
    ParameterDeclaration,
    Identifier,
    SelectorExpression,
    CallExpression,
    PrefixUnaryExpression,
    LiteralExpression,
}

impl SyntaxKind {
    /// Whether nodes of this kind are statements.
    #[must_use]
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::ExpressionStatement
                | SyntaxKind::VariableStatement
                | SyntaxKind::AssignmentStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::ReturnStatement
        )
    }
}
