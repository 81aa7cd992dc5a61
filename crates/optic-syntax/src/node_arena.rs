//! Arena storage, node constructors (`add_*`), and checked accessors (`get_*`).

use optic_common::Span;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

/// Arena holding one file's syntax tree.
///
/// Nodes live in a flat vector; payloads live in per-kind pools indexed by
/// `Node::data`. Indices are only meaningful within the owning arena.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    source_files: Vec<SourceFileData>,
    blocks: Vec<BlockData>,
    expr_statements: Vec<ExpressionStatementData>,
    variables: Vec<VariableData>,
    assignments: Vec<AssignmentData>,
    if_statements: Vec<IfData>,
    return_data: Vec<ReturnData>,
    functions: Vec<FunctionData>,
    parameters: Vec<ParameterData>,
    identifiers: Vec<IdentifierData>,
    selectors: Vec<SelectorData>,
    calls: Vec<CallData>,
    unaries: Vec<UnaryData>,
    literals: Vec<LiteralData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, kind: SyntaxKind, data: u32, span: Span) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { kind, data, span });
        idx
    }

    #[must_use]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    pub fn add_source_file(&mut self, statements: NodeList, span: Span) -> NodeIndex {
        let data = self.source_files.len() as u32;
        self.source_files.push(SourceFileData { statements });
        self.push_node(SyntaxKind::SourceFile, data, span)
    }

    pub fn add_block(&mut self, statements: NodeList, span: Span) -> NodeIndex {
        let data = self.blocks.len() as u32;
        self.blocks.push(BlockData { statements });
        self.push_node(SyntaxKind::Block, data, span)
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex, span: Span) -> NodeIndex {
        let data = self.expr_statements.len() as u32;
        self.expr_statements
            .push(ExpressionStatementData { expression });
        self.push_node(SyntaxKind::ExpressionStatement, data, span)
    }

    pub fn add_variable_statement(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.variables.len() as u32;
        self.variables.push(VariableData { name, initializer });
        self.push_node(SyntaxKind::VariableStatement, data, span)
    }

    pub fn add_assignment_statement(
        &mut self,
        targets: NodeList,
        values: NodeList,
        span: Span,
    ) -> NodeIndex {
        let data = self.assignments.len() as u32;
        self.assignments.push(AssignmentData { targets, values });
        self.push_node(SyntaxKind::AssignmentStatement, data, span)
    }

    pub fn add_if_statement(
        &mut self,
        condition: NodeIndex,
        then_branch: NodeIndex,
        else_branch: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.if_statements.len() as u32;
        self.if_statements.push(IfData {
            condition,
            then_branch,
            else_branch,
        });
        self.push_node(SyntaxKind::IfStatement, data, span)
    }

    pub fn add_return_statement(&mut self, expression: NodeIndex, span: Span) -> NodeIndex {
        let data = self.return_data.len() as u32;
        self.return_data.push(ReturnData { expression });
        self.push_node(SyntaxKind::ReturnStatement, data, span)
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        parameters: NodeList,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.functions.len() as u32;
        self.functions.push(FunctionData {
            name,
            parameters,
            body,
        });
        self.push_node(SyntaxKind::FunctionDeclaration, data, span)
    }

    pub fn add_parameter_declaration(&mut self, name: NodeIndex, span: Span) -> NodeIndex {
        let data = self.parameters.len() as u32;
        self.parameters.push(ParameterData { name });
        self.push_node(SyntaxKind::ParameterDeclaration, data, span)
    }

    pub fn add_identifier(&mut self, text: impl Into<String>, span: Span) -> NodeIndex {
        let data = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { text: text.into() });
        self.push_node(SyntaxKind::Identifier, data, span)
    }

    pub fn add_selector_expression(
        &mut self,
        receiver: NodeIndex,
        member: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.selectors.len() as u32;
        self.selectors.push(SelectorData { receiver, member });
        self.push_node(SyntaxKind::SelectorExpression, data, span)
    }

    pub fn add_call_expression(
        &mut self,
        callee: NodeIndex,
        arguments: NodeList,
        span: Span,
    ) -> NodeIndex {
        let data = self.calls.len() as u32;
        self.calls.push(CallData { callee, arguments });
        self.push_node(SyntaxKind::CallExpression, data, span)
    }

    pub fn add_prefix_unary_expression(
        &mut self,
        operator: UnaryOperator,
        operand: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.unaries.len() as u32;
        self.unaries.push(UnaryData { operator, operand });
        self.push_node(SyntaxKind::PrefixUnaryExpression, data, span)
    }

    pub fn add_literal_expression(&mut self, text: impl Into<String>, span: Span) -> NodeIndex {
        let data = self.literals.len() as u32;
        self.literals.push(LiteralData { text: text.into() });
        self.push_node(SyntaxKind::LiteralExpression, data, span)
    }

    // =========================================================================
    // Checked accessors
    // =========================================================================

    #[must_use]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.kind != SyntaxKind::SourceFile {
            return None;
        }
        self.source_files.get(node.data as usize)
    }

    #[must_use]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.kind != SyntaxKind::Block {
            return None;
        }
        self.blocks.get(node.data as usize)
    }

    #[must_use]
    pub fn get_expression_statement(&self, node: &Node) -> Option<&ExpressionStatementData> {
        if node.kind != SyntaxKind::ExpressionStatement {
            return None;
        }
        self.expr_statements.get(node.data as usize)
    }

    #[must_use]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.kind != SyntaxKind::VariableStatement {
            return None;
        }
        self.variables.get(node.data as usize)
    }

    #[must_use]
    pub fn get_assignment(&self, node: &Node) -> Option<&AssignmentData> {
        if node.kind != SyntaxKind::AssignmentStatement {
            return None;
        }
        self.assignments.get(node.data as usize)
    }

    #[must_use]
    pub fn get_if_statement(&self, node: &Node) -> Option<&IfData> {
        if node.kind != SyntaxKind::IfStatement {
            return None;
        }
        self.if_statements.get(node.data as usize)
    }

    #[must_use]
    pub fn get_return(&self, node: &Node) -> Option<&ReturnData> {
        if node.kind != SyntaxKind::ReturnStatement {
            return None;
        }
        self.return_data.get(node.data as usize)
    }

    #[must_use]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.kind != SyntaxKind::FunctionDeclaration {
            return None;
        }
        self.functions.get(node.data as usize)
    }

    #[must_use]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        if node.kind != SyntaxKind::ParameterDeclaration {
            return None;
        }
        self.parameters.get(node.data as usize)
    }

    #[must_use]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.kind != SyntaxKind::Identifier {
            return None;
        }
        self.identifiers.get(node.data as usize)
    }

    #[must_use]
    pub fn get_selector(&self, node: &Node) -> Option<&SelectorData> {
        if node.kind != SyntaxKind::SelectorExpression {
            return None;
        }
        self.selectors.get(node.data as usize)
    }

    #[must_use]
    pub fn get_call(&self, node: &Node) -> Option<&CallData> {
        if node.kind != SyntaxKind::CallExpression {
            return None;
        }
        self.calls.get(node.data as usize)
    }

    #[must_use]
    pub fn get_unary(&self, node: &Node) -> Option<&UnaryData> {
        if node.kind != SyntaxKind::PrefixUnaryExpression {
            return None;
        }
        self.unaries.get(node.data as usize)
    }

    #[must_use]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.kind != SyntaxKind::LiteralExpression {
            return None;
        }
        self.literals.get(node.data as usize)
    }

    /// Text of an identifier node.
    #[must_use]
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node).map(|data| data.text.as_str())
    }

    // =========================================================================
    // Generic traversal
    // =========================================================================

    /// Collect the existing children of a node in source order.
    ///
    /// Absent optional children (`NodeIndex::NONE`) are not included, so
    /// callers can descend without re-checking presence.
    #[must_use]
    pub fn child_nodes(&self, idx: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut children = SmallVec::new();
        let Some(node) = self.get(idx) else {
            return children;
        };
        let mut push = |child: NodeIndex| {
            if child.is_some() {
                children.push(child);
            }
        };
        match node.kind {
            SyntaxKind::Unknown => {}
            SyntaxKind::SourceFile => {
                if let Some(data) = self.get_source_file(node) {
                    data.statements.nodes.iter().copied().for_each(push);
                }
            }
            SyntaxKind::Block => {
                if let Some(data) = self.get_block(node) {
                    data.statements.nodes.iter().copied().for_each(push);
                }
            }
            SyntaxKind::ExpressionStatement => {
                if let Some(data) = self.get_expression_statement(node) {
                    push(data.expression);
                }
            }
            SyntaxKind::VariableStatement => {
                if let Some(data) = self.get_variable(node) {
                    push(data.name);
                    push(data.initializer);
                }
            }
            SyntaxKind::AssignmentStatement => {
                if let Some(data) = self.get_assignment(node) {
                    data.targets.nodes.iter().copied().for_each(&mut push);
                    data.values.nodes.iter().copied().for_each(push);
                }
            }
            SyntaxKind::IfStatement => {
                if let Some(data) = self.get_if_statement(node) {
                    push(data.condition);
                    push(data.then_branch);
                    push(data.else_branch);
                }
            }
            SyntaxKind::ReturnStatement => {
                if let Some(data) = self.get_return(node) {
                    push(data.expression);
                }
            }
            SyntaxKind::FunctionDeclaration => {
                if let Some(data) = self.get_function(node) {
                    push(data.name);
                    data.parameters.nodes.iter().copied().for_each(&mut push);
                    push(data.body);
                }
            }
            SyntaxKind::ParameterDeclaration => {
                if let Some(data) = self.get_parameter(node) {
                    push(data.name);
                }
            }
            SyntaxKind::Identifier | SyntaxKind::LiteralExpression => {}
            SyntaxKind::SelectorExpression => {
                if let Some(data) = self.get_selector(node) {
                    push(data.receiver);
                    push(data.member);
                }
            }
            SyntaxKind::CallExpression => {
                if let Some(data) = self.get_call(node) {
                    push(data.callee);
                    data.arguments.nodes.iter().copied().for_each(push);
                }
            }
            SyntaxKind::PrefixUnaryExpression => {
                if let Some(data) = self.get_unary(node) {
                    push(data.operand);
                }
            }
        }
        children
    }
}
