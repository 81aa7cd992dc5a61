//! Shared fixture builder for usage-checker tests.
//!
//! The workspace has no parser; tests assemble arenas and binder facts
//! directly, the way a host front end would. Spans are synthesized from a
//! running cursor so every node gets a distinct, ordered source range.

#![allow(dead_code)]

use optic_binder::{BinderState, BindingId, FunctionId, TypeId};
use optic_checker::diagnostics::Diagnostic;
use optic_common::Span;
use optic_syntax::{NodeArena, NodeIndex, NodeList, UnaryOperator};

pub struct UnitBuilder {
    pub arena: NodeArena,
    pub binder: BinderState,
    pub file_name: String,
    cursor: u32,
}

impl UnitBuilder {
    pub fn new() -> UnitBuilder {
        UnitBuilder::named("test.src")
    }

    pub fn named(file_name: &str) -> UnitBuilder {
        UnitBuilder {
            arena: NodeArena::new(),
            binder: BinderState::new(),
            file_name: file_name.to_string(),
            cursor: 0,
        }
    }

    fn next_span(&mut self, width: u32) -> Span {
        let start = self.cursor;
        self.cursor += width + 1;
        Span::new(start, start + width)
    }

    // =========================================================================
    // Types, bindings, functions
    // =========================================================================

    pub fn named_type(&mut self, module: &str, name: &str) -> TypeId {
        self.binder.type_table.intern_named(module, name)
    }

    pub fn optional_type(&mut self) -> TypeId {
        self.named_type("maybe/optional", "Value")
    }

    pub fn enum_type(&mut self) -> TypeId {
        self.named_type("maybe/enum", "Enum")
    }

    pub fn binding(&mut self, name: &str, type_id: TypeId) -> BindingId {
        self.binder.declare_binding(name, type_id, NodeIndex::NONE)
    }

    pub fn function(&mut self, name: &str, result_types: &[TypeId]) -> FunctionId {
        self.binder.declare_function(name, result_types)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// An identifier use resolved to `binding`.
    pub fn use_of(&mut self, name: &str, binding: BindingId) -> NodeIndex {
        let idx = self.ident(name);
        self.binder.record_use(idx, binding);
        idx
    }

    /// An identifier the host could not resolve.
    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let span = self.next_span(name.len() as u32);
        self.arena.add_identifier(name, span)
    }

    pub fn lit(&mut self, text: &str) -> NodeIndex {
        let span = self.next_span(text.len() as u32);
        self.arena.add_literal_expression(text, span)
    }

    pub fn selector(&mut self, receiver: NodeIndex, member: &str) -> NodeIndex {
        let member_span = self.next_span(member.len() as u32);
        let member_idx = self.arena.add_identifier(member, member_span);
        let span = self
            .arena
            .get(receiver)
            .map_or(member_span, |node| node.span.cover(member_span));
        self.arena.add_selector_expression(receiver, member_idx, span)
    }

    pub fn call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let close = self.next_span(2);
        let span = self
            .arena
            .get(callee)
            .map_or(close, |node| node.span.cover(close));
        self.arena
            .add_call_expression(callee, NodeList::from(arguments), span)
    }

    /// A call to a declared function through a plain identifier callee.
    pub fn call_function(
        &mut self,
        function: FunctionId,
        name: &str,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        let callee = self.ident(name);
        let call = self.call(callee, arguments);
        self.binder.record_callee(call, function);
        call
    }

    /// A method call `receiver.member(...)` resolved to `function`.
    pub fn call_method(
        &mut self,
        receiver: NodeIndex,
        member: &str,
        arguments: Vec<NodeIndex>,
        function: FunctionId,
    ) -> NodeIndex {
        let callee = self.selector(receiver, member);
        let call = self.call(callee, arguments);
        self.binder.record_callee(call, function);
        call
    }

    pub fn not(&mut self, operand: NodeIndex) -> NodeIndex {
        let span = self
            .arena
            .get(operand)
            .map_or(Span::ZERO, |node| Span::new(node.span.start, node.span.end + 1));
        self.arena
            .add_prefix_unary_expression(UnaryOperator::Not, operand, span)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let span = self
            .arena
            .get(expression)
            .map_or(Span::ZERO, |node| node.span);
        self.arena.add_expression_statement(expression, span)
    }

    /// `name := initializer`, with the declared name resolved to `binding`.
    pub fn var_init(&mut self, name: &str, binding: BindingId, initializer: NodeIndex) -> NodeIndex {
        let name_idx = self.use_of(name, binding);
        let span = self
            .arena
            .get(initializer)
            .map_or(Span::ZERO, |node| node.span);
        self.arena.add_variable_statement(name_idx, initializer, span)
    }

    pub fn assign(&mut self, targets: Vec<NodeIndex>, values: Vec<NodeIndex>) -> NodeIndex {
        let span = values
            .first()
            .and_then(|&v| self.arena.get(v))
            .map_or(Span::ZERO, |node| node.span);
        self.arena
            .add_assignment_statement(NodeList::from(targets), NodeList::from(values), span)
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let span = self.next_span(1);
        self.arena.add_block(NodeList::from(statements), span)
    }

    pub fn if_stmt(&mut self, condition: NodeIndex, then_statements: Vec<NodeIndex>) -> NodeIndex {
        let then_branch = self.block(then_statements);
        let span = self
            .arena
            .get(condition)
            .map_or(Span::ZERO, |node| node.span);
        self.arena
            .add_if_statement(condition, then_branch, NodeIndex::NONE, span)
    }

    pub fn file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let span = Span::new(0, self.cursor);
        self.arena.add_source_file(NodeList::from(statements), span)
    }

    // =========================================================================
    // Checking
    // =========================================================================

    pub fn check(&self, root: NodeIndex) -> Vec<Diagnostic> {
        optic_checker::check_source_file(&self.arena, &self.binder, &self.file_name, root)
    }
}

/// Diagnostic codes in emission order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}
