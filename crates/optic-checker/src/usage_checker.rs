//! Per-file traversal and state tracking for optional-value misuse.
//!
//! One pre-order walk per file maintains two monotonically growing sets:
//! bindings that passed a presence check, and fallible-read call sites whose
//! result is consumed (assigned or branched on). Guard tracking is
//! flow-insensitive: a presence check observed anywhere earlier in the walk
//! guards every later unwrap of the same binding, even when the check sits
//! in a branch that has since closed. That trades precision for a single
//! linear pass; it can miss misuse, it does not invent any.

use rustc_hash::FxHashSet;

use optic_binder::{BinderState, BindingId};
use optic_common::diagnostics::{
    Diagnostic, DiagnosticMessage, diagnostic_messages, format_message,
};
use optic_common::limits::MAX_WALK_DEPTH;
use optic_syntax::{NodeArena, NodeIndex, SyntaxKind, UnaryOperator};

use crate::registry::{MemberRole, is_family_type, member_role};

/// Per-file usage checker.
///
/// State never outlives one file: create a fresh instance per file, so a
/// host driver may check files in parallel without sharing anything.
pub struct UsageChecker<'a> {
    arena: &'a NodeArena,
    binder: &'a BinderState,
    file_name: &'a str,
    /// Bindings that passed a presence check earlier in the walk.
    guarded: FxHashSet<BindingId>,
    /// Fallible-read call sites (callee selector nodes) whose result is
    /// assigned or used as a branch condition.
    consumed: FxHashSet<NodeIndex>,
    diagnostics: Vec<Diagnostic>,
    depth: u32,
}

impl<'a> UsageChecker<'a> {
    pub fn new(arena: &'a NodeArena, binder: &'a BinderState, file_name: &'a str) -> Self {
        Self {
            arena,
            binder,
            file_name,
            guarded: FxHashSet::default(),
            consumed: FxHashSet::default(),
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Walk the file and return the diagnostics in encounter order.
    pub fn check_source_file(mut self, root: NodeIndex) -> Vec<Diagnostic> {
        let _span = tracing::debug_span!("check_usage", file = self.file_name).entered();
        self.visit(root);
        self.diagnostics
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    fn visit(&mut self, idx: NodeIndex) {
        if self.depth >= MAX_WALK_DEPTH {
            return;
        }
        let Some(node) = self.arena.get(idx) else {
            return;
        };

        // Special-cased shapes run before generic descent; children are
        // visited in every case, so selectors inside an assignment or
        // condition still get their own turn below.
        match node.kind {
            SyntaxKind::AssignmentStatement => self.mark_assigned_reads(idx),
            SyntaxKind::VariableStatement => self.mark_initialized_read(idx),
            SyntaxKind::IfStatement => self.mark_tested_read(idx),
            SyntaxKind::SelectorExpression => self.check_selector(idx),
            _ => {}
        }

        self.depth += 1;
        for child in self.arena.child_nodes(idx) {
            self.visit(child);
        }
        self.depth -= 1;
    }

    /// Assignment: binding a call's output to destinations consumes the
    /// result, whatever later happens to the boolean half.
    fn mark_assigned_reads(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        let Some(assign) = self.arena.get_assignment(node) else {
            return;
        };
        for &value in &assign.values.nodes {
            if let Some(sel) = self.callee_selector(value) {
                self.consumed.insert(sel);
            }
        }
    }

    /// Short variable declarations assign too: `ok := v.Ok(&dst)` captures
    /// the result just like a plain assignment.
    fn mark_initialized_read(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        let Some(variable) = self.arena.get_variable(node) else {
            return;
        };
        if let Some(sel) = self.callee_selector(variable.initializer) {
            self.consumed.insert(sel);
        }
    }

    /// Conditional: branching on a call's result consumes it. The test may
    /// be the call itself or a logical negation wrapping it.
    fn mark_tested_read(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        let Some(if_data) = self.arena.get_if_statement(node) else {
            return;
        };
        let mut test = if_data.condition;
        if let Some(test_node) = self.arena.get(test)
            && let Some(unary) = self.arena.get_unary(test_node)
            && unary.operator == UnaryOperator::Not
        {
            test = unary.operand;
        }
        if let Some(sel) = self.callee_selector(test) {
            self.consumed.insert(sel);
        }
    }

    /// Callee selector node of `idx`, when `idx` is a call through a selector.
    fn callee_selector(&self, idx: NodeIndex) -> Option<NodeIndex> {
        let node = self.arena.get(idx)?;
        let call = self.arena.get_call(node)?;
        let callee = self.arena.get(call.callee)?;
        (callee.kind == SyntaxKind::SelectorExpression).then_some(call.callee)
    }

    // =========================================================================
    // Selector dispatch
    // =========================================================================

    fn check_selector(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        let Some(sel) = self.arena.get_selector(node) else {
            return;
        };
        let Some(receiver) = self.receiver_binding(sel.receiver) else {
            return;
        };
        if !is_family_type(&self.binder.type_table, self.binder.binding_type(receiver)) {
            return;
        }
        let Some(member) = self.arena.identifier_text(sel.member) else {
            return;
        };

        match member_role(member) {
            Some(MemberRole::PresenceCheck) => {
                self.guarded.insert(receiver);
            }
            Some(MemberRole::ForcedUnwrap) => {
                if !self.guarded.contains(&receiver) {
                    self.report(idx, member, &diagnostic_messages::UNGUARDED_MUST_OK);
                }
            }
            Some(MemberRole::FallibleRead) => {
                if !self.consumed.contains(&idx) {
                    self.report(idx, member, &diagnostic_messages::UNCHECKED_OK_RESULT);
                }
            }
            None => {}
        }
    }

    /// Binding the receiver expression denotes: a direct identifier use, or
    /// the result slot of a call with exactly one declared result. Anything
    /// else is unresolvable and skipped.
    fn receiver_binding(&self, receiver: NodeIndex) -> Option<BindingId> {
        let node = self.arena.get(receiver)?;
        match node.kind {
            SyntaxKind::Identifier => self.binder.binding_of(receiver),
            SyntaxKind::CallExpression => {
                let function = self.binder.callee_of(receiver)?;
                self.binder.single_result(function)
            }
            _ => None,
        }
    }

    fn report(&mut self, idx: NodeIndex, member: &str, message: &DiagnosticMessage) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        tracing::debug!(
            code = message.code,
            member,
            start = node.span.start,
            "usage diagnostic"
        );
        self.diagnostics.push(Diagnostic {
            file: self.file_name.to_string(),
            start: node.span.start,
            length: node.span.len(),
            message_text: format_message(message.message, &[member]),
            category: message.category,
            code: message.code,
            related_information: Vec::new(),
        });
    }
}

/// Check one file with a fresh checker instance.
pub fn check_source_file(
    arena: &NodeArena,
    binder: &BinderState,
    file_name: &str,
    root: NodeIndex,
) -> Vec<Diagnostic> {
    UsageChecker::new(arena, binder, file_name).check_source_file(root)
}

/// Check a deserialized source unit.
pub fn check_unit(unit: &optic_binder::SourceUnit) -> Vec<Diagnostic> {
    check_source_file(&unit.arena, &unit.binder, &unit.file_name, unit.root)
}
