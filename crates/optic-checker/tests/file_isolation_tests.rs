//! Guarded/consumed state must not leak across file boundaries.

mod common;

use common::{UnitBuilder, codes};
use optic_checker::diagnostics::diagnostic_codes;

#[test]
fn test_guard_does_not_leak_to_another_file() {
    // File A guards its binding; file B unwraps its own binding without a
    // guard. B must still report.
    let mut a = UnitBuilder::named("a.src");
    let a_opt = a.optional_type();
    let a_v = a.binding("v", a_opt);
    let a_recv = a.use_of("v", a_v);
    let a_sel = a.selector(a_recv, "IsOk");
    let a_call = a.call(a_sel, vec![]);
    let a_guard = a.if_stmt(a_call, vec![]);
    let a_root = a.file(vec![a_guard]);

    let mut bu = UnitBuilder::named("b.src");
    let b_opt = bu.optional_type();
    let b_v = bu.binding("v", b_opt);
    let b_recv = bu.use_of("v", b_v);
    let b_sel = bu.selector(b_recv, "MustOk");
    let b_call = bu.call(b_sel, vec![]);
    let b_unwrap = bu.expr_stmt(b_call);
    let b_root = bu.file(vec![b_unwrap]);

    assert!(a.check(a_root).is_empty());
    let b_diags = bu.check(b_root);
    assert_eq!(codes(&b_diags), vec![diagnostic_codes::UNGUARDED_MUST_OK]);
    assert_eq!(b_diags[0].file, "b.src");
}

#[test]
fn test_diagnostics_reference_only_the_offending_file() {
    let mut a = UnitBuilder::named("a.src");
    let a_opt = a.optional_type();
    let a_v = a.binding("v", a_opt);
    let a_recv = a.use_of("v", a_v);
    let a_sel = a.selector(a_recv, "MustOk");
    let a_call = a.call(a_sel, vec![]);
    let a_unwrap = a.expr_stmt(a_call);
    let a_read_recv = a.use_of("v", a_v);
    let a_read_sel = a.selector(a_read_recv, "Ok");
    let a_dst = a.ident("dst");
    let a_read_call = a.call(a_read_sel, vec![a_dst]);
    let a_read = a.expr_stmt(a_read_call);
    let a_root = a.file(vec![a_unwrap, a_read]);

    let mut bu = UnitBuilder::named("b.src");
    let b_opt = bu.optional_type();
    let b_v = bu.binding("v", b_opt);
    let b_guard_recv = bu.use_of("v", b_v);
    let b_guard_sel = bu.selector(b_guard_recv, "IsOk");
    let b_guard_call = bu.call(b_guard_sel, vec![]);
    let b_guard = bu.if_stmt(b_guard_call, vec![]);
    let b_recv = bu.use_of("v", b_v);
    let b_sel = bu.selector(b_recv, "MustOk");
    let b_call = bu.call(b_sel, vec![]);
    let b_unwrap = bu.expr_stmt(b_call);
    let b_root = bu.file(vec![b_guard, b_unwrap]);

    let a_diags = a.check(a_root);
    let b_diags = bu.check(b_root);

    assert_eq!(a_diags.len(), 2);
    assert!(a_diags.iter().all(|d| d.file == "a.src"));
    assert!(b_diags.is_empty());
}

#[test]
fn test_rechecking_a_file_is_deterministic() {
    // Each check runs with a fresh instance; repeating it cannot observe
    // state from the previous run.
    let mut b = UnitBuilder::new();
    let opt = b.optional_type();
    let v = b.binding("v", opt);
    let recv = b.use_of("v", v);
    let sel = b.selector(recv, "MustOk");
    let call = b.call(sel, vec![]);
    let stmt = b.expr_stmt(call);
    let root = b.file(vec![stmt]);

    let first = b.check(root);
    let second = b.check(root);
    assert_eq!(first, second);
    assert_eq!(codes(&first), vec![diagnostic_codes::UNGUARDED_MUST_OK]);
}
