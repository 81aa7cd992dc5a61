//! Usage checker for optional-value types.
//!
//! This crate implements the analysis pass:
//! - `registry` - the closed type-family table and member role dispatch
//! - `usage_checker` - the per-file traversal and state tracking
//!
//! The checker consumes a syntax tree with resolved type facts (see
//! `optic_syntax` / `optic_binder`) and produces diagnostics; it performs
//! no parsing, no inference, and no I/O.

pub mod registry;
pub use registry::{MemberRole, is_family_type, member_role};

pub mod usage_checker;
pub use usage_checker::{UsageChecker, check_source_file, check_unit};

pub mod diagnostics {
    pub use optic_common::diagnostics::{
        Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation, diagnostic_codes,
        diagnostic_messages, format_message,
    };
}
