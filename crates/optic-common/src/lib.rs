//! Common types and utilities for the optic usage checker.
//!
//! This crate provides foundational types used across all optic crates:
//! - Source spans (`Span`)
//! - Line/column mapping (`LineMap`, `Position`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message tables)
//! - Centralized limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic types and message tables
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

// Centralized limits and thresholds
pub mod limits;
