//! Command-line driver for the optic usage checker.
//!
//! The binary is a thin wrapper: discover serialized source units, run one
//! checker instance per file, print diagnostics, and exit non-zero when any
//! were found. Parsing and type resolution happen in the front end that
//! exported the units; this crate never sees raw source.

pub mod args;
pub mod driver;
pub mod reporter;
