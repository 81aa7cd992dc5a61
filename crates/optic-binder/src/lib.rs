//! Host-resolved program facts for the optic usage checker.
//!
//! The checker performs no name resolution or type inference of its own: a
//! front end resolves every identifier use to a binding, every call to its
//! callee's signature where statically known, and every binding to a type.
//! This crate holds those facts (`BinderState`, `TypeTable`) plus the
//! serialized unit of analysis exchanged with the host (`SourceUnit`).

pub mod state;
pub use state::{BinderState, Binding, BindingId, FunctionId, FunctionSignature};

pub mod types;
pub use types::{Type, TypeId, TypeTable};

pub mod unit;
pub use unit::SourceUnit;
