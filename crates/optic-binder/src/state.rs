//! Per-file binding and signature tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use optic_syntax::NodeIndex;

use crate::types::{TypeId, TypeTable};

/// Index of a binding in a `BinderState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(pub u32);

/// Index of a function signature in a `BinderState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionId(pub u32);

/// A declared variable, parameter, or function result slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    pub type_id: TypeId,
    /// Declaring node, or `NodeIndex::NONE` for signature result slots.
    pub decl: NodeIndex,
}

/// Declared results of a callable.
///
/// Each declared result owns a result-slot binding. The slot is shared by
/// every call of the function, so a presence check through one call site
/// guards unwraps through any other call site of the same function.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    pub results: Vec<BindingId>,
}

/// Resolved name and type facts for one file.
///
/// Produced by a host front end; the checker only reads. All node keys refer
/// to the arena of the same `SourceUnit`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderState {
    pub type_table: TypeTable,
    bindings: Vec<Binding>,
    functions: Vec<FunctionSignature>,
    /// Identifier node -> binding it refers to.
    uses: FxHashMap<u32, BindingId>,
    /// Call node -> invoked function, where statically known.
    callees: FxHashMap<u32, FunctionId>,
}

impl BinderState {
    pub fn new() -> BinderState {
        BinderState::default()
    }

    // =========================================================================
    // Declaration
    // =========================================================================

    pub fn declare_binding(
        &mut self,
        name: impl Into<String>,
        type_id: TypeId,
        decl: NodeIndex,
    ) -> BindingId {
        let id = BindingId(self.bindings.len() as u32);
        self.bindings.push(Binding {
            name: name.into(),
            type_id,
            decl,
        });
        id
    }

    /// Declare a function, allocating one result-slot binding per result type.
    pub fn declare_function(&mut self, name: &str, result_types: &[TypeId]) -> FunctionId {
        let results = result_types
            .iter()
            .map(|&type_id| self.declare_binding(name, type_id, NodeIndex::NONE))
            .collect();
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(FunctionSignature {
            name: name.to_string(),
            results,
        });
        id
    }

    /// Record that an identifier node refers to a binding.
    pub fn record_use(&mut self, ident: NodeIndex, binding: BindingId) {
        self.uses.insert(ident.0, binding);
    }

    /// Record the statically known callee of a call node.
    pub fn record_callee(&mut self, call: NodeIndex, function: FunctionId) {
        self.callees.insert(call.0, function);
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[must_use]
    pub fn binding(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.0 as usize)
    }

    /// Resolved type of a binding; `Unknown` if the binding does not exist.
    #[must_use]
    pub fn binding_type(&self, id: BindingId) -> TypeId {
        self.binding(id).map_or(TypeId::UNKNOWN, |b| b.type_id)
    }

    #[must_use]
    pub fn function(&self, id: FunctionId) -> Option<&FunctionSignature> {
        self.functions.get(id.0 as usize)
    }

    /// Binding an identifier node refers to, if the host resolved it.
    #[must_use]
    pub fn binding_of(&self, ident: NodeIndex) -> Option<BindingId> {
        self.uses.get(&ident.0).copied()
    }

    /// Invoked function of a call node, if the host resolved it.
    #[must_use]
    pub fn callee_of(&self, call: NodeIndex) -> Option<FunctionId> {
        self.callees.get(&call.0).copied()
    }

    /// Result slot of a function with exactly one declared result.
    ///
    /// Zero- and multi-result functions resolve to nothing; callers treat
    /// them as receivers of unknown type.
    #[must_use]
    pub fn single_result(&self, id: FunctionId) -> Option<BindingId> {
        match self.function(id)?.results.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
