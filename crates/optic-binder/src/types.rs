//! Resolved static types, identified by defining module path and name.

use serde::{Deserialize, Serialize};

/// Index of a type in a `TypeTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const UNKNOWN: TypeId = TypeId(0);
    pub const BOOL: TypeId = TypeId(1);
    pub const INT: TypeId = TypeId(2);
    pub const STR: TypeId = TypeId(3);
}

/// A resolved static type.
///
/// The checker only ever dispatches on named types; the intrinsics exist so
/// hosts can annotate every binding they export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Unknown,
    Bool,
    Int,
    Str,
    /// A nominal type, identified by its defining module path and name.
    Named { module: String, name: String },
}

/// Interning table of resolved types.
///
/// Named types intern by (module, name) identity; two generic instantiations
/// of the same base type share one entry, which is all the checker needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTable {
    types: Vec<Type>,
}

impl Default for TypeTable {
    fn default() -> Self {
        TypeTable::new()
    }
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable {
            types: vec![Type::Unknown, Type::Bool, Type::Int, Type::Str],
        }
    }

    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.0 as usize)
    }

    /// Intern a named type, reusing the existing entry for the same identity.
    pub fn intern_named(&mut self, module: &str, name: &str) -> TypeId {
        // Tables are tiny (a handful of named types per file); linear scan
        // beats maintaining a lookup index through (de)serialization.
        let found = self.types.iter().position(|ty| {
            matches!(ty, Type::Named { module: m, name: n } if m == module && n == name)
        });
        if let Some(i) = found {
            return TypeId(i as u32);
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(Type::Named {
            module: module.to_string(),
            name: name.to_string(),
        });
        id
    }

    /// Module path and name of a named type, or `None` for anything else.
    #[must_use]
    pub fn named_parts(&self, id: TypeId) -> Option<(&str, &str)> {
        match self.get(id)? {
            Type::Named { module, name } => Some((module.as_str(), name.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_named_reuses_entries() {
        let mut table = TypeTable::new();
        let a = table.intern_named("maybe/optional", "Value");
        let b = table.intern_named("maybe/optional", "Value");
        let c = table.intern_named("maybe/enum", "Enum");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_named_parts() {
        let mut table = TypeTable::new();
        let id = table.intern_named("acme/store", "Record");
        assert_eq!(table.named_parts(id), Some(("acme/store", "Record")));
        assert_eq!(table.named_parts(TypeId::BOOL), None);
        assert_eq!(table.named_parts(TypeId(999)), None);
    }
}
