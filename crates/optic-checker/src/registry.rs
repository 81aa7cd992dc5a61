//! Type-family registry and member role classification.
//!
//! The checker targets a fixed family of optional-value container types,
//! identified by defining module path and type name. Classification is by
//! identity, never by structure: a look-alike type outside the registry is
//! not flagged, and an unresolvable type is simply not in the family.

use optic_binder::{TypeId, TypeTable};

/// Registered family types: the optional-value container itself and the
/// enumeration type that wraps the same optional mechanism.
const FAMILY_TYPES: &[(&str, &str)] = &[("maybe/optional", "Value"), ("maybe/enum", "Enum")];

/// What a member access on a family type means to the checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberRole {
    /// Proves the value is present: the boolean query (`IsOk`) or the
    /// narrowing copy that is only valid once already proven (`OfOk`).
    PresenceCheck,
    /// Extracts the value and panics when absent (`MustOk`).
    ForcedUnwrap,
    /// Writes the value into a caller-supplied destination and returns a
    /// success flag (`Ok`).
    FallibleRead,
}

/// Whether `type_id` names a registered optional-family type.
#[must_use]
pub fn is_family_type(types: &TypeTable, type_id: TypeId) -> bool {
    let Some((module, name)) = types.named_parts(type_id) else {
        return false;
    };
    FAMILY_TYPES
        .iter()
        .any(|&(m, n)| m == module && n == name)
}

/// Role of a member name on a family type, if it has one.
#[must_use]
pub fn member_role(name: &str) -> Option<MemberRole> {
    match name {
        "IsOk" | "OfOk" => Some(MemberRole::PresenceCheck),
        "MustOk" => Some(MemberRole::ForcedUnwrap),
        "Ok" => Some(MemberRole::FallibleRead),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_roles() {
        assert_eq!(member_role("IsOk"), Some(MemberRole::PresenceCheck));
        assert_eq!(member_role("OfOk"), Some(MemberRole::PresenceCheck));
        assert_eq!(member_role("MustOk"), Some(MemberRole::ForcedUnwrap));
        assert_eq!(member_role("Ok"), Some(MemberRole::FallibleRead));
        assert_eq!(member_role("Or"), None);
        assert_eq!(member_role("isok"), None);
    }

    #[test]
    fn test_family_identity() {
        let mut types = TypeTable::new();
        let optional = types.intern_named("maybe/optional", "Value");
        let enumeration = types.intern_named("maybe/enum", "Enum");
        let look_alike = types.intern_named("acme/optional", "Value");
        let sibling = types.intern_named("maybe/optional", "Iter");

        assert!(is_family_type(&types, optional));
        assert!(is_family_type(&types, enumeration));
        assert!(!is_family_type(&types, look_alike));
        assert!(!is_family_type(&types, sibling));
    }

    #[test]
    fn test_intrinsics_are_not_family() {
        let types = TypeTable::new();
        assert!(!is_family_type(&types, TypeId::UNKNOWN));
        assert!(!is_family_type(&types, TypeId::BOOL));
        assert!(!is_family_type(&types, TypeId(999)));
    }
}
