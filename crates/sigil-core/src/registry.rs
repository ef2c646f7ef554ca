//! # Registry Module
//!
//! A define-once, read-many store of enumeration types keyed by name.
//!
//! Construction is the only mutation in the whole mechanism, so the
//! registry guards it with a write lock held across the entire build: a
//! partially-constructed member table is never observable. Reads take the
//! lock briefly and clone the cheap handle out.

use crate::decl::Declaration;
use crate::member::Member;
use crate::ty::EnumType;
use crate::types::SigilError;
use std::collections::BTreeMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// A named store of enumeration types.
///
/// Names are unique: defining the same name twice is an error rather than
/// a replacement, so a looked-up type can never change identity behind a
/// caller's back.
#[derive(Debug, Default)]
pub struct Registry {
    types: RwLock<BTreeMap<String, EnumType>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an enumeration from a declaration and register it under
    /// its type name.
    ///
    /// The write lock is held across validation and construction, so
    /// concurrent definitions of the same name serialize and exactly one
    /// wins; the loser sees `SigilError::AlreadyDefined`.
    pub fn define(&self, decl: Declaration) -> Result<EnumType, SigilError> {
        let mut types = self
            .types
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if types.contains_key(&decl.type_name) {
            return Err(SigilError::AlreadyDefined(decl.type_name));
        }

        let ty = EnumType::new(decl)?;
        types.insert(ty.name().to_string(), ty.clone());
        Ok(ty)
    }

    /// Fetch a registered enumeration by name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<EnumType> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_name)
            .cloned()
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.get(type_name).is_some()
    }

    /// Look up a member through the registry: `lookup("Colour", "red")`.
    ///
    /// Returns `SigilError::TypeNotFound` for an unregistered type and
    /// `SigilError::MemberNotFound` for a known type without that member.
    pub fn lookup(&self, type_name: &str, member_name: &str) -> Result<Member, SigilError> {
        self.get(type_name)
            .ok_or_else(|| SigilError::TypeNotFound(type_name.to_string()))?
            .member(member_name)
    }

    /// Names of all registered enumerations, in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

/// The process-wide registry, created on first access.
#[must_use]
pub fn registry() -> &'static Registry {
    static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);
    &GLOBAL
}

// =============================================================================
// TESTS
// =============================================================================
