//! # Member Module
//!
//! The instance protocol for enumeration members.
//!
//! A `Member` is a handle to one singleton constant of one enumeration
//! type. Equality, hashing, and ordering are all scoped by the owning
//! type's identity: members of different enumerations never compare equal
//! or ordered, even under identical names.

use crate::ty::{EnumType, MemberData};
use crate::types::Value;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One constant of an enumeration type.
///
/// Handles are cheap to clone; all handles to the same declared name of the
/// same type refer to the same singleton and compare equal.
#[derive(Clone)]
pub struct Member {
    ty: EnumType,
    index: usize,
}

impl Member {
    /// Build a handle for the member at a resolved index.
    ///
    /// The index is always in range: handles are only created by the
    /// owning type's lookup and iteration paths.
    pub(crate) fn new(ty: EnumType, index: usize) -> Self {
        Self { ty, index }
    }

    /// The enumeration type this member belongs to.
    #[must_use]
    pub fn ty(&self) -> &EnumType {
        &self.ty
    }

    /// The member's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data().name
    }

    /// The member's associated value, if one was supplied.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.data().value.as_ref()
    }

    /// The member's position in the type's resolved order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The member's position in the original declaration, which differs
    /// from [`Self::index`] when value ordering reordered the members.
    #[must_use]
    pub fn declaration_index(&self) -> usize {
        self.data().declaration_index
    }

    /// The next member in resolved order.
    ///
    /// Returns `None` on the last member: exhaustion of a finite
    /// sequence, not a failure.
    ///
    /// ```
    /// use sigil_core::{Declaration, EnumType};
    ///
    /// let lights = EnumType::new(Declaration::parse("TrafficLight", "red, amber, green")?)?;
    /// let red = lights.member("red")?;
    /// let amber = red.successor().expect("red is not last");
    /// assert_eq!(amber, lights.member("amber")?);
    /// assert!(lights.member("green")?.successor().is_none());
    /// # Ok::<(), sigil_core::SigilError>(())
    /// ```
    #[must_use]
    pub fn successor(&self) -> Option<Self> {
        self.ty.member_at(self.index + 1)
    }

    fn data(&self) -> &MemberData {
        &self.ty.data.members[self.index]
    }
}

impl PartialEq for Member {
    /// Identity equality, scoped by the owning type.
    fn eq(&self, other: &Self) -> bool {
        self.ty.id() == other.ty.id() && self.index == other.index
    }
}

impl Eq for Member {}

impl Hash for Member {
    /// Hashes (type id, index) so the hash agrees with the identity-based
    /// equality, unlike hashing the associated value, which would collide
    /// every unvalued member across all enumerations.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.id().hash(state);
        self.index.hash(state);
    }
}

impl PartialOrd for Member {
    /// Members of one type order by resolved index; members of different
    /// types are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.ty.id() == other.ty.id()).then(|| self.index.cmp(&other.index))
    }
}

impl fmt::Display for Member {
    /// Renders as `TypeName.memberName`, with `(value=v)` appended only
    /// when the value was supplied explicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.ty.name(), self.name())?;
        if let Some(value) = self.value() {
            write!(f, "(value={value})")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Member {
    /// Mirrors `Display`: the display form is how you name the constant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// TESTS
// =============================================================================
