//! # Enumeration Type Module
//!
//! Constructs enumeration types from validated declarations.
//!
//! An `EnumType` and all of its members come into existence together,
//! atomically, and are never mutated afterwards. The handle is a cheap
//! clone over shared immutable data, so types and members can be passed
//! around and shared across threads freely.

use crate::decl::Declaration;
use crate::member::Member;
use crate::order::{self, OrderPolicy};
use crate::types::{SigilError, TypeId, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide allocator for type identities.
///
/// Monotonic and never reused, so two constructions can never alias even
/// across threads.
static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// INTERNAL REPRESENTATION
// =============================================================================

/// Per-member data, stored in resolved order.
#[derive(Debug)]
pub(crate) struct MemberData {
    /// The declared name, unique within the type.
    pub(crate) name: String,
    /// The associated value, if one was supplied.
    pub(crate) value: Option<Value>,
    /// The member's position in the original declaration.
    pub(crate) declaration_index: usize,
}

/// The shared immutable payload behind an `EnumType` handle.
#[derive(Debug)]
pub(crate) struct TypeData {
    /// Unique identity of this construction.
    pub(crate) id: TypeId,
    /// The enumeration's name, used in display forms.
    pub(crate) name: String,
    /// How the resolved order was determined.
    pub(crate) policy: OrderPolicy,
    /// Members in resolved order; a member's index is its position here.
    pub(crate) members: Vec<MemberData>,
    /// Name → resolved index lookup table.
    pub(crate) by_name: BTreeMap<String, usize>,
}

// =============================================================================
// ENUM TYPE
// =============================================================================

/// A constructed enumeration type: a closed, ordered set of singleton
/// members.
///
/// Cloning the handle shares the same underlying type; equality is
/// construction identity, so two types built from identical declarations
/// are still distinct and their members never compare equal.
#[derive(Clone)]
pub struct EnumType {
    pub(crate) data: Arc<TypeData>,
}

impl EnumType {
    /// Construct an enumeration type from a declaration.
    ///
    /// Validates the declaration, resolves the canonical member order, and
    /// builds every member singleton plus the name lookup table in one
    /// step. The declaration is consumed; the resulting type is immutable.
    pub fn new(decl: Declaration) -> Result<Self, SigilError> {
        decl.validate()?;
        let (policy, order) = order::resolve(&decl.entries)?;

        let mut entries: Vec<_> = decl.entries.into_iter().map(Some).collect();
        let mut members = Vec::with_capacity(order.len());
        let mut by_name = BTreeMap::new();

        for (index, &declaration_index) in order.iter().enumerate() {
            // Each declaration index appears exactly once in the resolved
            // permutation, so the take cannot miss.
            let Some(entry) = entries[declaration_index].take() else {
                continue;
            };
            by_name.insert(entry.name.clone(), index);
            members.push(MemberData {
                name: entry.name,
                value: entry.value,
                declaration_index,
            });
        }

        Ok(Self {
            data: Arc::new(TypeData {
                id: TypeId(NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed)),
                name: decl.type_name,
                policy,
                members,
                by_name,
            }),
        })
    }

    /// The unique identity of this construction.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.data.id
    }

    /// The enumeration's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.members.len()
    }

    /// An enumeration always has at least one member, so this is always
    /// false; provided for iterator-adjacent API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.members.is_empty()
    }

    /// How this type's canonical order was determined.
    #[must_use]
    pub fn order_policy(&self) -> OrderPolicy {
        self.data.policy
    }

    /// Look up a member by name.
    ///
    /// Returns `SigilError::MemberNotFound` on a miss; every hit for the
    /// same name yields handles to the same singleton member.
    pub fn member(&self, name: &str) -> Result<Member, SigilError> {
        self.data
            .by_name
            .get(name)
            .map(|&index| Member::new(self.clone(), index))
            .ok_or_else(|| SigilError::MemberNotFound {
                type_name: self.data.name.clone(),
                name: name.to_string(),
            })
    }

    /// Check whether a member with this name exists.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.data.by_name.contains_key(name)
    }

    /// The first member in resolved order.
    #[must_use]
    pub fn first(&self) -> Option<Member> {
        self.member_at(0)
    }

    /// Iterate the members in resolved order.
    ///
    /// Each call starts fresh from the first member; the iterator is
    /// finite and exact-size.
    #[must_use]
    pub fn iter(&self) -> Members {
        Members {
            ty: self.clone(),
            front: 0,
            back: self.len(),
        }
    }

    /// The member at a resolved index, if in range.
    #[must_use]
    pub(crate) fn member_at(&self, index: usize) -> Option<Member> {
        (index < self.len()).then(|| Member::new(self.clone(), index))
    }
}

impl PartialEq for EnumType {
    /// Types compare by construction identity, never structurally.
    fn eq(&self, other: &Self) -> bool {
        self.data.id == other.data.id
    }
}

impl Eq for EnumType {}

impl std::hash::Hash for EnumType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.data.id.hash(state);
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data.name)
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.data.name)
            .field("id", &self.data.id)
            .field("len", &self.data.members.len())
            .finish()
    }
}

impl IntoIterator for &EnumType {
    type Item = Member;
    type IntoIter = Members;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// MEMBER ITERATOR
// =============================================================================

/// Iterator over an enumeration's members in resolved order.
#[derive(Debug, Clone)]
pub struct Members {
    ty: EnumType,
    front: usize,
    back: usize,
}

impl Iterator for Members {
    type Item = Member;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let member = self.ty.member_at(self.front);
        self.front += 1;
        member
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Members {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.ty.member_at(self.back)
    }
}

impl ExactSizeIterator for Members {}

// =============================================================================
// TESTS
// =============================================================================
