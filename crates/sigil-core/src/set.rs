//! # Member Set Module
//!
//! Disjunctions of members, built with the `|` operator.
//!
//! `Colour.red | Colour.blue` reads as "red or blue": an explicit,
//! ordered collection answering membership tests with the same
//! type-scoped equality the members themselves use.

use crate::member::Member;
use std::fmt;
use std::ops::BitOr;

/// An ordered, deduplicated collection of members.
///
/// Keeps first-mention order; adding a member that is already present is a
/// no-op. Members of different enumeration types may coexist in one set:
/// membership tests are equality tests, and equality is already
/// type-scoped.
#[derive(Debug, Clone, Default)]
pub struct MemberSet {
    members: Vec<Member>,
}

impl MemberSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, keeping first-mention order.
    pub fn insert(&mut self, member: Member) {
        if !self.contains(&member) {
            self.members.push(member);
        }
    }

    /// Membership test under type-scoped equality.
    #[must_use]
    pub fn contains(&self, member: &Member) -> bool {
        self.members.contains(member)
    }

    /// Number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the set holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate the members in first-mention order.
    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }
}

impl FromIterator<Member> for MemberSet {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut set = Self::new();
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MemberSet {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl BitOr for Member {
    type Output = MemberSet;

    /// `a | b` starts a disjunction.
    fn bitor(self, rhs: Self) -> MemberSet {
        let mut set = MemberSet::new();
        set.insert(self);
        set.insert(rhs);
        set
    }
}

impl BitOr<Member> for MemberSet {
    type Output = Self;

    /// `set | c` extends a disjunction.
    fn bitor(mut self, rhs: Member) -> Self {
        self.insert(rhs);
        self
    }
}

impl BitOr for MemberSet {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        for member in rhs.members {
            self.insert(member);
        }
        self
    }
}

impl fmt::Display for MemberSet {
    /// Renders the disjunction the way it is written: `Colour.red | Colour.blue`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
