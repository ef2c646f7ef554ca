//! # Declaration Module
//!
//! Declaration parsing and validation for the Sigil mechanism.
//!
//! - Normalize builder calls and textual bodies into one ordered entry list
//! - Validate names before any type is constructed
//! - Reject duplicates, empties, and reserved names
//! - No inference: a declaration says exactly what it says

use crate::primitives::{
    MAX_MEMBER_COUNT, MAX_NAME_LENGTH, MAX_TYPE_NAME_LENGTH, RESERVED_NAMES, RESERVED_PREFIX,
};
use crate::types::{SigilError, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// DECLARATION ENTRIES
// =============================================================================

/// One `(name, optional value)` pair in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclEntry {
    /// The member name, unique within its declaration.
    pub name: String,
    /// The associated value, or `None` for "use declaration order".
    pub value: Option<Value>,
}

impl DeclEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// =============================================================================
// DECLARATION
// =============================================================================

/// The transient input describing an enumeration: a type name plus an
/// ordered list of member entries.
///
/// A `Declaration` is consumed by `EnumType::new` and does not persist
/// beyond construction. It can be built programmatically, parsed from a
/// textual body, or deserialized from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Name of the enumeration type being declared.
    pub type_name: String,
    /// Member entries in declaration order.
    pub entries: Vec<DeclEntry>,
}

impl Declaration {
    /// Start an empty declaration for the named enumeration.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a member with no associated value.
    #[must_use]
    pub fn member(self, name: impl Into<String>) -> Self {
        self.entry(name, None)
    }

    /// Append a member with an associated value.
    #[must_use]
    pub fn member_with_value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entry(name, Some(value.into()))
    }

    /// Append a member with an optional value.
    #[must_use]
    pub fn entry(mut self, name: impl Into<String>, value: Option<Value>) -> Self {
        self.entries.push(DeclEntry::new(name, value));
        self
    }

    /// Number of declared members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no members have been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a textual declaration body.
    ///
    /// Member tokens are separated by commas and/or newlines; blank tokens
    /// (trailing commas, empty lines) are normalization artifacts, not
    /// errors. Each token is either a bare `name` or a `name = value`
    /// assignment, where the value is an integer literal or a quoted
    /// string.
    ///
    /// Comma-separated single-line bodies and one-name-per-line bodies are
    /// equivalent:
    ///
    /// ```
    /// use sigil_core::Declaration;
    ///
    /// let inline = Declaration::parse("Colour", "red, blue, yellow")?;
    /// let lines = Declaration::parse("Colour", "red,\nblue,\nyellow")?;
    /// assert_eq!(inline, lines);
    /// # Ok::<(), sigil_core::SigilError>(())
    /// ```
    ///
    /// Returns `SigilError::Syntax` for malformed tokens. Name-level rules
    /// (duplicates, reserved names) are checked by [`Self::validate`], not
    /// here.
    pub fn parse(type_name: impl Into<String>, body: &str) -> Result<Self, SigilError> {
        let mut decl = Self::new(type_name);

        for token in body.split(['\n', ',']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            decl = match token.split_once('=') {
                None => decl.entry(token, None),
                Some((name, raw)) => {
                    let value = parse_value(raw.trim())?;
                    decl.entry(name.trim(), Some(value))
                }
            };
        }

        Ok(decl)
    }

    /// Validate the declaration without constructing anything.
    ///
    /// Checks, in order:
    /// - the type name is a valid identifier within length limits
    /// - at least one member is declared, and not more than the limit
    /// - every member name is a valid identifier within length limits
    /// - no member name is reserved (protocol surface or `_`-prefixed)
    /// - no member name appears twice
    ///
    /// This is a pure check with no side effects; `EnumType::new` calls it
    /// before resolving order.
    pub fn validate(&self) -> Result<(), SigilError> {
        if !is_identifier(&self.type_name) || self.type_name.len() > MAX_TYPE_NAME_LENGTH {
            return Err(SigilError::InvalidTypeName(self.type_name.clone()));
        }

        if self.entries.is_empty() {
            return Err(SigilError::EmptyDeclaration);
        }

        if self.entries.len() > MAX_MEMBER_COUNT {
            return Err(SigilError::TooManyMembers(self.entries.len()));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            let name = entry.name.as_str();

            if !is_identifier(name) || name.len() > MAX_NAME_LENGTH {
                return Err(SigilError::InvalidName(name.to_string()));
            }

            if name.starts_with(RESERVED_PREFIX) || RESERVED_NAMES.contains(&name) {
                return Err(SigilError::ReservedName(name.to_string()));
            }

            if !seen.insert(name) {
                return Err(SigilError::DuplicateName(name.to_string()));
            }
        }

        Ok(())
    }
}

/// Parse the value side of a `name = value` token.
///
/// Accepts an integer literal or a string quoted with `"` or `'`.
fn parse_value(raw: &str) -> Result<Value, SigilError> {
    if raw.is_empty() {
        return Err(SigilError::Syntax("missing value after '='".to_string()));
    }

    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            return match rest.strip_suffix(quote) {
                Some(inner) if !inner.contains(quote) => Ok(Value::from(inner)),
                _ => Err(SigilError::Syntax(format!("unterminated string: {raw}"))),
            };
        }
    }

    raw.parse::<i64>()
        .map(Value::Int)
        .map_err(|_| SigilError::Syntax(format!("not an integer or quoted string: {raw}")))
}

/// Check whether a name is a plain ASCII identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// =============================================================================
// TESTS
// =============================================================================
