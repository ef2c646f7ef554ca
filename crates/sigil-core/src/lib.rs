//! # sigil-core
//!
//! Runtime enumeration types with singleton members - THE MECHANISM.
//!
//! Sigil turns a declaration - an ordered list of names, each optionally
//! carrying a comparable value - into a distinct, immutable enumeration
//! type whose members are singletons with type-scoped identity.
//!
//! ## The protocol
//!
//! - **Declare**: builder calls, a textual body, or the `declare_enums!`
//!   macro, all normalizing to the same `Declaration`
//! - **Construct**: `EnumType::new` builds the type and every member
//!   atomically; nothing mutates afterwards
//! - **Order**: ascending by value when every member has one and all
//!   values share a domain, declaration order otherwise
//! - **Use**: iterate, look up by name, take successors, test membership
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no I/O, no network dependencies
//! - Deterministic: BTreeMap only, no floats, no randomness
//! - Immutable: a constructed enumeration can never change
//! - All failures flow through `Result<_, SigilError>`; the crate never
//!   panics

// =============================================================================
// MODULES
// =============================================================================

pub mod decl;
mod macros;
pub mod member;
pub mod order;
pub mod primitives;
pub mod registry;
pub mod set;
pub mod ty;
pub mod types;

// =============================================================================
// RE-EXPORTS: Declaration surface
// =============================================================================

pub use decl::{DeclEntry, Declaration};

// =============================================================================
// RE-EXPORTS: Types and members
// =============================================================================

pub use member::Member;
pub use order::OrderPolicy;
pub use set::MemberSet;
pub use ty::{EnumType, Members};
pub use types::{SigilError, TypeId, Value};

// =============================================================================
// RE-EXPORTS: Registry
// =============================================================================

pub use registry::{Registry, registry};
