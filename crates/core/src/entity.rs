//! Entity and value-object marker traits.
//!
//! - **Entity**: identity + continuity across state changes. Two entities
//!   with the same id are the same entity.
//! - **Value object**: no identity; compared and shared purely by value,
//!   immutable once constructed.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier. Identifiers are small and `Copy`.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; to
/// "modify" one, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
