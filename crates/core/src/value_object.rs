//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one with the new values. Constructors validate their input and
/// return `DomainResult`, so an existing value object is always well-formed.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
