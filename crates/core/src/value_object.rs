//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one, create a
/// new one with the new values.
///
/// - **Value Object**: no identity (a category named `Tools` equals any other `Tools`)
/// - **Entity**: has identity (two product records with the same id are the same product)
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy
/// - **Eq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, tests)
pub trait ValueObject: Clone + Eq + core::fmt::Debug {}
