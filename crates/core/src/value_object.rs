//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two instances holding the same
/// attribute values are interchangeable. A canonical monetary amount such as
/// `"1234.5"` is a value object, while an estate item (which carries an
/// `ItemId`) is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(String);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount("10".into()), Amount("10".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
