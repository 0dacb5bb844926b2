//! Entity trait: identity + continuity across edits.

/// Entity marker + minimal interface.
///
/// An estate item keeps its identifier for its whole lifetime, however many
/// times its other fields are replaced.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
