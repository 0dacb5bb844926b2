//! Estate inventory domain module.
//!
//! This crate owns the ordered collection of estate items and the rules for
//! creating, editing and removing them. It is deterministic domain logic (no
//! IO, no presentation, no persistence); state lives for as long as the
//! owning [`InventoryStore`] does.

pub mod draft;
pub mod item;
pub mod store;

pub use draft::ItemDraft;
pub use item::Item;
pub use store::InventoryStore;
