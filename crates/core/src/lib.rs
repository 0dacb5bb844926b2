//! `estate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! and export crates (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use value_object::ValueObject;
