//! Collectible data model and reference dataset loading.
//!
//! This crate defines the static collectible catalog types without any
//! database dependency. The dataset ships alongside the binary as JSON and
//! is loaded once at startup; only the runtime `collected` flag on the
//! in-memory records ever changes.

pub mod json;
pub mod types;

pub use json::{CatalogError, load_collectibles};
pub use types::{Collectible, CollectibleKind, region_group};
