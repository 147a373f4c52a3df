//! Keyed in-memory storage for warehouse items.
//!
//! The repository is generic over any type carrying the item capability set
//! and enforces the uniqueness and quantity invariants at its own boundary.
//! Failures surface as `InventoryError` values; logging is the caller's job.

pub mod repository;

pub use repository::InventoryRepository;
