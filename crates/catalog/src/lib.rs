//! Item variants stocked by the warehouse.
//!
//! Each variant carries the shared capability set (identity, name, quantity)
//! plus its own immutable fields; no behavior beyond construction and
//! textual rendering.

pub mod electronic;
pub mod grocery;

pub use electronic::ElectronicItem;
pub use grocery::GroceryItem;
