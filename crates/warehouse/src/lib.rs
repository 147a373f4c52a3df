//! Warehouse orchestration: one repository per stocked variant.
//!
//! The manager drives seed, list, stock adjustment and removal through the
//! same generic code path for every variant, and is the only layer that
//! converts repository failures into logged outcomes.

pub mod manager;


pub use manager::{Stocked, WarehouseManager};
