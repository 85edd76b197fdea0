//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the `ParameterStore` I/O boundary trait
//! but are themselves concrete structs, not traits.

mod collector;
mod tree;

pub use collector::PathCollector;
pub use tree::TreeService;
