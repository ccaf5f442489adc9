//! Core types, expression trees, and errors for the TabGen engine.
//!
//! This crate provides the foundational types used across all other tabgen crates:
//! - Expression tree types for host-style parameter formulas
//! - Value types (lengths, units, aliases)
//! - Layout inputs and computed properties
//! - Error types

pub mod errors;
pub mod expr;
pub mod inputs;
pub mod params;
pub mod property;
pub mod types;

pub use errors::*;
pub use expr::*;
pub use inputs::*;
pub use params::*;
pub use property::*;
pub use types::*;
