//! Formula evaluation and dependency resolution for TabGen parameters.
//!
//! This crate resolves:
//! - Formulas against named bindings (`adjusted_length / fingers` -> number)
//! - Evaluation order of a set of formulas, rejecting cycles
//! - Round-trip checks that a property set's formulas reproduce its values

mod evaluate;
mod graph;
mod verify;

pub use evaluate::evaluate;
pub use graph::{resolve_all, resolve_order};
pub use verify::verify_properties;
