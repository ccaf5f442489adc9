//! Mirrors computed layouts into named, formula-backed parameters.
//!
//! Each property of a layout becomes a parameter named `{alias}_{property}`
//! whose formula references the other generated parameters, so the host
//! document can re-derive the joint when the face changes size.

mod mirror;
mod report;
mod store;

pub use mirror::{ExpressionMirror, MirroredParameter};
pub use report::{MaterializeOutcome, MaterializedParameter, MirrorReport};
pub use store::{InMemoryParameterStore, Parameter, ParameterStore};
