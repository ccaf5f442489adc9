//! Finger-joint generation for rectangular faces of solid bodies.
//!
//! This crate wires the TabGen pipeline together:
//! - [`UserOptions`]: the command options, loadable from JSON
//! - [`TabGenerator`]: computes a layout for a measured face and optionally
//!   persists it as formula-backed parameters
//! - [`NotchPlan`] and [`PlacementSink`]: hand the layout to whatever draws
//!   and cuts the notches
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use tabgen::{Axis, NotchPlan, TabGenerator, UserOptions};
//! use tabgen_face::{measure, BodyInfo, BodySet, FaceSelection, GeometryProvider};
//! use tabgen_mirror::InMemoryParameterStore;
//!
//! let bodies = BodySet::new(vec![BodyInfo::cuboid(
//!     "Side",
//!     DVec3::ZERO,
//!     DVec3::new(300.0, 200.0, 3.2),
//!     1,
//! )]);
//! let measurement = measure(&bodies, &FaceSelection::dual(3, 4, 1)).unwrap();
//!
//! let options = UserOptions { parametric: true, ..UserOptions::default() };
//! let mut store = InMemoryParameterStore::new();
//! let joint = TabGenerator::new().generate(&options, &measurement, &mut store).unwrap();
//! assert_eq!(joint.layout.fingers(), 37);
//!
//! let axis = Axis::along_face(bodies.face(3).unwrap());
//! let mut plans: Vec<NotchPlan> = Vec::new();
//! TabGenerator::new().place(&joint, Some(axis), &mut plans).unwrap();
//! ```

mod error;
mod generator;
mod options;
mod placement;

pub use error::TabGenError;
pub use generator::{FingerJoint, TabGenerator};
pub use options::{FingerPlacement, UserOptions};
pub use placement::{Axis, NotchPlan, PlacementSink};
