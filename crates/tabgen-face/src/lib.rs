//! Face and body geometry queries feeding TabGen layouts.
//!
//! The layout engine never measures geometry itself. This crate describes
//! the planar faces of a solid body, decides which faces can carry a finger
//! joint, and turns a user's face selection into measured layout inputs.

mod face;
mod measure;
mod orientation;
mod provider;

pub use face::{edge_faces, is_edge_face, BodyInfo, FaceId, FaceInfo};
pub use measure::{measure, FaceMeasurement, FaceSelection};
pub use orientation::face_orientation;
pub use provider::{BodySet, GeometryProvider};
