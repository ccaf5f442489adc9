//! Finger-joint layout computation.
//!
//! Given the measured length of a face and the user's sizing options, this
//! crate derives every dimension needed to cut a finger joint: finger count
//! and width, notch count and spacing, start offset, corner width and the
//! distance to the secondary face.
//!
//! # Architecture
//!
//! 1. **Validation**: inputs are checked before any policy runs
//! 2. **Policy**: one of three sizing policies divides the face
//! 3. **Property sheet**: each quantity is defined by a formula over earlier
//!    quantities and valued by evaluating it, so values and formulas agree
//!
//! # Example
//!
//! ```
//! use tabgen_core::LayoutInputs;
//! use tabgen_layout::LayoutEngine;
//!
//! let inputs = LayoutInputs { default_width: 20.0, ..LayoutInputs::for_face(280.0) };
//! let layout = LayoutEngine::new().compute(&inputs).unwrap();
//!
//! assert_eq!(layout.fingers(), 13);
//! for property in &layout {
//!     println!("{} = {} ({})", property.name, property.value, property.expression);
//! }
//! ```

mod automatic;
mod constant_count;
mod engine;
pub mod names;
mod policy;
mod result;
mod sheet;
mod steps;
mod user_defined;
mod validate;

pub use engine::{compute_layout, LayoutEngine};
pub use policy::LayoutPolicy;
pub use result::LayoutResult;
pub use sheet::PropertySheet;
pub use validate::validate;
