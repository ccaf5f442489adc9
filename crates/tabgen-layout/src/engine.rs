//! Layout orchestration.

use log::debug;
use tabgen_core::{LayoutError, LayoutInputs};

use crate::policy::LayoutPolicy;
use crate::result::LayoutResult;
use crate::validate::validate;

/// Validates inputs, selects the policy for the configured finger type and
/// runs it. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        LayoutEngine
    }

    /// Compute the layout for one face.
    pub fn compute(&self, inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
        validate(inputs)?;

        let policy = LayoutPolicy::for_finger_type(inputs.finger_type);
        debug!(
            target: "tabgen::layout",
            "computing {} layout for face length {} {}",
            policy, inputs.face_length, inputs.unit
        );

        let result = policy.apply(inputs)?;
        debug!(
            target: "tabgen::layout",
            "{} fingers of width {:.4}, {} notches from {:.4}",
            result.fingers(),
            result.finger_width(),
            result.notches(),
            result.start()
        );

        Ok(result)
    }
}

/// Compute the layout for one face with a default engine.
pub fn compute_layout(inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
    LayoutEngine::new().compute(inputs)
}
