//! The closed set of layout policies.

use std::fmt;

use tabgen_core::{FingerType, LayoutError, LayoutInputs};

use crate::result::LayoutResult;
use crate::{automatic, constant_count, user_defined};

/// How a face is divided into fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutPolicy {
    /// Odd count of equal fingers filling the space between the margins.
    AutomaticWidth,
    /// Fixed finger width, count derived, layout centered on the face.
    UserDefinedWidth,
    /// Fixed odd finger count, width derived.
    ConstantCount,
}

impl LayoutPolicy {
    /// The policy for a configured finger type.
    pub fn for_finger_type(finger_type: FingerType) -> Self {
        match finger_type {
            FingerType::Automatic => LayoutPolicy::AutomaticWidth,
            FingerType::UserDefined => LayoutPolicy::UserDefinedWidth,
            FingerType::ConstantCount => LayoutPolicy::ConstantCount,
        }
    }

    pub fn finger_type(&self) -> FingerType {
        match self {
            LayoutPolicy::AutomaticWidth => FingerType::Automatic,
            LayoutPolicy::UserDefinedWidth => FingerType::UserDefined,
            LayoutPolicy::ConstantCount => FingerType::ConstantCount,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutPolicy::AutomaticWidth => "automatic_width",
            LayoutPolicy::UserDefinedWidth => "user_defined_width",
            LayoutPolicy::ConstantCount => "constant_count",
        }
    }

    /// Run this policy. Inputs are expected to be validated.
    pub fn apply(&self, inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
        match self {
            LayoutPolicy::AutomaticWidth => automatic::layout(inputs),
            LayoutPolicy::UserDefinedWidth => user_defined::layout(inputs),
            LayoutPolicy::ConstantCount => constant_count::layout(inputs),
        }
    }
}

impl From<FingerType> for LayoutPolicy {
    fn from(finger_type: FingerType) -> Self {
        LayoutPolicy::for_finger_type(finger_type)
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
