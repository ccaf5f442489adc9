//! Computed properties: a value paired with the formula that produces it.

use crate::types::LengthUnit;

/// A computed quantity of a finger-joint layout.
///
/// `expression` is a host-syntax formula referencing other properties by
/// their unqualified `name`. Evaluating it with the values of the properties
/// it references reproduces `value` within [`crate::TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub value: f64,
    pub expression: String,
    pub comment: String,
    pub unit: LengthUnit,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        expression: impl Into<String>,
        comment: impl Into<String>,
        unit: LengthUnit,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            expression: expression.into(),
            comment: comment.into(),
            unit,
        }
    }

    /// Value rounded to the nearest integer, for count properties. `None`
    /// when the rounded value is not representable as a `u32`.
    pub fn count(&self) -> Option<u32> {
        let rounded = self.value.round();
        if (0.0..=f64::from(u32::MAX)).contains(&rounded) {
            Some(rounded as u32)
        } else {
            None
        }
    }
}
