//! Input validation.

use tabgen_core::{FingerType, LayoutError, LayoutInputs, MAX_FINGERS};

/// Check layout inputs before any policy runs.
pub fn validate(inputs: &LayoutInputs) -> Result<(), LayoutError> {
    let lengths = [
        ("face length", inputs.face_length),
        ("margin", inputs.margin),
        ("finger width", inputs.default_width),
        ("depth", inputs.depth),
        ("kerf", inputs.kerf),
        ("secondary distance", inputs.secondary_distance),
        ("edge margin", inputs.edge_margin),
    ];

    for (label, value) in lengths {
        if !value.is_finite() {
            return Err(LayoutError::invalid(format!("{} must be a finite number", label)));
        }
        if value < 0.0 {
            return Err(LayoutError::invalid(format!("{} must not be negative (got {})", label, value)));
        }
    }

    if inputs.face_length <= 0.0 {
        return Err(LayoutError::invalid("face length must be positive"));
    }

    if inputs.margin * 2.0 >= inputs.face_length {
        return Err(LayoutError::invalid(format!(
            "margin {} leaves no usable length on a face of length {}",
            inputs.margin, inputs.face_length
        )));
    }

    if inputs.kerf / 2.0 > inputs.depth {
        return Err(LayoutError::invalid(format!(
            "kerf {} removes more than the cut depth {}",
            inputs.kerf, inputs.depth
        )));
    }

    match inputs.finger_type {
        FingerType::ConstantCount => match inputs.fixed_count {
            None => Err(LayoutError::invalid("constant count layout requires a finger count")),
            Some(count) if count < 3 || count % 2 == 0 || count > MAX_FINGERS => {
                Err(LayoutError::InvalidFingerCount { count })
            }
            Some(_) => Ok(()),
        },
        FingerType::Automatic | FingerType::UserDefined => {
            if inputs.default_width <= 0.0 {
                Err(LayoutError::invalid("finger width must be positive"))
            } else {
                Ok(())
            }
        }
    }
}
