//! Automatic width: an odd number of equal fingers fills the space
//! between the margins, each as close to the target width as fits.

use tabgen_core::{LayoutError, LayoutInputs};

use crate::names::*;
use crate::policy::LayoutPolicy;
use crate::result::LayoutResult;
use crate::sheet::PropertySheet;
use crate::steps::{self, Inputs};

pub(crate) fn layout(inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
    let mut sheet = PropertySheet::new(inputs.unit);
    let leaves = Inputs::register(&mut sheet, inputs)?;

    let adjusted_length = steps::adjust(&mut sheet, &leaves)?;
    let fingers = steps::odd_finger_count(&mut sheet, &adjusted_length, &leaves.default_width)?;
    let finger_width = sheet.length(
        FINGER_WIDTH,
        adjusted_length / fingers.clone(),
        "nominal width of each finger",
    )?;

    steps::pattern(&mut sheet, &leaves, &fingers, &finger_width, inputs.start_with_tab)?;

    let offset = sheet.length(OFFSET, leaves.margin.clone(), "offset point for start of the finger distance")?;
    steps::placement(&mut sheet, &leaves, &offset, &finger_width, inputs.start_with_tab)?;

    Ok(LayoutResult::new(LayoutPolicy::AutomaticWidth, inputs, sheet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_core::approx_eq;

    #[test]
    fn test_fingers_fill_adjusted_length() {
        let inputs = LayoutInputs {
            margin: 10.0,
            default_width: 20.0,
            ..LayoutInputs::for_face(300.0)
        };
        let result = layout(&inputs).unwrap();

        // 280 / 20 = 14 -> 13 fingers
        assert_eq!(result.fingers(), 13);
        assert!(approx_eq(result.finger_distance(), 280.0));
        assert!(approx_eq(result.offset(), 10.0));
        assert!(approx_eq(result.start(), 10.0 + 280.0 / 13.0));
    }

    #[test]
    fn test_short_face_clamps_to_three_fingers() {
        let inputs = LayoutInputs {
            default_width: 20.0,
            ..LayoutInputs::for_face(30.0)
        };
        let result = layout(&inputs).unwrap();
        assert_eq!(result.fingers(), 3);
        assert!(approx_eq(result.finger_width(), 10.0));
        assert_eq!(result.notches(), 1);
        assert!(approx_eq(result.pattern_distance(), 0.0));
    }

    #[test]
    fn test_formulas_reference_dependencies() {
        let result = layout(&LayoutInputs::for_face(100.0)).unwrap();
        assert_eq!(
            result.get(FINGERS).unwrap().expression,
            "max(3; ceil(floor(adjusted_length / default_width) / 2) * 2 - 1)"
        );
        assert_eq!(result.get(FINGER_WIDTH).unwrap().expression, "adjusted_length / fingers");
        assert_eq!(result.get(OFFSET).unwrap().expression, "margin");
        assert_eq!(result.get(START).unwrap().expression, "offset + finger_width + kerf / 2");
    }
}
