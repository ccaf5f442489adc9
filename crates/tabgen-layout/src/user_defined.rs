//! User-defined width: the finger width is fixed, the count is the
//! largest odd count that fits on the face, and the fingers are centered.

use tabgen_core::{LayoutError, LayoutInputs};

use crate::names::*;
use crate::policy::LayoutPolicy;
use crate::result::LayoutResult;
use crate::sheet::PropertySheet;
use crate::steps::{self, Inputs};

pub(crate) fn layout(inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
    let mut sheet = PropertySheet::new(inputs.unit);
    let leaves = Inputs::register(&mut sheet, inputs)?;

    steps::adjust(&mut sheet, &leaves)?;
    // Counted over the whole face; the leftover is split by centering
    let fingers = steps::odd_finger_count(&mut sheet, &leaves.face_length, &leaves.default_width)?;
    let finger_width = sheet.length(
        FINGER_WIDTH,
        leaves.default_width.clone(),
        "nominal width of each finger",
    )?;

    let finger_distance =
        steps::pattern(&mut sheet, &leaves, &fingers, &finger_width, inputs.start_with_tab)?;

    let offset = sheet.length(
        OFFSET,
        (leaves.face_length.clone() - finger_distance) / 2.0,
        "centering offset of the finger distance",
    )?;
    if let Some(shortfall) = sheet.value(OFFSET).filter(|o| *o < 0.0) {
        return Err(LayoutError::invalid(format!(
            "{} fingers of width {} overrun the face by {}",
            sheet.value(FINGERS).unwrap_or_default(),
            inputs.default_width,
            -shortfall * 2.0,
        )));
    }

    steps::placement(&mut sheet, &leaves, &offset, &finger_width, inputs.start_with_tab)?;

    Ok(LayoutResult::new(LayoutPolicy::UserDefinedWidth, inputs, sheet))
}
