//! Constant count: the finger count is fixed by the caller and the width
//! is derived from the space between the margins.

use tabgen_core::{LayoutError, LayoutInputs};

use crate::names::*;
use crate::policy::LayoutPolicy;
use crate::result::LayoutResult;
use crate::sheet::PropertySheet;
use crate::steps::{self, Inputs};

pub(crate) fn layout(inputs: &LayoutInputs) -> Result<LayoutResult, LayoutError> {
    let count = inputs
        .fixed_count
        .ok_or_else(|| LayoutError::invalid("constant count layout requires a finger count"))?;
    debug_assert!(count >= 3 && count % 2 == 1, "unvalidated finger count {}", count);

    let mut sheet = PropertySheet::new(inputs.unit);
    let leaves = Inputs::register(&mut sheet, inputs)?;
    let fingers = sheet.count_input(FINGERS, count, "total number of fingers across the jointed faces")?;

    let adjusted_length = steps::adjust(&mut sheet, &leaves)?;
    let finger_width = sheet.length(
        FINGER_WIDTH,
        adjusted_length / fingers.clone(),
        "nominal width of each finger",
    )?;

    steps::pattern(&mut sheet, &leaves, &fingers, &finger_width, inputs.start_with_tab)?;

    let offset = sheet.length(OFFSET, leaves.margin.clone(), "offset point for start of the finger distance")?;
    steps::placement(&mut sheet, &leaves, &offset, &finger_width, inputs.start_with_tab)?;

    Ok(LayoutResult::new(LayoutPolicy::ConstantCount, inputs, sheet))
}
