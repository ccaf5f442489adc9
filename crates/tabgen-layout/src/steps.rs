//! Computation steps shared by the layout policies.
//!
//! Every step defines its properties through the [`PropertySheet`], in the
//! order the properties are listed in a finished layout.

use tabgen_core::{Expression, LayoutError, LayoutInputs, MAX_FINGERS};

use crate::names::*;
use crate::sheet::PropertySheet;

/// References to the registered inputs.
pub(crate) struct Inputs {
    pub default_width: Expression,
    pub margin: Expression,
    pub face_length: Expression,
    pub edge_margin: Expression,
    pub depth: Expression,
    pub kerf: Expression,
    pub distance: Expression,
    pub interior_walls: Expression,
}

impl Inputs {
    pub fn register(sheet: &mut PropertySheet, inputs: &LayoutInputs) -> Result<Self, LayoutError> {
        Ok(Self {
            default_width: sheet.length_input(DEFAULT_WIDTH, inputs.default_width, "default finger width")?,
            margin: sheet.length_input(MARGIN, inputs.margin, "margin from the sides of the face to offset notches")?,
            face_length: sheet.length_input(FACE_LENGTH, inputs.face_length, "length of the face to place fingers")?,
            edge_margin: sheet.length_input(EDGE_MARGIN, inputs.edge_margin, "offset from face to cut notches")?,
            depth: sheet.length_input(DEPTH, inputs.depth, "depth of the notches to cut")?,
            kerf: sheet.length_input(KERF, inputs.kerf, "width of material removed by the cut")?,
            distance: sheet.length_input(DISTANCE, inputs.secondary_distance, "distance to secondary face")?,
            interior_walls: sheet.count_input(INTERIOR_WALLS, inputs.interior_wall_count, "number of interior walls")?,
        })
    }
}

/// `adjusted_length` and `adjusted_depth`. Returns the adjusted length.
pub(crate) fn adjust(sheet: &mut PropertySheet, inputs: &Inputs) -> Result<Expression, LayoutError> {
    let adjusted_length = sheet.length(
        ADJUSTED_LENGTH,
        inputs.face_length.clone() - inputs.margin.clone() * 2.0,
        "adjusted length of the face without margins",
    )?;
    sheet.length(
        ADJUSTED_DEPTH,
        inputs.depth.clone() - inputs.kerf.clone() / 2.0,
        "kerf adjusted depth of cuts",
    )?;
    Ok(adjusted_length)
}

/// The largest odd count of at most `width`-wide fingers that fits in
/// `length`, and never fewer than three. More than [`MAX_FINGERS`] is an
/// input error.
pub(crate) fn odd_finger_count(
    sheet: &mut PropertySheet,
    length: &Expression,
    width: &Expression,
) -> Result<Expression, LayoutError> {
    let raw = (length.clone() / width.clone()).floor();
    let odd = (raw / 2.0).ceil() * 2.0 - 1.0;
    let fingers = sheet.count(
        FINGERS,
        Expression::literal(3.0).max(odd),
        "total number of fingers across the jointed faces",
    )?;

    if let Some(count) = sheet.value(FINGERS).filter(|c| *c > f64::from(MAX_FINGERS)) {
        return Err(LayoutError::invalid(format!(
            "{} fingers of width {} exceed the limit of {}",
            count,
            sheet.value(DEFAULT_WIDTH).unwrap_or_default(),
            MAX_FINGERS
        )));
    }
    Ok(fingers)
}

/// Notch width, finger span, notch count and pattern distance.
/// Returns the finger distance.
pub(crate) fn pattern(
    sheet: &mut PropertySheet,
    inputs: &Inputs,
    fingers: &Expression,
    finger_width: &Expression,
    start_with_tab: bool,
) -> Result<Expression, LayoutError> {
    sheet.length(
        NOTCH_WIDTH,
        finger_width.clone() - inputs.kerf.clone(),
        "kerf adjusted width of notches that are cut",
    )?;
    if sheet.value(NOTCH_WIDTH).is_some_and(|w| w <= 0.0) {
        return Err(LayoutError::invalid(format!(
            "kerf {} is not narrower than the finger width {}",
            sheet.value(KERF).unwrap_or_default(),
            sheet.value(FINGER_WIDTH).unwrap_or_default(),
        )));
    }

    let finger_distance = sheet.length(
        FINGER_DISTANCE,
        finger_width.clone() * fingers.clone(),
        "nominal distance of notch placement",
    )?;

    let half = fingers.clone() / 2.0;
    let notches = if start_with_tab { half.floor() } else { half.ceil() };
    sheet.count(NOTCHES, notches, "number of notches to cut in face")?;

    // Tab-first leaves a finger at each end plus the one the pattern starts after
    let spare = if start_with_tab { 3.0 } else { 1.0 };
    sheet.length(
        PATTERN_DISTANCE,
        finger_distance.clone() - finger_width.clone() * spare,
        "distance over which to place the rectangular pattern",
    )?;

    Ok(finger_distance)
}

/// Corner width, first notch start, secondary distance and, with interior
/// walls, the secondary repeat count.
pub(crate) fn placement(
    sheet: &mut PropertySheet,
    inputs: &Inputs,
    offset: &Expression,
    finger_width: &Expression,
    start_with_tab: bool,
) -> Result<(), LayoutError> {
    sheet.length(CORNER_WIDTH, offset.clone(), "width of the corner cut on each side")?;

    // Only a leading tab shifts the first notch by half the kerf
    let start = if start_with_tab {
        offset.clone() + finger_width.clone() + inputs.kerf.clone() / 2.0
    } else {
        offset.clone()
    };
    sheet.length(START, start, "start point for first notch")?;

    let clearance = inputs.distance.clone() - inputs.depth.clone() - inputs.edge_margin.clone() * 2.0;
    sheet.length(
        DISTANCE_TWO,
        Expression::literal(0.0).max(clearance),
        "distance to second face",
    )?;

    if sheet.value(INTERIOR_WALLS).is_some_and(|walls| walls > 0.0) {
        sheet.count(
            SECONDARY_COUNT,
            inputs.interior_walls.clone() + 2.0,
            "number of pattern repetitions across the secondary axis",
        )?;
    }

    Ok(())
}
