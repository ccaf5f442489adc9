//! Property names of a finger-joint layout.

// Inputs, in registration order
pub const DEFAULT_WIDTH: &str = "default_width";
pub const MARGIN: &str = "margin";
pub const FACE_LENGTH: &str = "face_length";
pub const EDGE_MARGIN: &str = "edge_margin";
pub const DEPTH: &str = "depth";
pub const KERF: &str = "kerf";
pub const DISTANCE: &str = "distance";
pub const INTERIOR_WALLS: &str = "interior_walls";

// Derived, in computation order
pub const ADJUSTED_LENGTH: &str = "adjusted_length";
pub const ADJUSTED_DEPTH: &str = "adjusted_depth";
pub const FINGERS: &str = "fingers";
pub const FINGER_WIDTH: &str = "finger_width";
pub const NOTCH_WIDTH: &str = "notch_width";
pub const FINGER_DISTANCE: &str = "finger_distance";
pub const NOTCHES: &str = "notches";
pub const PATTERN_DISTANCE: &str = "pattern_distance";
pub const OFFSET: &str = "offset";
pub const CORNER_WIDTH: &str = "corner_width";
pub const START: &str = "start";
pub const DISTANCE_TWO: &str = "distance_two";
pub const SECONDARY_COUNT: &str = "secondary_count";
