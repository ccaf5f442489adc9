//! Computed layouts.

use indexmap::IndexMap;
use tabgen_core::{LayoutInputs, LengthUnit, ParamMap, Property};

use crate::names::*;
use crate::policy::LayoutPolicy;
use crate::sheet::PropertySheet;

/// The ordered properties of one computed finger-joint layout.
///
/// Immutable once computed. Inputs come first, then derived quantities in
/// dependency order, so every formula only references earlier properties.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    policy: LayoutPolicy,
    unit: LengthUnit,
    start_with_tab: bool,
    properties: IndexMap<String, Property>,
}

impl LayoutResult {
    pub(crate) fn new(policy: LayoutPolicy, inputs: &LayoutInputs, sheet: PropertySheet) -> Self {
        Self {
            policy,
            unit: inputs.unit,
            start_with_tab: inputs.start_with_tab,
            properties: sheet.into_properties(),
        }
    }

    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn start_with_tab(&self) -> bool {
        self.start_with_tab
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.properties.get(name).map(|p| p.value)
    }

    /// Iterate properties in computation order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property values keyed by unqualified name.
    pub fn bindings(&self) -> ParamMap {
        self.iter().map(|p| (p.name.as_str(), p.value)).collect()
    }

    pub fn into_properties(self) -> Vec<Property> {
        self.properties.into_values().collect()
    }

    fn length(&self, name: &str) -> f64 {
        self.value(name).unwrap_or_default()
    }

    fn count(&self, name: &str) -> u32 {
        self.get(name).and_then(Property::count).unwrap_or_default()
    }

    pub fn face_length(&self) -> f64 {
        self.length(FACE_LENGTH)
    }

    pub fn depth(&self) -> f64 {
        self.length(DEPTH)
    }

    pub fn kerf(&self) -> f64 {
        self.length(KERF)
    }

    pub fn adjusted_length(&self) -> f64 {
        self.length(ADJUSTED_LENGTH)
    }

    pub fn adjusted_depth(&self) -> f64 {
        self.length(ADJUSTED_DEPTH)
    }

    pub fn fingers(&self) -> u32 {
        self.count(FINGERS)
    }

    pub fn finger_width(&self) -> f64 {
        self.length(FINGER_WIDTH)
    }

    /// Width actually drawn for each notch, narrowed by the kerf.
    pub fn notch_width(&self) -> f64 {
        self.length(NOTCH_WIDTH)
    }

    pub fn finger_distance(&self) -> f64 {
        self.length(FINGER_DISTANCE)
    }

    pub fn notches(&self) -> u32 {
        self.count(NOTCHES)
    }

    pub fn pattern_distance(&self) -> f64 {
        self.length(PATTERN_DISTANCE)
    }

    pub fn offset(&self) -> f64 {
        self.length(OFFSET)
    }

    pub fn corner_width(&self) -> f64 {
        self.length(CORNER_WIDTH)
    }

    pub fn start(&self) -> f64 {
        self.length(START)
    }

    pub fn distance_two(&self) -> f64 {
        self.length(DISTANCE_TWO)
    }

    pub fn interior_walls(&self) -> u32 {
        self.count(INTERIOR_WALLS)
    }

    /// Present only when the layout has interior walls.
    pub fn secondary_count(&self) -> Option<u32> {
        self.get(SECONDARY_COUNT).and_then(Property::count)
    }

    /// Pattern quantity along the secondary axis.
    pub fn secondary_repeats(&self) -> u32 {
        self.interior_walls().saturating_add(2)
    }

    /// Spacing between consecutive notches, 0 for a single notch.
    pub fn notch_spacing(&self) -> f64 {
        match self.notches() {
            0 | 1 => 0.0,
            n => self.pattern_distance() / f64::from(n - 1),
        }
    }

    /// Start coordinate of every notch along the primary axis.
    pub fn notch_positions(&self) -> Vec<f64> {
        let start = self.start();
        let spacing = self.notch_spacing();
        (0..self.notches())
            .map(|i| start + spacing * f64::from(i))
            .collect()
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.values()
    }
}
