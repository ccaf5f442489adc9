//! Turning a layout into notch positions along a face.

use glam::DVec3;
use tabgen_core::PlacementError;
use tabgen_face::FaceInfo;
use tabgen_layout::LayoutResult;

/// The line notches are placed along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Axis {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// The axis along the longer extent of a face, from its origin.
    pub fn along_face(face: &FaceInfo) -> Self {
        Self::new(face.origin, face.length_direction())
    }

    /// Normalized copy, or `None` for a zero or non-finite direction.
    pub fn normalized(&self) -> Option<Axis> {
        if !self.origin.is_finite() {
            return None;
        }
        self.direction
            .try_normalize()
            .map(|direction| Axis::new(self.origin, direction))
    }

    pub fn point_at(&self, distance: f64) -> DVec3 {
        self.origin + self.direction * distance
    }
}

/// Everything a placement sink needs to cut one row of notches.
#[derive(Debug, Clone, PartialEq)]
pub struct NotchPlan {
    /// Normalized primary axis
    pub axis: Axis,
    pub count: u32,
    /// Drawn notch width, kerf-adjusted
    pub width: f64,
    /// Kerf-adjusted cut depth
    pub depth: f64,
    /// Distance between consecutive notch starts
    pub spacing: f64,
    pub pattern_distance: f64,
    /// Start point of every notch on the axis
    pub origins: Vec<DVec3>,
    /// Corner cut width at each end of the face
    pub corner_width: f64,
    /// Extent of the pattern along the secondary axis
    pub secondary_distance: f64,
    pub secondary_repeats: u32,
}

impl NotchPlan {
    /// Plan notches for a layout along `axis`.
    pub fn from_layout(layout: &LayoutResult, axis: Option<Axis>) -> Result<Self, PlacementError> {
        let axis = axis
            .and_then(|a| a.normalized())
            .ok_or(PlacementError::PrimaryAxisMissing)?;

        if layout.notches() == 0 {
            return Err(PlacementError::NothingToPlace);
        }

        let origins = layout
            .notch_positions()
            .into_iter()
            .map(|position| axis.point_at(position))
            .collect();

        Ok(Self {
            axis,
            count: layout.notches(),
            width: layout.notch_width(),
            depth: layout.adjusted_depth(),
            spacing: layout.notch_spacing(),
            pattern_distance: layout.pattern_distance(),
            origins,
            corner_width: layout.corner_width(),
            secondary_distance: layout.distance_two(),
            secondary_repeats: layout.secondary_repeats(),
        })
    }
}

/// Receives notch plans and turns them into sketches and cuts.
pub trait PlacementSink {
    fn place(&mut self, plan: &NotchPlan) -> Result<(), PlacementError>;
}

/// Collects plans without cutting anything.
impl PlacementSink for Vec<NotchPlan> {
    fn place(&mut self, plan: &NotchPlan) -> Result<(), PlacementError> {
        self.push(plan.clone());
        Ok(())
    }
}
