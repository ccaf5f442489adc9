//! User options of the finger-joint command.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabgen_core::{FingerType, LayoutInputs, LengthUnit};
use tabgen_face::FaceMeasurement;

use crate::error::TabGenError;

/// Where fingers are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerPlacement {
    /// Only the selected face
    SingleEdge,
    /// The selected face and the parallel reference face
    #[default]
    DualEdge,
}

/// Options chosen in the command dialog.
///
/// Missing fields take their defaults when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOptions {
    pub finger_type: FingerType,
    pub placement: FingerPlacement,
    /// Target finger width, or the fixed width for user-defined layouts
    pub tab_width: f64,
    pub material_thickness: f64,
    pub margin: f64,
    pub edge_margin: f64,
    pub interior_walls: u32,
    pub kerf: f64,
    /// Finger count for constant-count layouts
    pub fixed_count: Option<u32>,
    pub start_with_tab: bool,
    /// Persist the layout as formula-backed parameters
    pub parametric: bool,
    /// Compute only, never write parameters
    pub preview: bool,
    pub unit: LengthUnit,
    /// Inputs typed as the name of an existing document parameter,
    /// keyed by input property name
    pub linked_parameters: IndexMap<String, String>,
}

impl Default for UserOptions {
    fn default() -> Self {
        Self {
            finger_type: FingerType::UserDefined,
            placement: FingerPlacement::DualEdge,
            tab_width: 8.0,
            material_thickness: 3.2,
            margin: 0.0,
            edge_margin: 0.0,
            interior_walls: 0,
            kerf: 0.0,
            fixed_count: None,
            start_with_tab: true,
            parametric: false,
            preview: false,
            unit: LengthUnit::Mm,
            linked_parameters: IndexMap::new(),
        }
    }
}

impl UserOptions {
    /// Load options from JSON.
    pub fn from_json(json: &str) -> Result<Self, TabGenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TabGenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether a run with these options writes parameters.
    pub fn writes_parameters(&self) -> bool {
        self.parametric && !self.preview
    }

    /// Check the options against a measured face.
    pub fn validate(&self, measurement: &FaceMeasurement) -> Result<(), TabGenError> {
        if self.placement == FingerPlacement::DualEdge && measurement.secondary_distance <= 0.0 {
            return Err(TabGenError::InvalidOptions {
                reason: "dual edge placement requires a reference face at a positive distance".into(),
            });
        }
        if self.finger_type == FingerType::ConstantCount && self.fixed_count.is_none() {
            return Err(TabGenError::InvalidOptions {
                reason: "constant count requires a finger count".into(),
            });
        }
        Ok(())
    }

    /// Layout inputs for a measured face.
    pub fn layout_inputs(&self, measurement: &FaceMeasurement) -> LayoutInputs {
        let secondary_distance = match self.placement {
            FingerPlacement::DualEdge => measurement.secondary_distance,
            FingerPlacement::SingleEdge => 0.0,
        };
        LayoutInputs {
            face_length: measurement.face_length,
            margin: self.margin,
            default_width: self.tab_width,
            depth: self.material_thickness,
            kerf: self.kerf,
            secondary_distance,
            edge_margin: self.edge_margin,
            interior_wall_count: self.interior_walls,
            start_with_tab: self.start_with_tab,
            finger_type: self.finger_type,
            fixed_count: self.fixed_count,
            unit: self.unit,
        }
    }
}
