//! Inputs to one layout computation.

use crate::types::LengthUnit;

/// How the finger width and count are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FingerType {
    /// Width derived so an odd number of equal fingers fills the face.
    #[default]
    Automatic,
    /// Width fixed by the user, layout centered on the face.
    UserDefined,
    /// Count fixed by the user, width derived.
    ConstantCount,
}

impl FingerType {
    /// Display name used by the command dialog.
    pub fn label(&self) -> &'static str {
        match self {
            FingerType::Automatic => "Automatic Width",
            FingerType::UserDefined => "Constant Width",
            FingerType::ConstantCount => "Constant Count",
        }
    }
}

/// Upper bound on the finger count of one layout.
pub const MAX_FINGERS: u32 = 100_000;

/// Measured face dimensions and user options for one face.
///
/// All lengths share `unit`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutInputs {
    /// Length of the face along the jointed edge
    pub face_length: f64,
    /// Clearance left uncut at both ends of the face
    pub margin: f64,
    /// Target (or fixed) finger width
    pub default_width: f64,
    /// Cut depth, usually the material thickness
    pub depth: f64,
    /// Width of material removed by the cutting tool
    pub kerf: f64,
    /// Distance to the opposite face, 0 if none
    pub secondary_distance: f64,
    /// Clearance subtracted twice from the secondary distance
    pub edge_margin: f64,
    /// Extra pattern repetitions on the secondary axis
    pub interior_wall_count: u32,
    pub start_with_tab: bool,
    pub finger_type: FingerType,
    /// Finger count, only read by [`FingerType::ConstantCount`]
    pub fixed_count: Option<u32>,
    pub unit: LengthUnit,
}

impl Default for LayoutInputs {
    fn default() -> Self {
        Self {
            face_length: 0.0,
            margin: 0.0,
            default_width: 8.0,
            depth: 3.2,
            kerf: 0.0,
            secondary_distance: 0.0,
            edge_margin: 0.0,
            interior_wall_count: 0,
            start_with_tab: true,
            finger_type: FingerType::Automatic,
            fixed_count: None,
            unit: LengthUnit::Mm,
        }
    }
}

impl LayoutInputs {
    /// Inputs for a face of the given length, everything else defaulted.
    pub fn for_face(face_length: f64) -> Self {
        Self {
            face_length,
            ..Self::default()
        }
    }
}
