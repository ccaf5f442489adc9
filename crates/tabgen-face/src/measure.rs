//! Measuring a face selection into layout inputs.

use tabgen_core::{Alias, FaceError};

use crate::face::{is_edge_face, FaceId};
use crate::orientation::face_orientation;
use crate::provider::{are_parallel, GeometryProvider};

/// A user's face selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSelection {
    pub face: FaceId,
    /// Opposite face the secondary distance is measured to
    pub reference: Option<FaceId>,
    /// Whether the joint is cut on both the face and its reference
    pub dual_edge: bool,
    /// Caller-assigned number distinguishing faces of one body
    pub face_number: u32,
}

impl FaceSelection {
    pub fn single(face: FaceId, face_number: u32) -> Self {
        Self {
            face,
            reference: None,
            dual_edge: false,
            face_number,
        }
    }

    pub fn dual(face: FaceId, reference: FaceId, face_number: u32) -> Self {
        Self {
            face,
            reference: Some(reference),
            dual_edge: true,
            face_number,
        }
    }
}

/// Measured dimensions of a selected face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMeasurement {
    pub alias: Alias,
    pub orientation: String,
    pub face_length: f64,
    pub face_width: f64,
    pub secondary_distance: f64,
}

/// Measure a selection.
///
/// The face must be an edge face of its body. A reference face must be
/// parallel to it; dual edge selections require one.
pub fn measure<P>(provider: &P, selection: &FaceSelection) -> Result<FaceMeasurement, FaceError>
where
    P: GeometryProvider + ?Sized,
{
    let not_found = |id| FaceError::FaceNotFound { id };

    let face = provider.face(selection.face).ok_or_else(|| not_found(selection.face))?;
    let body = provider.body_of(selection.face).ok_or_else(|| not_found(selection.face))?;
    if !is_edge_face(body, face.id) {
        return Err(FaceError::NotAnEdgeFace { id: face.id });
    }

    let secondary_distance = match selection.reference {
        Some(id) => {
            let reference = provider.face(id).ok_or_else(|| not_found(id))?;
            if !are_parallel(face, reference) {
                return Err(FaceError::ReferenceNotParallel { id });
            }
            provider.distance_between(face, reference)
        }
        None if selection.dual_edge => return Err(FaceError::MissingReference),
        None => 0.0,
    };

    let orientation = face_orientation(face.u_direction, face.v_direction);
    let alias = Alias::clean(&format!("{} {}{}", body.name, orientation, selection.face_number));

    Ok(FaceMeasurement {
        alias,
        orientation,
        face_length: face.length(),
        face_width: face.width(),
        secondary_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::BodyInfo;
    use crate::provider::BodySet;
    use glam::DVec3;

    fn bodies() -> BodySet {
        BodySet::new(vec![BodyInfo::cuboid(
            "Box Side",
            DVec3::ZERO,
            DVec3::new(300.0, 200.0, 3.2),
            1,
        )])
    }

    #[test]
    fn test_measure_dual_edge() {
        let m = measure(&bodies(), &FaceSelection::dual(3, 4, 1)).unwrap();
        assert_eq!(m.alias.as_str(), "box_side_xz1");
        assert_eq!(m.face_length, 300.0);
        assert_eq!(m.face_width, 3.2);
        assert_eq!(m.secondary_distance, 200.0);
    }

    #[test]
    fn test_measure_single_edge() {
        let m = measure(&bodies(), &FaceSelection::single(5, 2)).unwrap();
        assert_eq!(m.alias.as_str(), "box_side_yz2");
        assert_eq!(m.face_length, 200.0);
        assert_eq!(m.secondary_distance, 0.0);
    }

    #[test]
    fn test_measure_errors() {
        let bodies = bodies();
        assert_eq!(
            measure(&bodies, &FaceSelection::single(1, 1)),
            Err(FaceError::NotAnEdgeFace { id: 1 })
        );
        assert_eq!(
            measure(&bodies, &FaceSelection::single(42, 1)),
            Err(FaceError::FaceNotFound { id: 42 })
        );
        assert_eq!(
            measure(&bodies, &FaceSelection::dual(3, 5, 1)),
            Err(FaceError::ReferenceNotParallel { id: 5 })
        );
        let missing = FaceSelection { reference: None, ..FaceSelection::dual(3, 4, 1) };
        assert_eq!(measure(&bodies, &missing), Err(FaceError::MissingReference));
    }
}
