//! Geometry provider interface.

use crate::face::{BodyInfo, FaceId, FaceInfo};

/// Access to the faces and bodies of a document.
pub trait GeometryProvider {
    fn face(&self, id: FaceId) -> Option<&FaceInfo>;

    /// The body owning a face.
    fn body_of(&self, face: FaceId) -> Option<&BodyInfo>;

    /// Perpendicular distance between the planes of two faces, 0 when the
    /// faces are not parallel.
    fn distance_between(&self, face: &FaceInfo, reference: &FaceInfo) -> f64 {
        if !are_parallel(face, reference) {
            return 0.0;
        }
        (reference.origin - face.origin).dot(face.normal()).abs()
    }
}

pub(crate) fn are_parallel(a: &FaceInfo, b: &FaceInfo) -> bool {
    let (na, nb) = (a.normal(), b.normal());
    na != glam::DVec3::ZERO && nb != glam::DVec3::ZERO && na.cross(nb).length() < 1e-9
}

/// A fixed set of bodies held in memory.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<BodyInfo>,
}

impl BodySet {
    pub fn new(bodies: Vec<BodyInfo>) -> Self {
        Self { bodies }
    }

    pub fn push(&mut self, body: BodyInfo) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[BodyInfo] {
        &self.bodies
    }
}

impl GeometryProvider for BodySet {
    fn face(&self, id: FaceId) -> Option<&FaceInfo> {
        self.bodies.iter().find_map(|b| b.face(id))
    }

    fn body_of(&self, face: FaceId) -> Option<&BodyInfo> {
        self.bodies.iter().find(|b| b.face(face).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_distance_between_parallel_faces() {
        let bodies = BodySet::new(vec![BodyInfo::cuboid(
            "Panel",
            DVec3::ZERO,
            DVec3::new(300.0, 200.0, 3.2),
            1,
        )]);
        let front = bodies.face(3).unwrap();
        let back = bodies.face(4).unwrap();
        let side = bodies.face(5).unwrap();

        assert_eq!(bodies.distance_between(front, back), 200.0);
        assert_eq!(bodies.distance_between(back, front), 200.0);
        assert_eq!(bodies.distance_between(front, side), 0.0);
        assert_eq!(bodies.body_of(6).unwrap().name, "Panel");
        assert!(bodies.face(7).is_none());
    }
}
