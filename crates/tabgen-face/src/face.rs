//! Planar faces of solid bodies.

use glam::{DVec2, DVec3};

/// Identifier of a face within a [`crate::GeometryProvider`].
pub type FaceId = u64;

/// A planar face with a rectangular parametric range.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceInfo {
    pub id: FaceId,
    pub area: f64,
    /// Parametric extent along u and v
    pub extent: DVec2,
    pub origin: DVec3,
    pub u_direction: DVec3,
    pub v_direction: DVec3,
}

impl FaceInfo {
    /// A rectangular face spanning `extent` from `origin` along `u` and `v`.
    pub fn rectangle(id: FaceId, origin: DVec3, u_direction: DVec3, v_direction: DVec3, extent: DVec2) -> Self {
        Self {
            id,
            area: extent.x * extent.y,
            extent,
            origin,
            u_direction: u_direction.normalize_or_zero(),
            v_direction: v_direction.normalize_or_zero(),
        }
    }

    /// Unit normal, zero for a degenerate face.
    pub fn normal(&self) -> DVec3 {
        self.u_direction.cross(self.v_direction).normalize_or_zero()
    }

    /// The longer parametric extent: the length of the jointed edge.
    pub fn length(&self) -> f64 {
        self.extent.x.max(self.extent.y)
    }

    pub fn width(&self) -> f64 {
        self.extent.x.min(self.extent.y)
    }

    /// Unit direction of the longer extent.
    pub fn length_direction(&self) -> DVec3 {
        if self.extent.x >= self.extent.y {
            self.u_direction
        } else {
            self.v_direction
        }
    }
}

/// A named solid body and its faces.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub faces: Vec<FaceInfo>,
}

impl BodyInfo {
    pub fn new(name: impl Into<String>, faces: Vec<FaceInfo>) -> Self {
        Self { name: name.into(), faces }
    }

    /// An axis-aligned box with one corner at `origin`. Face ids are
    /// assigned from `first_id` in the order bottom, top, front, back,
    /// left, right.
    pub fn cuboid(name: impl Into<String>, origin: DVec3, size: DVec3, first_id: FaceId) -> Self {
        let (x, y, z) = (DVec3::X, DVec3::Y, DVec3::Z);
        let faces = vec![
            FaceInfo::rectangle(first_id, origin, x, y, DVec2::new(size.x, size.y)),
            FaceInfo::rectangle(first_id + 1, origin + z * size.z, x, y, DVec2::new(size.x, size.y)),
            FaceInfo::rectangle(first_id + 2, origin, x, z, DVec2::new(size.x, size.z)),
            FaceInfo::rectangle(first_id + 3, origin + y * size.y, x, z, DVec2::new(size.x, size.z)),
            FaceInfo::rectangle(first_id + 4, origin, y, z, DVec2::new(size.y, size.z)),
            FaceInfo::rectangle(first_id + 5, origin + x * size.x, y, z, DVec2::new(size.y, size.z)),
        ];
        Self::new(name, faces)
    }

    pub fn face(&self, id: FaceId) -> Option<&FaceInfo> {
        self.faces.iter().find(|f| f.id == id)
    }
}

/// Faces that can carry a finger joint: all but the two largest by area.
///
/// The two largest faces of a panel are its caps.
pub fn edge_faces(body: &BodyInfo) -> Vec<&FaceInfo> {
    let mut faces: Vec<&FaceInfo> = body.faces.iter().collect();
    faces.sort_by(|a, b| a.area.total_cmp(&b.area));
    let keep = faces.len().saturating_sub(2);
    faces.truncate(keep);
    faces
}

pub fn is_edge_face(body: &BodyInfo, id: FaceId) -> bool {
    edge_faces(body).iter().any(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> BodyInfo {
        BodyInfo::cuboid("Panel", DVec3::ZERO, DVec3::new(300.0, 200.0, 3.2), 1)
    }

    #[test]
    fn test_caps_are_not_edge_faces() {
        let body = panel();
        let mut ids: Vec<FaceId> = edge_faces(&body).iter().map(|f| f.id).collect();
        ids.sort();
        assert_eq!(ids, vec![3, 4, 5, 6]);
        assert!(!is_edge_face(&body, 1));
        assert!(!is_edge_face(&body, 2));
        assert!(is_edge_face(&body, 3));
    }

    #[test]
    fn test_face_dimensions() {
        let body = panel();
        let side = body.face(5).unwrap();
        assert_eq!(side.length(), 200.0);
        assert_eq!(side.width(), 3.2);
        assert_eq!(side.length_direction(), DVec3::Y);
        assert_eq!(side.normal(), DVec3::X);
    }

    #[test]
    fn test_too_few_faces() {
        let body = BodyInfo::new("Sheet", panel().faces.into_iter().take(2).collect());
        assert!(edge_faces(&body).is_empty());
    }
}
