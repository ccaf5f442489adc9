//! Axis naming of faces.

use glam::DVec3;

/// Name the major axes a face spans, for readable aliases.
///
/// The unit u and v directions are averaged; every axis with a non-zero
/// component contributes its letter, ordered by ascending component value.
/// A face spanned by +X and +Y is `"XY"`.
pub fn face_orientation(u_direction: DVec3, v_direction: DVec3) -> String {
    let combined = (u_direction.normalize_or_zero() + v_direction.normalize_or_zero()) / 2.0;

    let mut axes: Vec<(char, f64)> = [('X', combined.x), ('Y', combined.y), ('Z', combined.z)]
        .into_iter()
        .filter(|(_, value)| value.abs() > 1e-9)
        .collect();
    axes.sort_by(|a, b| a.1.total_cmp(&b.1));

    axes.into_iter().map(|(name, _)| name).collect()
}
