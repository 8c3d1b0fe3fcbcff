use crate::math::Vec3;

/// A pair of indices into [`CUBE_VERTICES`].
pub type Edge = (usize, usize);

/// Corners of the unit cube in object space.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0), // 0
    Vec3::new(1.0, -1.0, -1.0),  // 1
    Vec3::new(1.0, 1.0, -1.0),   // 2
    Vec3::new(-1.0, 1.0, -1.0),  // 3
    Vec3::new(-1.0, -1.0, 1.0),  // 4
    Vec3::new(1.0, -1.0, 1.0),   // 5
    Vec3::new(1.0, 1.0, 1.0),    // 6
    Vec3::new(-1.0, 1.0, 1.0),   // 7
];

/// Cube edges as vertex-index pairs.
pub const CUBE_EDGES: [Edge; 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // Front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // Back face
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // Connecting edges
];

/// True when every edge index refers to an existing vertex. Checked once at
/// startup; a violation can only come from editing the tables above.
pub fn edges_in_bounds() -> bool {
    CUBE_EDGES
        .iter()
        .all(|&(a, b)| a < CUBE_VERTICES.len() && b < CUBE_VERTICES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_edges_all_in_bounds() {
        assert_eq!(CUBE_EDGES.len(), 12);
        assert!(edges_in_bounds());
    }

    #[test]
    fn no_duplicate_edges() {
        let mut seen = std::collections::HashSet::new();
        for &(a, b) in CUBE_EDGES.iter() {
            // direction does not matter for a wireframe segment
            assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge ({a}, {b})");
        }
    }

    #[test]
    fn vertices_are_unit_cube_corners() {
        for v in CUBE_VERTICES.iter() {
            assert!(v.x.abs() == 1.0 && v.y.abs() == 1.0 && v.z.abs() == 1.0);
        }
    }
}
