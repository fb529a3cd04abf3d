use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Clip-space position in `[-1, 1]²`.
    pub position: [f32; 2],
    /// Screen coordinate in `[0, 1]²`, `v` growing downward.
    pub texcoord: [f32; 2],
}

impl QuadVertex {
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            texcoord: [u, v],
        }
    }
}

/// Covers the whole surface when drawn as a triangle strip.
pub const FULL_SCREEN_QUAD: [QuadVertex; 4] = [
    QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
    QuadVertex::new(1.0, 1.0, 1.0, 0.0),
    QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
    QuadVertex::new(1.0, -1.0, 1.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texcoords_follow_positions_with_v_flipped() {
        for vertex in FULL_SCREEN_QUAD {
            let [x, y] = vertex.position;
            let expected = [(x + 1.0) / 2.0, (1.0 - y) / 2.0];

            assert_eq!(vertex.texcoord, expected);
        }
    }

    #[test]
    fn strip_triangles_cover_all_four_corners() {
        let first: Vec<_> = FULL_SCREEN_QUAD[..3].iter().map(|v| v.position).collect();
        let second: Vec<_> = FULL_SCREEN_QUAD[1..].iter().map(|v| v.position).collect();

        for corner in [[-1.0, 1.0], [1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]] {
            assert!(first.contains(&corner) || second.contains(&corner));
        }
        // shared edge is the anti-diagonal
        assert!(first.contains(&[1.0, 1.0]) && second.contains(&[1.0, 1.0]));
        assert!(first.contains(&[-1.0, -1.0]) && second.contains(&[-1.0, -1.0]));
    }

    #[test]
    fn vertex_is_four_packed_floats() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 16);
        assert_eq!(bytemuck::cast_slice::<QuadVertex, u8>(&FULL_SCREEN_QUAD).len(), 64);
    }
}
