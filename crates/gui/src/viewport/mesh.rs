use glam::{Mat4, Vec3};
use shared::CylinderParams;

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a], two vertices per segment
#[derive(Clone, Debug, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }

    pub fn segment_count(&self) -> usize {
        self.vertex_count() / 2
    }

    /// Vertex positions, in buffer order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(7)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
    }

    /// Line segments as (start, end, color)
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3, [f32; 4])> + '_ {
        self.vertices.chunks_exact(14).map(|v| {
            (
                Vec3::new(v[0], v[1], v[2]),
                Vec3::new(v[7], v[8], v[9]),
                [v[3], v[4], v[5], v[6]],
            )
        })
    }

    fn push_segment(&mut self, a: Vec3, b: Vec3, c: [f32; 4]) {
        push_line_vert(&mut self.vertices, a, c);
        push_line_vert(&mut self.vertices, b, c);
    }
}

/// Wireframe outline of a tapered cylinder: top ring, bottom ring and one
/// side line per segment. The cylinder axis is local Y, centered on the origin,
/// and every vertex is transformed by `model`.
pub fn cylinder_outline(
    params: &CylinderParams,
    model: Mat4,
    segments: u32,
    color: [f32; 4],
) -> LineMeshData {
    let segments = segments.max(3);
    let hh = params.height as f32 * 0.5;
    let top_r = params.top_radius as f32;
    let bottom_r = params.bottom_radius as f32;

    let ring = |radius: f32, y: f32, i: u32| -> Vec3 {
        let a = (i as f32) * std::f32::consts::TAU / segments as f32;
        model.transform_point3(Vec3::new(radius * a.cos(), y, radius * a.sin()))
    };

    let mut mesh = LineMeshData {
        vertices: Vec::with_capacity(segments as usize * 3 * 14),
    };

    for i in 0..segments {
        let next = (i + 1) % segments;
        // Top ring
        mesh.push_segment(ring(top_r, hh, i), ring(top_r, hh, next), color);
        // Bottom ring
        mesh.push_segment(ring(bottom_r, -hh, i), ring(bottom_r, -hh, next), color);
        // Side
        mesh.push_segment(ring(bottom_r, -hh, i), ring(top_r, hh, i), color);
    }

    mesh
}

/// Connected polyline through `points` (n points → n-1 segments)
pub fn polyline(points: &[Vec3], color: [f32; 4]) -> LineMeshData {
    let mut mesh = LineMeshData::default();
    for pair in points.windows(2) {
        mesh.push_segment(pair[0], pair[1], color);
    }
    mesh
}

// ── Helpers ──────────────────────────────────────────────────

fn push_line_vert(v: &mut Vec<f32>, p: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, c[0], c[1], c[2], c[3]]);
}
