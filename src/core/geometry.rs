use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

// Twelve corners of a regular icosahedron (golden-ratio rectangles).
const ICOSA_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosa_corners(radius: f32) -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let raw = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    raw.map(|v| v.normalize() * radius)
}

/// Low-poly icosahedron with flat shading.
///
/// Every face gets its own three vertices carrying the face normal, so the
/// mesh is drawn non-indexed with counter-clockwise outward winding.
pub fn flat_icosahedron(radius: f32) -> Vec<Vertex> {
    let corners = icosa_corners(radius);
    let mut out = Vec::with_capacity(ICOSA_FACES.len() * 3);
    for face in ICOSA_FACES {
        let [mut a, b, mut c] = face.map(|i| corners[i]);
        let mut n = (b - a).cross(c - a).normalize();
        let centroid = (a + b + c) / 3.0;
        if n.dot(centroid) < 0.0 {
            std::mem::swap(&mut a, &mut c);
            n = -n;
        }
        for p in [a, b, c] {
            out.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}
