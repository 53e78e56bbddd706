use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

const P: f32 = 0.5;

/// Corners of each face, wound c0 c1 c2 / c2 c3 c0.
#[rustfmt::skip]
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    [[-P, -P, -P], [ P, -P, -P], [ P,  P, -P], [-P,  P, -P]], // -Z
    [[-P, -P,  P], [ P, -P,  P], [ P,  P,  P], [-P,  P,  P]], // +Z
    [[-P,  P,  P], [-P,  P, -P], [-P, -P, -P], [-P, -P,  P]], // -X
    [[ P,  P,  P], [ P,  P, -P], [ P, -P, -P], [ P, -P,  P]], // +X
    [[-P, -P, -P], [ P, -P, -P], [ P, -P,  P], [-P, -P,  P]], // -Y
    [[-P,  P, -P], [ P,  P, -P], [ P,  P,  P], [-P,  P,  P]], // +Y
];

/// Atlas rectangle `[u0, v0, u1, v1]` for each face of a 4x3 cube-cross texture.
/// c0 maps to (u0, v0), c1 to (u1, v0), c2 to (u1, v1), c3 to (u0, v1).
#[rustfmt::skip]
const FACE_UVS: [[f32; 4]; 6] = [
    [0.00, 0.34, 0.25, 0.66],
    [0.25, 0.34, 0.50, 0.66],
    [0.25, 0.66, 0.50, 1.00],
    [0.25, 0.00, 0.50, 0.34],
    [0.50, 0.34, 0.75, 0.66],
    [0.75, 0.34, 1.00, 0.66],
];

/// Unit cube centered at the origin as a non-indexed triangle list (36 vertices).
pub fn textured_cube() -> Vec<TexturedVertex> {
    let mut vertices = Vec::with_capacity(36);
    for (corners, [u0, v0, u1, v1]) in FACE_CORNERS.iter().zip(FACE_UVS) {
        let uvs = [[u0, v0], [u1, v0], [u1, v1], [u0, v1]];
        for i in [0, 1, 2, 2, 3, 0] {
            vertices.push(TexturedVertex {
                position: corners[i],
                uv: uvs[i],
            });
        }
    }
    vertices
}
