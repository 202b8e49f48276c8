//! 4×4 matrix math for model-view-projection transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`; clip-space depth is
//! mapped to wgpu's `0..1` range.

use wiresphere_core::{PerspectiveCamera, Transform};

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection, depth `near → 0`, `far → 1`.
///
/// `fov_y` is the vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = far * range_inv;
    m[11] = -1.0;
    m[14] = far * near * range_inv;
    m
}

pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Per-axis scale.
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Intrinsic XYZ Euler rotation (`Rx · Ry · Rz`).
pub fn euler_xyz(rotation: [f32; 3]) -> Mat4 {
    mul(
        &rotate_x(rotation[0]),
        &mul(&rotate_y(rotation[1]), &rotate_z(rotation[2])),
    )
}

/// `T · R · S` for a scene transform.
pub fn model(transform: &Transform) -> Mat4 {
    let [px, py, pz] = transform.position;
    let [sx, sy, sz] = transform.scale;
    mul(
        &translate(px, py, pz),
        &mul(&euler_xyz(transform.rotation), &scale(sx, sy, sz)),
    )
}

/// Projection × view for a camera looking down -Z.
pub fn view_projection(camera: &PerspectiveCamera) -> Mat4 {
    let [x, y, z] = camera.position;
    mul(
        &perspective(camera.fov_radians(), camera.aspect, camera.near, camera.far),
        &translate(-x, -y, -z),
    )
}

/// Apply `m` to a point, returning homogeneous clip coordinates.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
