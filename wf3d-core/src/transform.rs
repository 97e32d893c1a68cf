/// 3D transformation matrices, the vertex pipeline, and the screen mapper
use nalgebra::{Matrix4, Vector3};

use crate::geometry::Mesh;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        // Apply rotations in order: Z, Y, X
        rz * ry * rx
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a scale matrix
    pub fn scale_matrix(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }
}

/// An integer pixel coordinate. May fall outside the framebuffer; the
/// rasterizer's bounds check decides what actually gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sentinel for non-finite projections. Far outside any buffer, so the
    /// bounds check drops every pixel of a line touching it.
    pub const OFFSCREEN: ScreenPoint = ScreenPoint {
        x: i32::MIN,
        y: i32::MIN,
    };
}

/// Map NDC x/y (nominally [-1, 1]) to pixel coordinates.
///
/// NDC y grows upward, buffer rows grow downward, so y is flipped. The cast
/// truncates toward zero. Out-of-range results are legitimate; they are
/// clipped at write time, not here. Non-finite input maps to
/// [`ScreenPoint::OFFSCREEN`] because Rust's saturating float casts would
/// otherwise turn NaN into an in-bounds pixel at 0.
pub fn ndc_to_screen(ndc_x: f32, ndc_y: f32, width: u32, height: u32) -> ScreenPoint {
    if !ndc_x.is_finite() || !ndc_y.is_finite() {
        return ScreenPoint::OFFSCREEN;
    }
    let x = ((ndc_x + 1.0) * 0.5 * width as f32) as i32;
    let y = ((1.0 - ndc_y) * 0.5 * height as f32) as i32;
    ScreenPoint::new(x, y)
}

/// Project every vertex of a mesh to screen space.
///
/// Composes `projection * view * model` once, then for each vertex performs
/// the perspective divide and maps to pixels. The output is one point per
/// vertex, in vertex order. A vertex exactly on the camera's focal plane has
/// clip w = 0; the divide is left unguarded and the resulting non-finite NDC
/// becomes [`ScreenPoint::OFFSCREEN`].
pub fn project_mesh(
    mesh: &Mesh,
    model: &Matrix4<f32>,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
    width: u32,
    height: u32,
) -> Vec<ScreenPoint> {
    let mvp = Transform::mvp_matrix(model, view, projection);
    mesh.vertices()
        .iter()
        .map(|vertex| {
            let clip = mvp * vertex.position;
            ndc_to_screen(clip.x / clip.w, clip.y / clip.w, width, height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Projection;
    use nalgebra::Vector4;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::default();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::default();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_mvp_applies_model_before_projection() {
        let model = Transform::translation_matrix(1.0, 0.0, 0.0);
        let view = Matrix4::identity();
        let projection = Transform::scale_matrix(2.0, 2.0, 2.0);

        let mvp = Transform::mvp_matrix(&model, &view, &projection);
        let p = mvp * Vector4::new(0.0, 0.0, 0.0, 1.0);

        // Translate first, scale second
        assert!((p.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_mapper_center_and_corners() {
        assert_eq!(ndc_to_screen(0.0, 0.0, 100, 50), ScreenPoint::new(50, 25));
        // NDC (-1, 1) is the top-left pixel: y is flipped
        assert_eq!(ndc_to_screen(-1.0, 1.0, 100, 50), ScreenPoint::new(0, 0));
        assert_eq!(ndc_to_screen(1.0, -1.0, 100, 50), ScreenPoint::new(100, 50));
    }

    #[test]
    fn test_screen_mapper_truncates_toward_zero() {
        // (1 + 0.58) * 0.5 * 10 = 7.9
        assert_eq!(ndc_to_screen(0.58, 1.0, 10, 10).x, 7);
    }

    #[test]
    fn test_screen_mapper_allows_out_of_range() {
        let p = ndc_to_screen(3.0, -3.0, 100, 50);
        assert_eq!(p, ScreenPoint::new(200, 100));
        let q = ndc_to_screen(-3.0, 3.0, 100, 50);
        assert!(q.x < 0 && q.y < 0);
    }

    #[test]
    fn test_screen_mapper_drops_non_finite() {
        assert_eq!(ndc_to_screen(f32::NAN, 0.0, 100, 50), ScreenPoint::OFFSCREEN);
        assert_eq!(
            ndc_to_screen(0.0, f32::INFINITY, 100, 50),
            ScreenPoint::OFFSCREEN
        );
    }

    #[test]
    fn test_project_mesh_preserves_vertex_order() {
        let mesh = Mesh::cube();
        let identity = Matrix4::identity();
        let model = Transform::translation_matrix(0.0, 0.0, -5.0);
        let projection = Projection::default().matrix();

        let points = project_mesh(&mesh, &model, &identity, &projection, 1280, 640);
        assert_eq!(points.len(), mesh.vertices().len());
    }

    /// Reference scenario from the original renderer: unit cube pushed back
    /// 5 units, fov 60 degrees, aspect 2, into a 1280x640 buffer.
    #[test]
    fn test_reference_cube_projection() {
        let mesh = Mesh::cube();
        let model = Transform::translation_matrix(0.0, 0.0, -5.0);
        let view = Matrix4::identity();
        let projection = Projection::new(std::f32::consts::PI / 3.0, 2.0, 0.1, 100.0).matrix();

        let points = project_mesh(&mesh, &model, &view, &projection, 1280, 640);

        let expected = [
            ScreenPoint::new(547, 412), // (-1,-1,-1), 6 units from camera
            ScreenPoint::new(732, 412),
            ScreenPoint::new(732, 227),
            ScreenPoint::new(547, 227),
            ScreenPoint::new(501, 458), // (-1,-1, 1), 4 units from camera
            ScreenPoint::new(778, 458),
            ScreenPoint::new(778, 181),
            ScreenPoint::new(501, 181),
        ];
        assert_eq!(points, expected);

        // Every projected corner lands near the buffer center, offset in
        // proportion to the 1/5 perspective scale
        for p in &points {
            assert!((p.x - 640).abs() < 160);
            assert!((p.y - 320).abs() < 150);
        }

        // All 12 edges are non-degenerate segments
        for edge in mesh.edges() {
            assert_ne!(points[edge.from], points[edge.to]);
        }
    }
}
