/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Symmetric perspective frustum parameters.
///
/// Valid parameters are a caller obligation: the constructor asserts them,
/// since a degenerate frustum (e.g. `far == near`) yields a NaN/Inf matrix
/// that no later stage can recover from.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// `fov` is the vertical field of view in radians.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        assert!(fov > 0.0 && fov < std::f32::consts::PI, "fov out of (0, pi)");
        assert!(aspect > 0.0, "aspect must be positive");
        assert!(near > 0.0, "near plane must be positive");
        assert!(far > near, "far plane must lie beyond near plane");
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Build the perspective projection matrix.
    ///
    /// Camera-space z = -near maps to NDC z = -1 and z = -far to +1 after
    /// the perspective divide; the last row puts -z into clip w.
    pub fn matrix(&self) -> Matrix4<f32> {
        let f = 1.0 / (self.fov / 2.0).tan();
        let depth_scale = (self.far + self.near) / (self.near - self.far);
        let depth_offset = (2.0 * self.far * self.near) / (self.near - self.far);

        #[rustfmt::skip]
        let m = Matrix4::new(
            f / self.aspect, 0.0, 0.0,         0.0,
            0.0,             f,   0.0,         0.0,
            0.0,             0.0, depth_scale, depth_offset,
            0.0,             0.0, -1.0,        0.0,
        );
        m
    }
}

impl Default for Projection {
    fn default() -> Self {
        // 60 degree vertical fov, 2:1 aspect
        Self::new(std::f32::consts::PI / 3.0, 2.0, 0.1, 100.0)
    }
}

/// Camera position and orientation; produces the view matrix
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            position,
            target,
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 0.0))
    }
}
