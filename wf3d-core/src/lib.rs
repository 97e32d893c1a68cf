/// WF3D Core Library - Wireframe transform-and-rasterize pipeline
///
/// This library provides the stateless core functionality for software
/// wireframe rendering: mesh geometry, perspective projection, the
/// model/view/projection vertex pipeline, and Bresenham line rasterization
/// into an ARGB framebuffer.

pub mod geometry;
pub mod projection;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Edge, GeometryError, Mesh, Vertex};
pub use projection::{Camera, Projection};
pub use raster::{Color, Framebuffer};
pub use transform::{project_mesh, RotationState, ScreenPoint, Transform};
