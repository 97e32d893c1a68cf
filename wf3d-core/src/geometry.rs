/// Geometry primitives for wireframe rendering
use nalgebra::Vector4;
use thiserror::Error;

/// Errors raised while assembling geometry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("edge {edge} references vertex {index}, but mesh has {vertex_count} vertices")]
    EdgeOutOfBounds {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// A model-space vertex stored as a homogeneous position (w = 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector4<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector4::new(x, y, z, 1.0),
        }
    }
}

/// A pair of indices into the owning mesh's vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// A wireframe mesh: an ordered vertex list plus an ordered edge list.
///
/// Source geometry is immutable once built. Transforms never modify a mesh
/// in place, so the same mesh can be redrawn every frame without drift.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Build a mesh, validating that every edge index is in range.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GeometryError> {
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.from, edge.to] {
                if index >= vertices.len() {
                    return Err(GeometryError::EdgeOutOfBounds {
                        edge: i,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The reference unit cube: 8 vertices at ±1 on each axis, 12 edges.
    pub fn cube() -> Self {
        let vertices = vec![
            Vertex::new(-1.0, -1.0, -1.0),
            Vertex::new(1.0, -1.0, -1.0),
            Vertex::new(1.0, 1.0, -1.0),
            Vertex::new(-1.0, 1.0, -1.0),
            Vertex::new(-1.0, -1.0, 1.0),
            Vertex::new(1.0, -1.0, 1.0),
            Vertex::new(1.0, 1.0, 1.0),
            Vertex::new(-1.0, 1.0, 1.0),
        ];
        let edges = vec![
            // back face
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            // front face
            Edge::new(4, 5),
            Edge::new(5, 6),
            Edge::new(6, 7),
            Edge::new(7, 4),
            // sides
            Edge::new(0, 4),
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];
        // Constant indices, all in range
        Self { vertices, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_homogeneous() {
        let v = Vertex::new(1.0, 2.0, 3.0);
        assert_eq!(v.position.w, 1.0);
    }

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
    }

    #[test]
    fn test_cube_vertices_on_unit_corners() {
        for v in Mesh::cube().vertices() {
            assert_eq!(v.position.x.abs(), 1.0);
            assert_eq!(v.position.y.abs(), 1.0);
            assert_eq!(v.position.z.abs(), 1.0);
        }
    }

    #[test]
    fn test_edge_validation_rejects_bad_index() {
        let vertices = vec![Vertex::new(0.0, 0.0, 0.0), Vertex::new(1.0, 0.0, 0.0)];
        let edges = vec![Edge::new(0, 2)];
        let err = Mesh::new(vertices, edges).unwrap_err();
        assert_eq!(
            err,
            GeometryError::EdgeOutOfBounds {
                edge: 0,
                index: 2,
                vertex_count: 2,
            }
        );
    }

    #[test]
    fn test_edge_validation_accepts_valid_mesh() {
        let vertices = vec![Vertex::new(0.0, 0.0, 0.0), Vertex::new(1.0, 0.0, 0.0)];
        let edges = vec![Edge::new(0, 1), Edge::new(1, 0)];
        assert!(Mesh::new(vertices, edges).is_ok());
    }
}
