use crate::color::Color;
use crate::error::MeshError;
use glam::Vec2;

/// Largest vertex count addressable by `u16` indices
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Vertex format with position, texture coordinate and tint
///
/// Positions carry a zero z so the buffers can be fed to 3D pipelines as-is.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos: [pos.x, pos.y, 0.0],
            uv: [0.0, 0.0],
            color: color.to_array(),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.color[3] = alpha;
    }
}

/// A mesh consisting of vertices and 16-bit indices for triangle rendering
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

/// Growable vertex/index buffers with an enforced 16-bit index budget
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            mesh: Mesh {
                vertices: Vec::with_capacity(vertex_capacity),
                indices: Vec::with_capacity(index_capacity),
            },
        }
    }

    /// Number of vertices appended so far
    pub fn len(&self) -> usize {
        self.mesh.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.vertices.is_empty()
    }

    /// Append a vertex and return its index
    pub fn append_vertex(&mut self, vertex: Vertex) -> Result<u16, MeshError> {
        let index = u16::try_from(self.mesh.vertices.len()).map_err(|_| {
            MeshError::IndexBudgetExceeded {
                vertices: self.mesh.vertices.len() + 1,
            }
        })?;
        self.mesh.vertices.push(vertex);
        Ok(index)
    }

    pub fn append_triangle(&mut self, a: u16, b: u16, c: u16) {
        debug_assert!(
            [a, b, c].iter().all(|&i| (i as usize) < self.len()),
            "triangle references a vertex that has not been appended"
        );
        self.mesh.indices.extend_from_slice(&[a, b, c]);
    }

    /// Drop the most recently appended vertex
    pub fn discard_last_vertex(&mut self) -> Option<Vertex> {
        self.mesh.vertices.pop()
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.mesh.vertices
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.mesh.vertices
    }

    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_sequential_indices() {
        let mut builder = MeshBuilder::new();
        let a = builder.append_vertex(Vertex::default()).unwrap();
        let b = builder.append_vertex(Vertex::default()).unwrap();
        let c = builder.append_vertex(Vertex::default()).unwrap();
        builder.append_triangle(a, b, c);

        let mesh = builder.finish();
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_index_budget_is_enforced() {
        let mut builder = MeshBuilder::with_capacity(MAX_VERTICES, 0);
        for _ in 0..MAX_VERTICES {
            builder.append_vertex(Vertex::default()).unwrap();
        }
        assert_eq!(
            builder.append_vertex(Vertex::default()),
            Err(MeshError::IndexBudgetExceeded {
                vertices: MAX_VERTICES + 1
            })
        );
        assert_eq!(builder.len(), MAX_VERTICES);
    }

    #[test]
    fn test_vertex_keeps_zero_depth() {
        let v = Vertex::new(Vec2::new(3.0, 4.0), Color::rgb(1.0, 0.5, 0.0));
        assert_eq!(v.pos, [3.0, 4.0, 0.0]);
        assert_eq!(v.color, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(v.position(), Vec2::new(3.0, 4.0));
    }
}
