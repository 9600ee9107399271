use crate::mesh::{Mesh, Vertex};

/// GPU vertex format with Pod/Zeroable for buffer uploading
///
/// Uses u8 colors (Unorm8x4) instead of f32x4, shrinking the vertex from 36 to 24 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub pos: [f32; 3],  // 12 bytes
    pub uv: [f32; 2],   // 8 bytes
    pub color: [u8; 4], // 4 bytes (RGBA, normalized to 0-255)
}

impl From<Vertex> for GpuVertex {
    fn from(vertex: Vertex) -> Self {
        let color = vertex
            .color
            .map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8);

        Self {
            pos: vertex.pos,
            uv: vertex.uv,
            color,
        }
    }
}

impl Mesh {
    /// Vertices converted to the packed GPU layout
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().copied().map(GpuVertex::from).collect()
    }

    /// Index buffer as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use glam::Vec2;

    #[test]
    fn test_vertex_packs_to_24_bytes() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn test_color_is_quantized() {
        let vertex = Vertex::new(Vec2::new(1.0, 2.0), Color::new(1.0, 0.5, 0.0, 2.0));
        let packed = GpuVertex::from(vertex);

        assert_eq!(packed.pos, [1.0, 2.0, 0.0]);
        assert_eq!(packed.color, [255, 128, 0, 255]);
    }

    #[test]
    fn test_index_bytes() {
        let mesh = Mesh {
            vertices: vec![Vertex::default(); 3],
            indices: vec![0, 1, 2],
        };
        assert_eq!(mesh.index_bytes().len(), 6);
        assert_eq!(mesh.gpu_vertices().len(), 3);
    }
}
