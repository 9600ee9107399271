//! Two-color linear gradient over the filled rounded rect.

use border_mesh::{css, BorderMesh, BorderStyle, Color, Mesh, MeshError, Rect, Vertex};

/// Visual styling for a linear gradient fill
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientStyle {
    /// Color at the top edge (or the right edge at 90°)
    pub top: Color,
    /// Color at the bottom edge (or the left edge at 90°)
    pub bottom: Color,
    /// Gradient direction in degrees: 0 is vertical, 90 is horizontal
    pub rotation_degrees: f32,
}

impl Default for LinearGradientStyle {
    fn default() -> Self {
        Self {
            top: Color::transparent(),
            bottom: css::BLACK,
            rotation_degrees: 0.0,
        }
    }
}

impl LinearGradientStyle {
    /// Rotation mapped to [0, 1]
    pub fn rotation(&self) -> f32 {
        (self.rotation_degrees / 90.0).clamp(0.0, 1.0)
    }

    /// Tint for a vertex with the given filled-mesh UV
    pub fn tint(&self, uv: [f32; 2]) -> Color {
        let [x, y] = uv;
        let weight = y + (x - y) * self.rotation();
        self.bottom.lerp(self.top, weight)
    }
}

/// Fill `rect` with the rounded outline of `border`, tinted by the gradient
pub fn linear_gradient(
    rect: Rect,
    border: &BorderStyle,
    style: &LinearGradientStyle,
) -> Result<Mesh, MeshError> {
    let mut filled = BorderMesh::new(rect, border);
    let mut mesh = filled.generate_filled()?.clone();
    apply_gradient(&mut mesh.vertices, style);
    Ok(mesh)
}

/// Overwrite vertex tints from their UVs
pub fn apply_gradient(vertices: &mut [Vertex], style: &LinearGradientStyle) {
    for vertex in vertices {
        vertex.color = style.tint(vertex.uv).to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(rotation_degrees: f32) -> LinearGradientStyle {
        LinearGradientStyle {
            top: Color::rgb(1.0, 1.0, 1.0),
            bottom: Color::rgb(0.0, 0.0, 0.0),
            rotation_degrees,
        }
    }

    #[test]
    fn test_rotation_is_clamped() {
        assert_eq!(style(-30.0).rotation(), 0.0);
        assert_eq!(style(45.0).rotation(), 0.5);
        assert_eq!(style(180.0).rotation(), 1.0);
    }

    #[test]
    fn test_vertical_gradient_follows_v() {
        let style = style(0.0);
        assert_eq!(style.tint([0.3, 1.0]), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(style.tint([0.9, 0.0]), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(style.tint([0.0, 0.5]).r, 0.5);
    }

    #[test]
    fn test_horizontal_gradient_follows_u() {
        let style = style(90.0);
        assert_eq!(style.tint([1.0, 0.0]), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(style.tint([0.25, 1.0]).g, 0.25);
    }

    #[test]
    fn test_gradient_mesh_top_is_top_color() {
        let rect = Rect::from_min_size([0.0, 0.0], [50.0, 30.0]);
        let mesh = linear_gradient(rect, &BorderStyle::new(), &style(0.0)).unwrap();

        // Sharp corners: first ring vertex is the top-left corner, v = 1
        assert_eq!(mesh.vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
        let center = mesh.vertices[mesh.vertices.len() - 1];
        assert_eq!(center.color, [0.5, 0.5, 0.5, 1.0]);
    }
}
