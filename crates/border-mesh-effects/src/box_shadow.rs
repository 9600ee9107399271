//! Soft box shadow drawn as a border that fades to transparent.

use border_mesh::{
    css, BorderMesh, BorderStyle, Color, Mesh, MeshError, Rect, RenderFlags, Sides,
};

/// Visual styling for a box shadow
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadowStyle {
    /// Shadow extent per side
    pub widths: Sides<f32>,
    /// Draw the shadow inside the padding box instead of around it
    pub inset: bool,
    /// Color at the opaque edge of the shadow
    pub color: Color,
}

impl Default for BoxShadowStyle {
    fn default() -> Self {
        Self {
            widths: Sides::splat(5.0),
            inset: false,
            color: css::BLACK,
        }
    }
}

/// Build a box shadow mesh around `rect`
///
/// The corner geometry comes from `border`; the shadow replaces its widths and
/// colors. Returns `Ok(None)` when every shadow width is zero.
pub fn box_shadow(
    rect: Rect,
    border: &BorderStyle,
    style: &BoxShadowStyle,
) -> Result<Option<Mesh>, MeshError> {
    let widths = style.widths;
    let mut mesh = BorderMesh::new(rect, border);
    mesh.override_widths(widths.top, widths.right, widths.bottom, widths.left);
    mesh.override_style(
        style.color,
        RenderFlags::default()
            .with_fade(true)
            .with_inset(style.inset),
    );

    match mesh.generate_border() {
        Ok(_) => Ok(mesh.into_mesh()),
        Err(MeshError::NoVisibleSides) => {
            log::debug!("box shadow skipped, no visible sides");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size([0.0, 0.0], [80.0, 40.0])
    }

    #[test]
    fn test_shadow_fades_inner_edge() {
        let style = BoxShadowStyle {
            color: Color::rgb(0.1, 0.2, 0.3),
            ..Default::default()
        };
        let mesh = box_shadow(rect(), &BorderStyle::new().with_radius(8.0), &style)
            .unwrap()
            .unwrap();

        for pair in mesh.vertices.chunks_exact(2) {
            assert_eq!(pair[0].color, [0.1, 0.2, 0.3, 1.0]);
            assert_eq!(pair[1].color[3], 0.0);
        }
    }

    #[test]
    fn test_zero_shadow_is_skipped() {
        let style = BoxShadowStyle {
            widths: Sides::splat(0.0),
            ..Default::default()
        };
        assert_eq!(box_shadow(rect(), &BorderStyle::new(), &style), Ok(None));
    }

    #[test]
    fn test_outset_shadow_leaves_rect_uncovered() {
        // Sharp corners, outset: the shadow ribbon lies outside the padding box
        let mesh = box_shadow(rect(), &BorderStyle::new(), &BoxShadowStyle::default())
            .unwrap()
            .unwrap();

        let outside = |v: &border_mesh::Vertex| {
            let p = v.position();
            p.x <= 0.0 || p.x >= 80.0 || p.y <= 0.0 || p.y >= 40.0
        };
        assert!(mesh.vertices.iter().all(outside));
    }
}
