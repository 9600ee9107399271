use crate::color::Color;
use crate::side::{Corners, Sides};

/// Border description for a rectangle: per-side widths and colors, per-corner radii
///
/// Widths grow the rectangle outwards; negative values are treated as zero by the
/// generator. Radii are measured on the outer edge of the border.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderStyle {
    pub widths: Sides<f32>,
    pub radii: Corners<f32>,
    pub colors: Sides<Color>,
}

impl BorderStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same width, radius and color on every side and corner
    pub fn uniform(width: f32, radius: f32, color: Color) -> Self {
        Self {
            widths: Sides::splat(width),
            radii: Corners::splat(radius),
            colors: Sides::splat(color),
        }
    }

    pub fn with_widths(mut self, widths: Sides<f32>) -> Self {
        self.widths = widths;
        self
    }

    pub fn with_width(self, width: f32) -> Self {
        self.with_widths(Sides::splat(width))
    }

    pub fn with_radii(mut self, radii: Corners<f32>) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_radius(self, radius: f32) -> Self {
        self.with_radii(Corners::splat(radius))
    }

    pub fn with_colors(mut self, colors: Sides<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_color(self, color: Color) -> Self {
        self.with_colors(Sides::splat(color))
    }
}

/// Flags controlling how the border ribbon is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Inner edge fades to fully transparent
    pub fade: bool,

    /// Border grows inwards from the outer edge (inner edge follows the radius)
    pub inset: bool,

    /// Generate arc-length texture coordinates per side
    pub side_uv: bool,
}

impl RenderFlags {
    pub const fn new(fade: bool, inset: bool, side_uv: bool) -> Self {
        Self {
            fade,
            inset,
            side_uv,
        }
    }

    pub const fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    pub const fn with_inset(mut self, inset: bool) -> Self {
        self.inset = inset;
        self
    }

    pub const fn with_side_uv(mut self, side_uv: bool) -> Self {
        self.side_uv = side_uv;
        self
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self::new(false, true, false)
    }
}
