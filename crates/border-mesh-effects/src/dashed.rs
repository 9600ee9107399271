//! Dashed border: a border with arc-length UVs sampled against a 1×N dash pattern.

use border_mesh::{
    css, BorderMesh, BorderStyle, Color, Mesh, MeshError, Rect, RenderFlags, Sides,
};

const OPAQUE: [u8; 4] = [255, 255, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Visual styling for a dashed border
#[derive(Debug, Clone, PartialEq)]
pub struct DashedBorderStyle {
    /// Border width per side
    pub widths: Sides<f32>,
    /// Length of each dash in pattern pixels
    pub solid: u32,
    /// Length of each gap in pattern pixels
    pub clear: u32,
    pub color: Color,
}

impl Default for DashedBorderStyle {
    fn default() -> Self {
        Self {
            widths: Sides::splat(5.0),
            solid: 4,
            clear: 4,
            color: css::BLACK,
        }
    }
}

/// One-pixel-high RGBA run pattern: `solid` opaque pixels, then `clear` transparent ones
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashPattern {
    pixels: Vec<[u8; 4]>,
    solid: u32,
    clear: u32,
}

impl DashPattern {
    /// Generate a pattern of `length` pixels starting with a dash
    ///
    /// Zero run lengths are treated as one pixel.
    pub fn generate(length: usize, solid: u32, clear: u32) -> Self {
        let solid = solid.max(1);
        let clear = clear.max(1);

        let mut pixels = Vec::with_capacity(length);
        let mut run = 0;
        let mut dash = true;
        while pixels.len() < length {
            pixels.push(if dash { OPAQUE } else { CLEAR });
            run += 1;
            let limit = if dash { solid } else { clear };
            if run >= limit {
                run = 0;
                dash = !dash;
            }
        }

        Self {
            pixels,
            solid,
            clear,
        }
    }

    /// Regenerate for an element of `size` when the longest side changed
    ///
    /// Returns whether the pattern was rebuilt.
    pub fn resize_for(&mut self, size: [f32; 2]) -> bool {
        let length = size[0].max(size[1]).max(0.0).floor() as usize;
        if length == self.pixels.len() {
            return false;
        }
        *self = Self::generate(length, self.solid, self.clear);
        true
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Texture width, at least one pixel
    pub fn texture_width(&self) -> usize {
        self.pixels.len().max(1)
    }

    /// Raw RGBA bytes, ready for upload as a 1×N texture
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Dashed border effect with a cached dash pattern
#[derive(Debug, Clone)]
pub struct DashedBorder {
    style: DashedBorderStyle,
    pattern: DashPattern,
}

impl Default for DashedBorder {
    fn default() -> Self {
        Self::new(DashedBorderStyle::default())
    }
}

impl DashedBorder {
    pub fn new(style: DashedBorderStyle) -> Self {
        let pattern = DashPattern::generate(0, style.solid, style.clear);
        Self { style, pattern }
    }

    pub fn style(&self) -> &DashedBorderStyle {
        &self.style
    }

    /// Pattern matching the last built mesh
    pub fn pattern(&self) -> &DashPattern {
        &self.pattern
    }

    /// Build the border mesh for `rect` and refresh the dash pattern if needed
    ///
    /// Returns `Ok(None)` when every width is zero.
    pub fn build(
        &mut self,
        rect: Rect,
        border: &BorderStyle,
    ) -> Result<Option<Mesh>, MeshError> {
        let widths = self.style.widths;
        let mut mesh = BorderMesh::new(rect, border);

        // Pattern spans the border box: the padding box grown by the element widths
        let border_box = mesh.rect();
        if self
            .pattern
            .resize_for([border_box.width(), border_box.height()])
        {
            log::debug!("dash pattern regenerated with {} pixels", self.pattern.len());
        }

        mesh.override_widths(widths.top, widths.right, widths.bottom, widths.left);
        mesh.override_style(
            self.style.color,
            RenderFlags::default()
                .with_fade(false)
                .with_inset(true)
                .with_side_uv(true),
        );

        match mesh.generate_border() {
            Ok(_) => Ok(mesh.into_mesh()),
            Err(MeshError::NoVisibleSides) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
