/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Component-wise linear interpolation, `t` is not clamped
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        css::WHITE
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::from_srgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::from_srgba(255, 255, 255, 255);
    pub const GRAY: Color = Color::from_srgba(128, 128, 128, 255);
    pub const SILVER: Color = Color::from_srgba(192, 192, 192, 255);
    pub const RED: Color = Color::from_srgba(255, 0, 0, 255);
    pub const LIME: Color = Color::from_srgba(0, 255, 0, 255);
    pub const BLUE: Color = Color::from_srgba(0, 0, 255, 255);
    pub const NAVY: Color = Color::from_srgba(0, 0, 128, 255);
    pub const TEAL: Color = Color::from_srgba(0, 128, 128, 255);
}
