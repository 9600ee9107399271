//! # border-mesh-effects
//!
//! Ready-made visual effects on top of `border-mesh`.
//!
//! Each effect takes the padding box of an element and the element's own
//! [`BorderStyle`] (for the corner radii), reconfigures a [`border_mesh::BorderMesh`]
//! and returns the mesh to hand to a renderer.

mod box_shadow;
mod dashed;
mod gradient;

pub use box_shadow::*;
pub use dashed::*;
pub use gradient::*;

use border_mesh::{Rect, Sides};

/// Content rect grown by the element padding
pub fn padding_rect(content: Rect, padding: &Sides<f32>) -> Rect {
    content.grow(padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use border_mesh::BorderStyle;

    #[test]
    fn test_padding_rect() {
        let content = Rect::from_min_size([10.0, 10.0], [50.0, 20.0]);
        let rect = padding_rect(content, &Sides::new(1.0, 2.0, 3.0, 4.0));

        assert_eq!(rect, Rect::new([6.0, 9.0], [62.0, 33.0]));
    }

    #[test]
    fn test_effects_share_border_radii() {
        let style = BorderStyle::new().with_radius(6.0);
        let rect = Rect::from_min_size([0.0, 0.0], [60.0, 40.0]);

        let shadow = box_shadow(rect, &style, &BoxShadowStyle::default())
            .unwrap()
            .unwrap();
        let filled = linear_gradient(rect, &style, &LinearGradientStyle::default()).unwrap();

        assert!(!shadow.is_empty());
        assert!(!filled.is_empty());
    }
}
