use crate::color::Color;
use crate::mesh::Mesh;
use crate::primitives::Rect;
use crate::side::{Corner, Corners, Side, Sides};
use crate::style::{BorderStyle, RenderFlags};
use glam::Vec2;

/// Number of arc samples for a corner of the given radius
///
/// Two samples per unit of radius, never fewer than one so sharp corners still
/// contribute a vertex.
pub fn corner_subdivisions(radius: f32) -> u32 {
    (radius * 2.0).max(1.0).floor() as u32
}

/// Border mesh generator for a single rectangle
///
/// Corner geometry is fixed on construction. Widths, colors and flags can be
/// overridden afterwards to reuse the same rounded outline for different effects,
/// then one of [`BorderMesh::generate_border`] or [`BorderMesh::generate_filled`]
/// produces the mesh.
#[derive(Debug, Clone)]
pub struct BorderMesh {
    pub(crate) rect: Rect,
    pub(crate) radii: Corners<f32>,
    pub(crate) centers: Corners<Vec2>,
    pub(crate) subdivisions: Corners<u32>,
    pub(crate) widths: Sides<f32>,
    pub(crate) colors: Sides<Color>,
    pub(crate) flags: RenderFlags,
    pub(crate) mesh: Option<Mesh>,
}

impl BorderMesh {
    /// Set up corner centers and subdivisions for `rect` bordered by `style`
    ///
    /// The working rect is `rect` grown outwards by the border widths.
    pub fn new(rect: Rect, style: &BorderStyle) -> Self {
        let widths = style.widths.map(|w| w.max(0.0));
        let radii = style.radii.map(|r| r.max(0.0));
        let rect = rect.grow(&widths);

        let [x_min, y_min] = rect.min;
        let [x_max, y_max] = rect.max;
        let centers = Corners::new(
            Vec2::new(x_min + radii.top_left, y_min + radii.top_left),
            Vec2::new(x_max - radii.top_right, y_min + radii.top_right),
            Vec2::new(x_max - radii.bottom_right, y_max - radii.bottom_right),
            Vec2::new(x_min + radii.bottom_left, y_max - radii.bottom_left),
        );

        let half_extent = rect.width().min(rect.height()) * 0.5;
        for (corner, radius) in radii.iter() {
            if *radius > half_extent {
                log::warn!(
                    "{:?} radius {} exceeds half the border extent {}, corners will overlap",
                    corner,
                    radius,
                    half_extent
                );
            }
        }

        Self {
            rect,
            radii,
            centers,
            subdivisions: radii.map(corner_subdivisions),
            widths,
            colors: style.colors,
            flags: RenderFlags::default(),
            mesh: None,
        }
    }

    /// Replace the border widths without touching the corner geometry
    pub fn override_widths(&mut self, top: f32, right: f32, bottom: f32, left: f32) {
        self.widths = Sides::new(top, right, bottom, left).map(|w| w.max(0.0));
    }

    /// Paint every side with `color` and set the generation flags
    pub fn override_style(&mut self, color: Color, flags: RenderFlags) {
        self.colors = Sides::splat(color);
        self.flags = flags;
    }

    pub fn with_widths(mut self, widths: Sides<f32>) -> Self {
        self.override_widths(widths.top, widths.right, widths.bottom, widths.left);
        self
    }

    pub fn with_style(mut self, color: Color, flags: RenderFlags) -> Self {
        self.override_style(color, flags);
        self
    }

    /// Working rect (input rect grown by the construction widths)
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self, side: Side) -> f32 {
        self.widths[side]
    }

    pub fn color(&self, side: Side) -> Color {
        self.colors[side]
    }

    pub fn radius(&self, corner: Corner) -> f32 {
        self.radii[corner]
    }

    pub fn corner_center(&self, corner: Corner) -> Vec2 {
        self.centers[corner]
    }

    pub fn subdivisions(&self, corner: Corner) -> u32 {
        self.subdivisions[corner]
    }

    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Last successfully generated mesh
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    pub fn into_mesh(self) -> Option<Mesh> {
        self.mesh
    }
}
