use crate::side::Sides;
use glam::Vec2;

/// Axis-aligned rectangle defined by min and max corners (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
        )
    }

    /// Grow every edge outwards by the matching side amount
    pub fn grow(&self, amount: &Sides<f32>) -> Self {
        Self {
            min: [self.min[0] - amount.left, self.min[1] - amount.top],
            max: [self.max[0] + amount.right, self.max[1] + amount.bottom],
        }
    }

    /// Position relative to the rect, (0, 0) at min and (1, 1) at max
    ///
    /// A zero-extent axis maps every point on it to 0.
    pub fn normalize(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.min[0]) / self.width().max(f32::EPSILON),
            (point.y - self.min[1]) / self.height().max(f32::EPSILON),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_rect() {
        let rect = Rect::from_min_size([10.0, 20.0], [100.0, 50.0]);
        let grown = rect.grow(&Sides::new(1.0, 2.0, 3.0, 4.0));

        assert_eq!(grown.min, [6.0, 19.0]);
        assert_eq!(grown.max, [112.0, 73.0]);
        assert_eq!(grown.width(), 106.0);
        assert_eq!(grown.height(), 54.0);
    }

    #[test]
    fn test_normalize_and_center() {
        let rect = Rect::new([0.0, 0.0], [200.0, 100.0]);
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
        assert_eq!(rect.normalize(Vec2::new(50.0, 100.0)), Vec2::new(0.25, 1.0));
    }

    #[test]
    fn test_normalize_zero_extent_rect() {
        let rect = Rect::from_min_size([3.0, 4.0], [0.0, 0.0]);
        assert_eq!(rect.normalize(Vec2::new(3.0, 4.0)), Vec2::ZERO);
    }
}
