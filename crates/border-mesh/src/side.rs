//! Side and corner enumerations plus their four-element containers.
//!
//! Sides and corners are both cyclic with period four, clockwise on screen
//! (y grows downwards). Corner `i` is the joint where side `i` begins, so the
//! top side runs from the top-left corner to the top-right corner.

use glam::Vec2;
use std::ops::{Index, IndexMut};

/// One of the four straight border segments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Side {
        Self::ALL[index % 4]
    }

    /// Next side, clockwise
    pub const fn next(self) -> Side {
        Self::from_index(self.index() + 1)
    }

    /// Previous side, counter-clockwise
    pub const fn prev(self) -> Side {
        Self::from_index(self.index() + 3)
    }

    /// Outward unit normal
    pub const fn normal(self) -> Vec2 {
        match self {
            Side::Top => Vec2::new(0.0, -1.0),
            Side::Right => Vec2::new(1.0, 0.0),
            Side::Bottom => Vec2::new(0.0, 1.0),
            Side::Left => Vec2::new(-1.0, 0.0),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Corner the side starts at
    pub const fn leading_corner(self) -> Corner {
        Corner::from_index(self.index())
    }

    /// Corner the side ends at
    pub const fn trailing_corner(self) -> Corner {
        Corner::from_index(self.index() + 1)
    }
}

/// Rounded joint between two adjacent sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Corner {
        Self::ALL[index % 4]
    }

    pub const fn next(self) -> Corner {
        Self::from_index(self.index() + 1)
    }

    pub const fn prev(self) -> Corner {
        Self::from_index(self.index() + 3)
    }

    /// Side arriving at this corner
    pub const fn incoming_side(self) -> Side {
        Side::from_index(self.index() + 3)
    }

    /// Side leaving this corner
    pub const fn outgoing_side(self) -> Side {
        Side::from_index(self.index())
    }
}

/// One value per side
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Sides<T> {
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        Sides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    /// Iterate in clockwise order starting at the top side
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, &self[side]))
    }
}

impl<T: Clone> Sides<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

/// One value per corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    pub const fn new(top_left: T, top_right: T, bottom_right: T, bottom_left: T) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> {
        Corner::ALL.into_iter().map(move |corner| (corner, &self[corner]))
    }
}

impl<T: Clone> Corners<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }
}

impl<T> Index<Corner> for Corners<T> {
    type Output = T;

    fn index(&self, corner: Corner) -> &T {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }
}

impl<T> IndexMut<Corner> for Corners<T> {
    fn index_mut(&mut self, corner: Corner) -> &mut T {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_cycle() {
        assert_eq!(Side::Top.next(), Side::Right);
        assert_eq!(Side::Left.next(), Side::Top);
        assert_eq!(Side::Top.prev(), Side::Left);
        for side in Side::ALL {
            assert_eq!(side.next().prev(), side);
        }
    }

    #[test]
    fn test_corners_bound_sides() {
        assert_eq!(Side::Top.leading_corner(), Corner::TopLeft);
        assert_eq!(Side::Top.trailing_corner(), Corner::TopRight);
        assert_eq!(Side::Left.trailing_corner(), Corner::TopLeft);
        for corner in Corner::ALL {
            assert_eq!(corner.outgoing_side().leading_corner(), corner);
            assert_eq!(corner.incoming_side().trailing_corner(), corner);
        }
    }

    #[test]
    fn test_normals_point_outwards() {
        assert_eq!(Side::Top.normal(), Vec2::new(0.0, -1.0));
        assert_eq!(Side::Right.normal(), Vec2::new(1.0, 0.0));
        for side in Side::ALL {
            assert_eq!(side.normal(), -side.next().next().normal());
            assert_eq!(side.normal().dot(side.next().normal()), 0.0);
        }
    }

    #[test]
    fn test_sides_index() {
        let mut sides = Sides::new(1, 2, 3, 4);
        sides[Side::Bottom] = 30;
        assert_eq!(sides.bottom, 30);
        assert_eq!(sides[Side::Left], 4);
        let doubled: Vec<i32> = sides.map(|v| v * 2).iter().map(|(_, v)| *v).collect();
        assert_eq!(doubled, vec![2, 4, 60, 8]);
    }
}
