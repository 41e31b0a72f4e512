/// A 2D point in parent-local space.
///
/// Every position in the layout tree is relative to the owning parent's
/// origin; converting to absolute coordinates is the rendering layer's job.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

/// Width and height of a laid-out node.
///
/// Both dimensions are non-negative; the size setter on
/// [`LayoutCore`](crate::LayoutCore) clamps to keep it that way.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a zero-area size
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

/// Spacing around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    pub const ZERO: Self = Self::all(0.0);

    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create spacing from individual top, right, bottom, left values (CSS-style)
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }
}
