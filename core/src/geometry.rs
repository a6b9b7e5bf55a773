//! Geometry primitives shared by decoration features.

use bitflags::bitflags;

/// A 2D vector with x and y components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

impl<T> Vector<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    pub const fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self { x: value, y: value }
    }
}

/// A point in the parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f32,
    /// The vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size with zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// A rectangle described by an origin and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The top-leading corner of the rectangle.
    pub origin: Point,
    /// The extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from an origin and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from raw components.
    #[must_use]
    pub const fn from_parts(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// A rectangle with zero origin and size.
    pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);
}

/// Insets applied to the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
    /// Inset from the leading edge.
    pub leading: f32,
    /// Inset from the trailing edge.
    pub trailing: f32,
}

impl EdgeInsets {
    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl<T: Into<f64>> From<T> for EdgeInsets {
    fn from(value: T) -> Self {
        Self::all(value.into() as f32)
    }
}

/// A 2D affine transform in row-major `[a b tx; c d ty]` form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// The `a` entry (x scale).
    pub a: f32,
    /// The `b` entry (y shear).
    pub b: f32,
    /// The `c` entry (x shear).
    pub c: f32,
    /// The `d` entry (y scale).
    pub d: f32,
    /// The horizontal translation.
    pub tx: f32,
    /// The vertical translation.
    pub ty: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Creates a translation transform.
    #[must_use]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::IDENTITY
        }
    }

    /// Creates a scale transform.
    #[must_use]
    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            a: x,
            d: y,
            ..Self::IDENTITY
        }
    }

    /// Creates a rotation transform from an angle in radians.
    #[must_use]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Axis {
    /// The horizontal axis.
    Horizontal,
    /// The vertical axis (default).
    #[default]
    Vertical,
}

bitflags! {
    /// A set of layout axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// The horizontal axis.
        const HORIZONTAL = 1 << 0;
        /// The vertical axis.
        const VERTICAL = 1 << 1;
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::HORIZONTAL,
            Axis::Vertical => Self::VERTICAL,
        }
    }
}

bitflags! {
    /// A set of rectangle corners.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RectCorners: u8 {
        /// The top-leading corner.
        const TOP_LEFT = 1 << 0;
        /// The top-trailing corner.
        const TOP_RIGHT = 1 << 1;
        /// The bottom-leading corner.
        const BOTTOM_LEFT = 1 << 2;
        /// The bottom-trailing corner.
        const BOTTOM_RIGHT = 1 << 3;
        /// Both top corners.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        /// Both bottom corners.
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        /// Both leading corners.
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        /// Both trailing corners.
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

/// How content is sized to fill a view's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ContentMode {
    /// Stretch the content to fill the bounds (default).
    #[default]
    ScaleToFill,
    /// Scale the content to fit while preserving aspect ratio.
    AspectFit,
    /// Scale the content to fill while preserving aspect ratio.
    AspectFill,
    /// Center the content without scaling.
    Center,
    /// Align the content to the top edge without scaling.
    Top,
    /// Align the content to the bottom edge without scaling.
    Bottom,
}
