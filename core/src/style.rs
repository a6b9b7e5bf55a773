//! Shadow and border values applied through view decoration.

use adorn_color::Color;

use crate::geometry::Vector;

/// A drop shadow defined by color, offset and blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// The color of the shadow, including alpha for opacity.
    pub color: Color,
    /// The offset of the shadow from the decorated view.
    pub offset: Vector<f32>,
    /// The blur radius of the shadow in points.
    pub radius: f32,
}

impl Shadow {
    /// Creates a new shadow with the specified color, offset, and radius.
    #[must_use]
    pub const fn new(color: Color, offset: Vector<f32>, radius: f32) -> Self {
        Self {
            color,
            offset,
            radius,
        }
    }

    /// Creates a black shadow using `value` for both offset components and
    /// the radius.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(Color::BLACK, Vector::splat(value), value)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            offset: Vector::new(0.0, 2.0), // Slightly below the element
            radius: 4.0,
        }
    }
}

/// A solid border drawn around a view's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// The border color.
    pub color: Color,
    /// The border width in points.
    pub width: f32,
}

impl Border {
    /// Creates a border with the given color and width.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Creates a one-point border with the given color.
    #[must_use]
    pub const fn hairline(color: Color) -> Self {
        Self::new(color, 1.0)
    }
}
