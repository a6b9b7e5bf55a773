//! Font descriptions used by text-bearing widgets.

/// The weight of a system font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum FontWeight {
    /// The thinnest available weight.
    UltraLight,
    /// A very light weight.
    Thin,
    /// A light weight.
    Light,
    /// The regular weight (default).
    #[default]
    Regular,
    /// A medium weight.
    Medium,
    /// A semibold weight.
    Semibold,
    /// A bold weight.
    Bold,
    /// A heavy weight.
    Heavy,
    /// The heaviest available weight.
    Black,
}

/// A system font description: point size, weight and italic flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// The point size.
    pub size: f32,
    /// The weight.
    pub weight: FontWeight,
    /// Whether the font is italic.
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

impl Font {
    /// Creates a regular-weight system font of the given size.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self::weighted(size, FontWeight::Regular)
    }

    /// Creates a system font with an explicit weight.
    #[must_use]
    pub const fn weighted(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            italic: false,
        }
    }

    /// Creates a regular-weight font of the given size.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self::weighted(size, FontWeight::Regular)
    }

    /// Creates a medium-weight font of the given size.
    #[must_use]
    pub const fn medium(size: f32) -> Self {
        Self::weighted(size, FontWeight::Medium)
    }

    /// Creates a semibold font of the given size.
    #[must_use]
    pub const fn semibold(size: f32) -> Self {
        Self::weighted(size, FontWeight::Semibold)
    }

    /// Creates a bold font of the given size.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self::weighted(size, FontWeight::Bold)
    }

    /// Returns this font with the italic flag set.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}
