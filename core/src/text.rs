//! Text layout values and attributed strings.

use adorn_color::Color;

use crate::font::Font;

/// Horizontal alignment for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TextAlignment {
    /// Align to the leading edge (default).
    #[default]
    Leading,
    /// Center the text.
    Center,
    /// Align to the trailing edge.
    Trailing,
    /// Stretch lines to fill the width.
    Justified,
}

/// How text is wrapped or truncated when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum LineBreakMode {
    /// Wrap at word boundaries (default).
    #[default]
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Clip overflowing text.
    Clip,
    /// Truncate at the start with an ellipsis.
    TruncateHead,
    /// Truncate in the middle with an ellipsis.
    TruncateMiddle,
    /// Truncate at the end with an ellipsis.
    TruncateTail,
}

/// Style attributes carried by an [`AttributedText`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttributes {
    /// The foreground color, if overridden.
    pub color: Option<Color>,
    /// The font, if overridden.
    pub font: Option<Font>,
}

/// A string paired with presentation attributes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributedText {
    /// The plain string content.
    pub string: String,
    /// The attributes applied to the whole string.
    pub attributes: TextAttributes,
}

impl AttributedText {
    /// Creates attributed text with default attributes.
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            attributes: TextAttributes::default(),
        }
    }

    /// Returns this text with a foreground color attribute.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.attributes.color = Some(color);
        self
    }

    /// Returns this text with a font attribute.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.attributes.font = Some(font);
        self
    }
}

impl<T: Into<String>> From<T> for AttributedText {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
