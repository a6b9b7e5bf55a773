//! Shared storage for generic text properties.

use adorn_color::Color;
use adorn_core::{AttributedText, Font, TextAlignment, TextContainer};

/// The text properties shared by every text-bearing widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStorage {
    /// The plain text content.
    pub text: Option<String>,
    /// The font.
    pub font: Font,
    /// The foreground color.
    pub color: Color,
    /// The horizontal alignment.
    pub alignment: TextAlignment,
    /// The maximum line count; zero means unlimited.
    pub lines: u32,
    /// The attributed content, if set.
    pub attributed: Option<AttributedText>,
}

impl TextStorage {
    /// Creates storage with the given default line count.
    ///
    /// Labels default to a single line; editable areas pass zero for
    /// unlimited wrapping.
    #[must_use]
    pub fn with_lines(lines: u32) -> Self {
        Self {
            text: None,
            font: Font::default(),
            color: Color::BLACK,
            alignment: TextAlignment::default(),
            lines,
            attributed: None,
        }
    }
}

impl Default for TextStorage {
    fn default() -> Self {
        Self::with_lines(1)
    }
}

impl TextContainer for TextStorage {
    fn set_text(&mut self, value: String) {
        self.text = Some(value);
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn font(&self) -> Font {
        self.font
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
    }

    fn lines(&self) -> u32 {
        self.lines
    }

    fn set_attributed(&mut self, value: AttributedText) {
        self.text = Some(value.string.clone());
        self.attributed = Some(value);
    }

    fn attributed(&self) -> Option<&AttributedText> {
        self.attributed.as_ref()
    }
}
