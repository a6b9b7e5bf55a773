//! Capability interfaces a widget may implement to customize decoration.

use adorn_color::Color;

use crate::font::Font;
use crate::geometry::{Axis, ContentMode, EdgeInsets};
use crate::media::{BlurStyle, Image};
use crate::text::{AttributedText, TextAlignment};

/// Optional per-feature hooks that override default decoration handling.
///
/// A widget exposes this through
/// [`Decorable::extend`](crate::Decorable::extend). Each hook returns
/// `true` if it handled the value, which stops the feature's default
/// handling; the default bodies decline so implementors only override
/// the features they care about.
#[allow(unused_variables)]
pub trait DecorationExtend {
    /// Intercepts the blur style feature.
    fn blur(&mut self, style: BlurStyle) -> bool {
        false
    }

    /// Intercepts the plain text feature.
    fn text(&mut self, value: &str) -> bool {
        false
    }

    /// Intercepts the source image feature.
    fn src(&mut self, image: &Image) -> bool {
        false
    }

    /// Intercepts the content fit-mode feature.
    fn fit(&mut self, mode: ContentMode) -> bool {
        false
    }

    /// Intercepts the padding feature.
    fn padding(&mut self, insets: EdgeInsets) -> bool {
        false
    }

    /// Intercepts the attributed placeholder feature.
    fn attributed_placeholder(&mut self, value: &AttributedText) -> bool {
        false
    }

    /// Intercepts the font feature.
    fn font(&mut self, font: Font) -> bool {
        false
    }

    /// Intercepts the highlighted-state feature.
    fn highlighted(&mut self, value: bool) -> bool {
        false
    }

    /// Intercepts the selected-state feature.
    fn selected(&mut self, value: bool) -> bool {
        false
    }

    /// Intercepts the attributed text feature.
    fn attributed_text(&mut self, value: &AttributedText) -> bool {
        false
    }

    /// Intercepts the text color feature.
    fn color(&mut self, value: Color) -> bool {
        false
    }

    /// Intercepts the stack axis feature.
    fn axis(&mut self, value: Axis) -> bool {
        false
    }

    /// Intercepts the stack spacing feature.
    fn spacing(&mut self, value: f32) -> bool {
        false
    }

    /// Intercepts the line-count feature.
    fn lines(&mut self, value: u32) -> bool {
        false
    }
}

/// Generic text storage exposed by text-bearing widgets.
///
/// Labels, text fields and text areas expose their storage through
/// [`Decorable::text_container`](crate::Decorable::text_container); the
/// generic text features (text, font, color, alignment, line count,
/// attributed text) fall back to this interface after the custom hook
/// and any widget-specific handling have declined.
pub trait TextContainer {
    /// Replaces the text content.
    fn set_text(&mut self, value: String);
    /// Returns the text content, if any.
    fn text(&self) -> Option<&str>;
    /// Replaces the font.
    fn set_font(&mut self, font: Font);
    /// Returns the font.
    fn font(&self) -> Font;
    /// Replaces the foreground color.
    fn set_color(&mut self, color: Color);
    /// Returns the foreground color.
    fn color(&self) -> Color;
    /// Replaces the horizontal alignment.
    fn set_alignment(&mut self, alignment: TextAlignment);
    /// Returns the horizontal alignment.
    fn alignment(&self) -> TextAlignment;
    /// Replaces the maximum line count; zero means unlimited.
    fn set_lines(&mut self, lines: u32);
    /// Returns the maximum line count.
    fn lines(&self) -> u32;
    /// Replaces the attributed text content.
    fn set_attributed(&mut self, value: AttributedText);
    /// Returns the attributed text content, if any.
    fn attributed(&self) -> Option<&AttributedText>;
}
