//! Features targeting text-bearing widgets.
//!
//! The generic text features resolve against any widget exposing a
//! [`TextContainer`](adorn_core::TextContainer); buttons route them to
//! their title instead.

use adorn_controls::Button;
use adorn_core::{
    AttributedText, Color, ControlState, DecorationItem, Feature, Font, LineBreakMode,
    TextAlignment,
};
use adorn_text::Label;

/// Feature constructors for text content and text layout.
pub trait TextFeatures: Sized {
    /// Sets how overflowing text is wrapped or truncated.
    #[must_use]
    fn break_mode(&self, value: LineBreakMode) -> DecorationItem;

    /// Sets the font.
    #[must_use]
    fn font(&self, value: Font) -> DecorationItem;

    /// Sets the horizontal text alignment.
    #[must_use]
    fn align(&self, value: TextAlignment) -> DecorationItem;

    /// Sets the maximum line count; zero means unlimited.
    #[must_use]
    fn lines(&self, value: u32) -> DecorationItem;

    /// Sets the plain text content, or the normal-state title on a
    /// button.
    #[must_use]
    fn text(&self, value: impl Into<String>) -> DecorationItem;

    /// Sets the attributed text content, or the normal-state attributed
    /// title on a button.
    #[must_use]
    fn attributed_text(&self, value: impl Into<AttributedText>) -> DecorationItem;

    /// Sets the text color, or the normal-state title color on a button.
    #[must_use]
    fn color(&self, value: Color) -> DecorationItem;

    /// Sets the text color used while a label is highlighted.
    #[must_use]
    fn highlighted_color(&self, value: Color) -> DecorationItem;

    /// Sets a regular-weight system font of the given size.
    #[must_use]
    fn regular(&self, size: f32) -> DecorationItem {
        self.font(Font::regular(size))
    }

    /// Sets a medium-weight system font of the given size.
    #[must_use]
    fn medium(&self, size: f32) -> DecorationItem {
        self.font(Font::medium(size))
    }

    /// Sets a semibold system font of the given size.
    #[must_use]
    fn semibold(&self, size: f32) -> DecorationItem {
        self.font(Font::semibold(size))
    }

    /// Sets a bold system font of the given size.
    #[must_use]
    fn bold(&self, size: f32) -> DecorationItem {
        self.font(Font::bold(size))
    }

    /// Centers the text.
    #[must_use]
    fn center(&self) -> DecorationItem {
        self.align(TextAlignment::Center)
    }

    /// Removes the line limit.
    #[must_use]
    fn unlimited(&self) -> DecorationItem {
        self.lines(0)
    }

    /// Sets the normal and highlighted text colors in one step.
    #[must_use]
    fn highlighted_colors(&self, normal: Color, highlighted: Color) -> DecorationItem {
        self.color(normal).highlighted_color(highlighted)
    }
}

impl TextFeatures for DecorationItem {
    fn break_mode(&self, value: LineBreakMode) -> DecorationItem {
        self.push(Feature::BreakMode, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.break_mode = value;
            } else if let Some(element) = view.downcast_mut::<Label>() {
                element.break_mode = value;
            }
        })
    }

    fn font(&self, value: Font) -> DecorationItem {
        self.push(Feature::Font, move |view| {
            if let Some(hook) = view.extend() {
                if hook.font(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.title_font = value;
            } else if let Some(container) = view.text_container() {
                container.set_font(value);
            }
        })
    }

    fn align(&self, value: TextAlignment) -> DecorationItem {
        self.push(Feature::TextAlignment, move |view| {
            if let Some(container) = view.text_container() {
                container.set_alignment(value);
            }
        })
    }

    fn lines(&self, value: u32) -> DecorationItem {
        self.push(Feature::Lines, move |view| {
            if let Some(hook) = view.extend() {
                if hook.lines(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.title_lines = value;
            } else if let Some(container) = view.text_container() {
                container.set_lines(value);
            }
        })
    }

    fn text(&self, value: impl Into<String>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::Text, move |view| {
            if let Some(hook) = view.extend() {
                if hook.text(&value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_title(value.clone(), ControlState::NORMAL);
            } else if let Some(container) = view.text_container() {
                container.set_text(value.clone());
            }
        })
    }

    fn attributed_text(&self, value: impl Into<AttributedText>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::AttributedText, move |view| {
            if let Some(hook) = view.extend() {
                if hook.attributed_text(&value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_attributed_title(value.clone(), ControlState::NORMAL);
            } else if let Some(container) = view.text_container() {
                container.set_attributed(value.clone());
            }
        })
    }

    fn color(&self, value: Color) -> DecorationItem {
        self.push(Feature::Color, move |view| {
            if let Some(hook) = view.extend() {
                if hook.color(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_title_color(value, ControlState::NORMAL);
            } else if let Some(container) = view.text_container() {
                container.set_color(value);
            }
        })
    }

    fn highlighted_color(&self, value: Color) -> DecorationItem {
        self.push(Feature::HighlightedColor, move |view| {
            if let Some(element) = view.downcast_mut::<Label>() {
                element.highlighted_color = Some(value);
            }
        })
    }
}
