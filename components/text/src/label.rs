//! A read-only text label.

use core::any::Any;

use adorn_color::Color;
use adorn_core::{Decorable, LineBreakMode, TextContainer, ViewBase};

use crate::storage::TextStorage;

/// A view that displays read-only text.
#[derive(Debug, Default)]
pub struct Label {
    /// Common view properties.
    pub base: ViewBase,
    /// The label's text properties.
    pub storage: TextStorage,
    /// Whether the label renders in its highlighted style.
    pub highlighted: bool,
    /// The text color used while highlighted.
    pub highlighted_color: Option<Color>,
    /// Whether the label renders in its enabled style.
    pub enabled: bool,
    /// How overflowing text is wrapped or truncated.
    pub break_mode: LineBreakMode,
}

impl Label {
    /// Creates an empty label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a label with initial text.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut label = Self::new();
        label.storage.text = Some(text.into());
        label
    }
}

impl Decorable for Label {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn text_container(&mut self) -> Option<&mut dyn TextContainer> {
        Some(&mut self.storage)
    }
}

/// Creates a label with the given text.
#[must_use]
pub fn label(text: impl Into<String>) -> Label {
    Label::with_text(text)
}
