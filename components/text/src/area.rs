//! A multi-line editable text area.

use core::any::Any;

use adorn_core::{
    Decorable, EdgeInsets, ScrollSurface, TextContainer, ViewBase,
};

use crate::input::InputTraits;
use crate::storage::TextStorage;

/// A scrollable view that edits multiple lines of text.
#[derive(Debug)]
pub struct TextArea {
    /// Common view properties.
    pub base: ViewBase,
    /// The area's text properties.
    pub storage: TextStorage,
    /// Keyboard and input behavior.
    pub traits: InputTraits,
    /// Scrolling behavior.
    pub scroll: ScrollSurface,
    /// Padding between the area's bounds and its text.
    pub text_insets: EdgeInsets,
    /// Whether the area accepts editing.
    pub editable: bool,
}

impl TextArea {
    /// Creates an empty text area.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            storage: TextStorage::with_lines(0),
            traits: InputTraits::default(),
            scroll: ScrollSurface::default(),
            text_insets: EdgeInsets::all(8.0),
            editable: true,
        }
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorable for TextArea {
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

    fn scroll_surface(&mut self) -> Option<&mut ScrollSurface> {
        Some(&mut self.scroll)
    }
}

/// Creates an empty text area.
#[must_use]
pub fn text_area() -> TextArea {
    TextArea::new()
}
