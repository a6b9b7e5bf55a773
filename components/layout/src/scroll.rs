//! A view that scrolls its content.

use core::any::Any;

use adorn_core::{Decorable, ScrollSurface, ViewBase};

/// A view whose children scroll within its bounds.
#[derive(Debug, Default)]
pub struct ScrollView {
    /// Common view properties.
    pub base: ViewBase,
    /// Scrolling behavior.
    pub surface: ScrollSurface,
}

impl ScrollView {
    /// Creates an empty scroll view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorable for ScrollView {
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

    fn scroll_surface(&mut self) -> Option<&mut ScrollSurface> {
        Some(&mut self.surface)
    }
}

/// Creates an empty scroll view.
#[must_use]
pub fn scroll() -> ScrollView {
    ScrollView::new()
}
