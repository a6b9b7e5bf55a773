//! A view that renders web content.

use core::any::Any;

use adorn_core::{Decorable, ScrollSurface, ViewBase};

/// A view that loads and renders a web page.
///
/// Web views wrap an internal scrollable surface, so scroll features
/// apply to them the same way they apply to plain scroll views.
#[derive(Debug, Default)]
pub struct WebView {
    /// Common view properties.
    pub base: ViewBase,
    /// The loaded page's URL, if any.
    pub url: Option<String>,
    /// The wrapped scrollable surface.
    pub surface: ScrollSurface,
}

impl WebView {
    /// Creates an empty web view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorable for WebView {
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

/// Creates an empty web view.
#[must_use]
pub fn web() -> WebView {
    WebView::new()
}
