//! A row of dots indicating the current page.

use core::any::Any;

use adorn_color::Color;
use adorn_core::{Decorable, ViewBase};

/// The background treatment behind a page control's dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum PageBackgroundStyle {
    /// Show a backdrop only while interacting (default).
    #[default]
    Automatic,
    /// Always show the backdrop.
    Prominent,
    /// Never show the backdrop.
    Minimal,
}

/// A view that shows one dot per page and highlights the current one.
#[derive(Debug, Default)]
pub struct PageControl {
    /// Common view properties.
    pub base: ViewBase,
    /// The total page count.
    pub pages: u32,
    /// The zero-based current page.
    pub current_page: u32,
    /// The color of the inactive dots.
    pub indicator_color: Option<Color>,
    /// The color of the current page's dot.
    pub current_indicator_color: Option<Color>,
    /// The backdrop treatment.
    pub background_style: PageBackgroundStyle,
}

impl PageControl {
    /// Creates a page control with the given page count.
    #[must_use]
    pub fn new(pages: u32) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }
}

impl Decorable for PageControl {
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
}

/// Creates a page control with the given page count.
#[must_use]
pub fn page_control(pages: u32) -> PageControl {
    PageControl::new(pages)
}
