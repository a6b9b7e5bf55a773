//! A horizontal bar showing the progress of a task.

use core::any::Any;

use adorn_color::Color;
use adorn_core::{Decorable, Image, ViewBase};

/// The visual style of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum ProgressStyle {
    /// The standard height (default).
    #[default]
    Default,
    /// A thinner bar for toolbars.
    Bar,
}

/// A view that fills a track proportionally to a fraction in `0..=1`.
#[derive(Debug, Default)]
pub struct ProgressBar {
    /// Common view properties.
    pub base: ViewBase,
    progress: f32,
    /// The visual style.
    pub style: ProgressStyle,
    /// The fill color.
    pub progress_color: Option<Color>,
    /// The unfilled track color.
    pub track_color: Option<Color>,
    /// An image used for the fill instead of a flat color.
    pub progress_image: Option<Image>,
    /// An image used for the track instead of a flat color.
    pub track_image: Option<Image>,
}

impl ProgressBar {
    /// Creates an empty progress bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completed fraction, clamped to `0..=1`.
    pub fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    /// Returns the completed fraction.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }
}

impl Decorable for ProgressBar {
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

/// Creates an empty progress bar.
#[must_use]
pub fn progress_bar() -> ProgressBar {
    ProgressBar::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_the_unit_interval() {
        let mut bar = ProgressBar::new();
        bar.set_progress(1.5);
        assert_eq!(bar.progress(), 1.0);
        bar.set_progress(-0.25);
        assert_eq!(bar.progress(), 0.0);
        bar.set_progress(0.5);
        assert_eq!(bar.progress(), 0.5);
    }
}
