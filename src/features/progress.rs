//! Features targeting progress bars.

use adorn_controls::{ProgressBar, ProgressStyle};
use adorn_core::{Color, DecorationItem, Feature, Image};

/// Feature constructors for progress bars.
pub trait ProgressFeatures: Sized {
    /// Sets the visual style.
    #[must_use]
    fn progress_style(&self, value: ProgressStyle) -> DecorationItem;

    /// Sets the completed fraction, clamped to `0..=1`.
    #[must_use]
    fn progress(&self, value: f32) -> DecorationItem;

    /// Sets the fill color.
    #[must_use]
    fn progress_tint(&self, value: Color) -> DecorationItem;

    /// Sets the unfilled track color.
    #[must_use]
    fn track_tint(&self, value: Color) -> DecorationItem;

    /// Uses an image for the fill instead of a flat color.
    #[must_use]
    fn progress_image(&self, value: impl Into<Image>) -> DecorationItem;

    /// Uses an image for the track instead of a flat color.
    #[must_use]
    fn track_image(&self, value: impl Into<Image>) -> DecorationItem;
}

impl ProgressFeatures for DecorationItem {
    fn progress_style(&self, value: ProgressStyle) -> DecorationItem {
        self.push(Feature::ProgressStyle, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.style = value;
            }
        })
    }

    fn progress(&self, value: f32) -> DecorationItem {
        self.push(Feature::Progress, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.set_progress(value);
            }
        })
    }

    fn progress_tint(&self, value: Color) -> DecorationItem {
        self.push(Feature::ProgressTint, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.progress_color = Some(value);
            }
        })
    }

    fn track_tint(&self, value: Color) -> DecorationItem {
        self.push(Feature::TrackTint, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.track_color = Some(value);
            }
        })
    }

    fn progress_image(&self, value: impl Into<Image>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::ProgressImage, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.progress_image = Some(value.clone());
            }
        })
    }

    fn track_image(&self, value: impl Into<Image>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::TrackImage, move |view| {
            if let Some(element) = view.downcast_mut::<ProgressBar>() {
                element.track_image = Some(value.clone());
            }
        })
    }
}
