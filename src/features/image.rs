//! Features targeting image views.

use adorn_core::{DecorationItem, Feature, Image, SwitchState};
use adorn_media::ImageView;

use super::view::ViewFeatures;

/// Feature constructors for image views. They decline silently on any
/// other widget.
pub trait ImageFeatures: ViewFeatures {
    /// Sets the image drawn while highlighted.
    #[must_use]
    fn highlighted_src(&self, value: impl Into<Image>) -> DecorationItem;

    /// Sets the animation frame sequence.
    #[must_use]
    fn animation_images(&self, value: Vec<Image>) -> DecorationItem;

    /// Sets the highlighted animation frame sequence.
    #[must_use]
    fn highlighted_animation_images(&self, value: Vec<Image>) -> DecorationItem;

    /// Sets the animation duration in seconds and repeat count. A zero
    /// count repeats forever.
    #[must_use]
    fn animation(&self, duration: f64, count: u32) -> DecorationItem;

    /// Sets the normal and highlighted images in one step.
    #[must_use]
    fn highlighted_image(&self, value: impl Into<SwitchState<Image>>) -> DecorationItem {
        let value = value.into();
        self.src(value.off).highlighted_src(value.on)
    }
}

impl ImageFeatures for DecorationItem {
    fn highlighted_src(&self, value: impl Into<Image>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::HighlightedSrc, move |view| {
            if let Some(element) = view.downcast_mut::<ImageView>() {
                element.highlighted_image = Some(value.clone());
            }
        })
    }

    fn animation_images(&self, value: Vec<Image>) -> DecorationItem {
        self.push(Feature::AnimationImages, move |view| {
            if let Some(element) = view.downcast_mut::<ImageView>() {
                element.animation_images = value.clone();
            }
        })
    }

    fn highlighted_animation_images(&self, value: Vec<Image>) -> DecorationItem {
        self.push(Feature::HighlightedAnimationImages, move |view| {
            if let Some(element) = view.downcast_mut::<ImageView>() {
                element.highlighted_animation_images = value.clone();
            }
        })
    }

    fn animation(&self, duration: f64, count: u32) -> DecorationItem {
        self.push(Feature::Animation, move |view| {
            if let Some(element) = view.downcast_mut::<ImageView>() {
                element.animation_duration = duration;
                element.animation_repeat_count = count;
            }
        })
    }
}
