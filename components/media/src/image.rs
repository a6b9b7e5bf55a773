//! A view that displays an image.

use core::any::Any;

use adorn_core::{ContentMode, Decorable, Image, ViewBase};

/// A view that draws a still or animated image.
#[derive(Debug, Default)]
pub struct ImageView {
    /// Common view properties.
    pub base: ViewBase,
    /// The image drawn normally.
    pub image: Option<Image>,
    /// The image drawn while highlighted.
    pub highlighted_image: Option<Image>,
    /// The frames of the normal animation.
    pub animation_images: Vec<Image>,
    /// The frames of the highlighted animation.
    pub highlighted_animation_images: Vec<Image>,
    /// One animation cycle's duration in seconds; zero picks a duration
    /// from the frame count.
    pub animation_duration: f64,
    /// How many times the animation repeats; zero repeats forever.
    pub animation_repeat_count: u32,
    /// Whether the view draws its highlighted content.
    pub highlighted: bool,
}

impl ImageView {
    /// Creates an empty image view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an image view displaying the given image.
    #[must_use]
    pub fn with_image(image: Image) -> Self {
        let mut view = Self::new();
        view.base.content_mode = ContentMode::AspectFit;
        view.image = Some(image);
        view
    }
}

impl Decorable for ImageView {
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

/// Creates an image view displaying the named image.
#[must_use]
pub fn image(name: impl Into<String>) -> ImageView {
    ImageView::with_image(Image::named(name))
}
