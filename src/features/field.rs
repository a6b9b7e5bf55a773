//! Features targeting single-line text fields.

use adorn_core::{AttributedText, Color, DecorationItem, Feature, SharedView};
use adorn_text::{OverlayMode, TextField};

/// Feature constructors for text fields.
pub trait FieldFeatures: Sized {
    /// Sets the plain placeholder.
    #[must_use]
    fn placeholder(&self, value: impl Into<String>) -> DecorationItem;

    /// Sets the styled placeholder.
    #[must_use]
    fn attributed_placeholder(&self, value: impl Into<AttributedText>) -> DecorationItem;

    /// Sets the view shown at the leading edge and when it is visible.
    #[must_use]
    fn left(&self, value: SharedView, mode: OverlayMode) -> DecorationItem;

    /// Sets the view shown at the trailing edge and when it is visible.
    #[must_use]
    fn right(&self, value: SharedView, mode: OverlayMode) -> DecorationItem;

    /// Sets a placeholder with an explicit color.
    #[must_use]
    fn color_placeholder(&self, value: impl Into<String>, color: Color) -> DecorationItem {
        self.attributed_placeholder(AttributedText::new(value).color(color))
    }
}

impl FieldFeatures for DecorationItem {
    fn placeholder(&self, value: impl Into<String>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::Placeholder, move |view| {
            if let Some(element) = view.downcast_mut::<TextField>() {
                element.placeholder = Some(value.clone());
            }
        })
    }

    fn attributed_placeholder(&self, value: impl Into<AttributedText>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::AttributedPlaceholder, move |view| {
            if let Some(hook) = view.extend() {
                if hook.attributed_placeholder(&value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<TextField>() {
                element.attributed_placeholder = Some(value.clone());
            }
        })
    }

    fn left(&self, value: SharedView, mode: OverlayMode) -> DecorationItem {
        self.push(Feature::LeftOverlay, move |view| {
            if let Some(element) = view.downcast_mut::<TextField>() {
                element.left_overlay = Some((value.clone(), mode));
            }
        })
    }

    fn right(&self, value: SharedView, mode: OverlayMode) -> DecorationItem {
        self.push(Feature::RightOverlay, move |view| {
            if let Some(element) = view.downcast_mut::<TextField>() {
                element.right_overlay = Some((value.clone(), mode));
            }
        })
    }
}
