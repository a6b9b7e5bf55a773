//! Features common to every view.

use adorn_controls::{Button, TableCell};
use adorn_core::{
    Border, Color, ContentMode, ControlState, DecorationItem, EdgeInsets, Feature, Image, Rect,
    RectCorners, Shadow, SharedView, Transform,
};
use adorn_media::ImageView;
use adorn_text::{Label, TextArea, TextField};

/// Feature constructors that target the common view properties.
///
/// Every constructor returns a new item with the feature recorded under
/// its key; the receiver is never modified.
pub trait ViewFeatures: Sized {
    /// Sets the view frame.
    #[must_use]
    fn frame(&self, value: Rect) -> DecorationItem;

    /// Sets whether content outside the bounds is clipped.
    #[must_use]
    fn clips(&self, value: bool) -> DecorationItem;

    /// Sets the background color.
    #[must_use]
    fn ground(&self, value: Color) -> DecorationItem;

    /// Sets the integer tag.
    #[must_use]
    fn tag(&self, value: i64) -> DecorationItem;

    /// Sets the source image.
    ///
    /// Image views take it as their image, buttons as their normal-state
    /// image; any other view stores it as raw layer content. A custom
    /// hook intercepts all of that.
    #[must_use]
    fn src(&self, value: impl Into<Image>) -> DecorationItem;

    /// Sets the affine transform.
    #[must_use]
    fn transform(&self, value: Transform) -> DecorationItem;

    /// Sets the stacking position.
    #[must_use]
    fn z_position(&self, value: f32) -> DecorationItem;

    /// Sets whether the view receives input.
    #[must_use]
    fn interaction(&self, value: bool) -> DecorationItem;

    /// Sets the highlighted state on widgets that have one.
    #[must_use]
    fn highlighted(&self, value: bool) -> DecorationItem;

    /// Sets the selected state on widgets that have one.
    #[must_use]
    fn selected(&self, value: bool) -> DecorationItem;

    /// Sets the enabled state on widgets that have one.
    #[must_use]
    fn enabled(&self, value: bool) -> DecorationItem;

    /// Sets the opacity.
    #[must_use]
    fn alpha(&self, value: f32) -> DecorationItem;

    /// Sets the opaque declaration.
    #[must_use]
    fn opaque(&self, value: bool) -> DecorationItem;

    /// Sets the hidden state.
    #[must_use]
    fn hidden(&self, value: bool) -> DecorationItem;

    /// Sets the content fit mode.
    #[must_use]
    fn fit(&self, value: ContentMode) -> DecorationItem;

    /// Sets a mask view.
    #[must_use]
    fn mask(&self, value: SharedView) -> DecorationItem;

    /// Sets the tint color.
    #[must_use]
    fn tint(&self, value: Color) -> DecorationItem;

    /// Sets the corner radius.
    #[must_use]
    fn radius(&self, value: f32) -> DecorationItem;

    /// Sets which corners are rounded. An empty set rounds all four.
    #[must_use]
    fn corners(&self, value: RectCorners) -> DecorationItem;

    /// Sets a border with the given color and width.
    #[must_use]
    fn border(&self, color: Color, width: f32) -> DecorationItem;

    /// Sets the drop shadow.
    #[must_use]
    fn shadow(&self, value: Shadow) -> DecorationItem;

    /// Sets the layout hugging and compression priority.
    #[must_use]
    fn priority(&self, value: f32) -> DecorationItem;

    /// Sets content padding on widgets that have it.
    ///
    /// Buttons pad their content, text areas pad their text, and any
    /// other scrollable surface insets its content.
    #[must_use]
    fn padding(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Clips to bounds.
    #[must_use]
    fn clip(&self) -> DecorationItem {
        self.clips(true)
    }

    /// Sets a fully transparent background.
    #[must_use]
    fn blank(&self) -> DecorationItem {
        self.ground(Color::CLEAR)
    }

    /// Zeroes the opacity.
    #[must_use]
    fn clear(&self) -> DecorationItem {
        self.alpha(0.0)
    }

    /// Turns input handling on.
    #[must_use]
    fn interaction_on(&self) -> DecorationItem {
        self.interaction(true)
    }

    /// Turns input handling off.
    #[must_use]
    fn interaction_off(&self) -> DecorationItem {
        self.interaction(false)
    }

    /// Sets `highlighted(true)`.
    #[must_use]
    fn highlight(&self) -> DecorationItem {
        self.highlighted(true)
    }

    /// Sets `selected(true)`.
    #[must_use]
    fn select(&self) -> DecorationItem {
        self.selected(true)
    }

    /// Sets `selected(false)`.
    #[must_use]
    fn deselect(&self) -> DecorationItem {
        self.selected(false)
    }

    /// Sets `enabled(true)`.
    #[must_use]
    fn enable(&self) -> DecorationItem {
        self.enabled(true)
    }

    /// Sets `enabled(false)`.
    #[must_use]
    fn disable(&self) -> DecorationItem {
        self.enabled(false)
    }

    /// Sets the corner radius and clips to bounds.
    #[must_use]
    fn clip_radius(&self, value: f32) -> DecorationItem {
        self.radius(value).clips(true)
    }

    /// Sets `hidden(!value)`.
    #[must_use]
    fn visible(&self, value: bool) -> DecorationItem {
        self.hidden(!value)
    }

    /// Hides the view and zeroes its opacity.
    #[must_use]
    fn gone(&self) -> DecorationItem {
        self.hidden(true).alpha(0.0)
    }

    /// Fits the content while preserving aspect ratio.
    #[must_use]
    fn aspect_fit(&self) -> DecorationItem {
        self.fit(ContentMode::AspectFit)
    }

    /// Fills the bounds while preserving aspect ratio, clipping the
    /// overflow.
    #[must_use]
    fn aspect_fill(&self) -> DecorationItem {
        self.fit(ContentMode::AspectFill).clip()
    }
}

impl ViewFeatures for DecorationItem {
    fn frame(&self, value: Rect) -> DecorationItem {
        self.push(Feature::Frame, move |view| {
            view.base_mut().frame = value;
        })
    }

    fn clips(&self, value: bool) -> DecorationItem {
        self.push(Feature::Clips, move |view| {
            view.base_mut().clips_to_bounds = value;
        })
    }

    fn ground(&self, value: Color) -> DecorationItem {
        self.push(Feature::Background, move |view| {
            view.base_mut().background = Some(value);
        })
    }

    fn tag(&self, value: i64) -> DecorationItem {
        self.push(Feature::Tag, move |view| {
            view.base_mut().tag = value;
        })
    }

    fn src(&self, value: impl Into<Image>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::Src, move |view| {
            if let Some(hook) = view.extend() {
                if hook.src(&value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<ImageView>() {
                element.image = Some(value.clone());
            } else if let Some(element) = view.downcast_mut::<Button>() {
                element.set_image(value.clone(), ControlState::NORMAL);
            } else {
                view.base_mut().layer_content = Some(value.clone());
            }
        })
    }

    fn transform(&self, value: Transform) -> DecorationItem {
        self.push(Feature::Transform, move |view| {
            view.base_mut().transform = value;
        })
    }

    fn z_position(&self, value: f32) -> DecorationItem {
        self.push(Feature::ZPosition, move |view| {
            view.base_mut().z_position = value;
        })
    }

    fn interaction(&self, value: bool) -> DecorationItem {
        self.push(Feature::Interaction, move |view| {
            view.base_mut().interaction_enabled = value;
        })
    }

    fn highlighted(&self, value: bool) -> DecorationItem {
        self.push(Feature::Highlighted, move |view| {
            if let Some(hook) = view.extend() {
                if hook.highlighted(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.highlighted = value;
            } else if let Some(element) = view.downcast_mut::<ImageView>() {
                element.highlighted = value;
            } else if let Some(element) = view.downcast_mut::<TableCell>() {
                element.highlighted = value;
            } else if let Some(element) = view.downcast_mut::<Label>() {
                element.highlighted = value;
            }
        })
    }

    fn selected(&self, value: bool) -> DecorationItem {
        self.push(Feature::Selected, move |view| {
            if let Some(hook) = view.extend() {
                if hook.selected(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.selected = value;
            } else if let Some(element) = view.downcast_mut::<TableCell>() {
                element.selected = value;
            }
        })
    }

    fn enabled(&self, value: bool) -> DecorationItem {
        self.push(Feature::Enabled, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.enabled = value;
            } else if let Some(element) = view.downcast_mut::<Label>() {
                element.enabled = value;
            } else if let Some(element) = view.downcast_mut::<TextField>() {
                element.enabled = value;
            }
        })
    }

    fn alpha(&self, value: f32) -> DecorationItem {
        self.push(Feature::Alpha, move |view| {
            view.base_mut().alpha = value;
        })
    }

    fn opaque(&self, value: bool) -> DecorationItem {
        self.push(Feature::Opaque, move |view| {
            view.base_mut().opaque = value;
        })
    }

    fn hidden(&self, value: bool) -> DecorationItem {
        self.push(Feature::Hidden, move |view| {
            view.base_mut().hidden = value;
        })
    }

    fn fit(&self, value: ContentMode) -> DecorationItem {
        self.push(Feature::Fit, move |view| {
            if let Some(hook) = view.extend() {
                if hook.fit(value) {
                    return;
                }
            }
            view.base_mut().content_mode = value;
        })
    }

    fn mask(&self, value: SharedView) -> DecorationItem {
        self.push(Feature::Mask, move |view| {
            view.base_mut().mask = Some(value.clone());
        })
    }

    fn tint(&self, value: Color) -> DecorationItem {
        self.push(Feature::Tint, move |view| {
            view.base_mut().tint = Some(value);
        })
    }

    fn radius(&self, value: f32) -> DecorationItem {
        self.push(Feature::Radius, move |view| {
            view.base_mut().corner_radius = value;
        })
    }

    fn corners(&self, value: RectCorners) -> DecorationItem {
        self.push(Feature::Corners, move |view| {
            view.base_mut().masked_corners = if value.is_empty() {
                RectCorners::all()
            } else {
                value
            };
        })
    }

    fn border(&self, color: Color, width: f32) -> DecorationItem {
        self.push(Feature::Border, move |view| {
            view.base_mut().border = Some(Border::new(color, width));
        })
    }

    fn shadow(&self, value: Shadow) -> DecorationItem {
        self.push(Feature::Shadow, move |view| {
            view.base_mut().shadow = Some(value);
        })
    }

    fn priority(&self, value: f32) -> DecorationItem {
        self.push(Feature::Priority, move |view| {
            view.base_mut().layout_priority = Some(value);
        })
    }

    fn padding(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::Padding, move |view| {
            if let Some(hook) = view.extend() {
                if hook.padding(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Button>() {
                element.content_insets = value;
            } else if let Some(element) = view.downcast_mut::<TextArea>() {
                element.scroll.content_inset = EdgeInsets::default();
                element.text_insets = value;
            } else if let Some(surface) = view.scroll_surface() {
                surface.content_inset = value;
            }
        })
    }
}
