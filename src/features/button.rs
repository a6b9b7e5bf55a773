//! Features targeting buttons and their per-state appearance tables.

use adorn_controls::{Button, HorizontalAlignment, VerticalAlignment};
use adorn_core::{
    AttributedText, Color, ControlState, DecorationItem, EdgeInsets, Feature, Image, SwitchState,
};

/// Feature constructors for buttons.
///
/// Per-state setters carry the control state in their feature key, so a
/// normal title and a selected title coexist on one item while two
/// titles for the same state collapse to the later one. The `selected_*`
/// and `disabled_*` composites cover the highlighted combinations of
/// each state the way a pressed control actually renders.
pub trait ButtonFeatures: Sized {
    /// Sets the title for a control state.
    #[must_use]
    fn state_title(&self, value: impl Into<String>, state: ControlState) -> DecorationItem;

    /// Sets the title color for a control state.
    #[must_use]
    fn state_color(&self, value: Color, state: ControlState) -> DecorationItem;

    /// Sets the image for a control state.
    #[must_use]
    fn state_image(&self, value: impl Into<Image>, state: ControlState) -> DecorationItem;

    /// Sets the background image for a control state.
    #[must_use]
    fn state_background_image(&self, value: impl Into<Image>, state: ControlState)
    -> DecorationItem;

    /// Sets the attributed title for a control state.
    #[must_use]
    fn state_attributed_title(
        &self,
        value: impl Into<AttributedText>,
        state: ControlState,
    ) -> DecorationItem;

    /// Sets extra padding around the title.
    #[must_use]
    fn title_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Sets extra padding around the image.
    #[must_use]
    fn image_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Sets the vertical content placement.
    #[must_use]
    fn vertical_align(&self, value: VerticalAlignment) -> DecorationItem;

    /// Sets the horizontal content placement.
    #[must_use]
    fn horizontal_align(&self, value: HorizontalAlignment) -> DecorationItem;

    /// Sets the normal and selected images, including their highlighted
    /// combinations.
    #[must_use]
    fn selected_image(&self, value: impl Into<SwitchState<Image>>) -> DecorationItem {
        let value = value.into();
        self.state_image(value.off.clone(), ControlState::NORMAL)
            .state_image(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_image(value.on.clone(), ControlState::SELECTED)
            .state_image(
                value.on,
                ControlState::SELECTED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and selected titles, including their highlighted
    /// combinations.
    #[must_use]
    fn selected_title(&self, value: impl Into<SwitchState<String>>) -> DecorationItem {
        let value = value.into();
        self.state_title(value.off.clone(), ControlState::NORMAL)
            .state_title(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_title(value.on.clone(), ControlState::SELECTED)
            .state_title(
                value.on,
                ControlState::SELECTED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and selected title colors, including their
    /// highlighted combinations.
    #[must_use]
    fn selected_color(&self, value: impl Into<SwitchState<Color>>) -> DecorationItem {
        let value = value.into();
        self.state_color(value.off, ControlState::NORMAL)
            .state_color(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_color(value.on, ControlState::SELECTED)
            .state_color(
                value.on,
                ControlState::SELECTED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and selected background images, including their
    /// highlighted combinations.
    #[must_use]
    fn selected_background_image(&self, value: impl Into<SwitchState<Image>>) -> DecorationItem {
        let value = value.into();
        self.state_background_image(value.off.clone(), ControlState::NORMAL)
            .state_background_image(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_background_image(value.on.clone(), ControlState::SELECTED)
            .state_background_image(
                value.on,
                ControlState::SELECTED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and disabled title colors, including their
    /// highlighted combinations.
    #[must_use]
    fn disabled_color(&self, value: impl Into<SwitchState<Color>>) -> DecorationItem {
        let value = value.into();
        self.state_color(value.off, ControlState::NORMAL)
            .state_color(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_color(value.on, ControlState::DISABLED)
            .state_color(
                value.on,
                ControlState::DISABLED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and disabled images, including their highlighted
    /// combinations.
    #[must_use]
    fn disabled_image(&self, value: impl Into<SwitchState<Image>>) -> DecorationItem {
        let value = value.into();
        self.state_image(value.off.clone(), ControlState::NORMAL)
            .state_image(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_image(value.on.clone(), ControlState::DISABLED)
            .state_image(
                value.on,
                ControlState::DISABLED | ControlState::HIGHLIGHTED,
            )
    }

    /// Sets the normal and disabled background images, including their
    /// highlighted combinations.
    #[must_use]
    fn disabled_background_image(&self, value: impl Into<SwitchState<Image>>) -> DecorationItem {
        let value = value.into();
        self.state_background_image(value.off.clone(), ControlState::NORMAL)
            .state_background_image(
                value.off,
                ControlState::NORMAL | ControlState::HIGHLIGHTED,
            )
            .state_background_image(value.on.clone(), ControlState::DISABLED)
            .state_background_image(
                value.on,
                ControlState::DISABLED | ControlState::HIGHLIGHTED,
            )
    }
}

impl ButtonFeatures for DecorationItem {
    fn state_title(&self, value: impl Into<String>, state: ControlState) -> DecorationItem {
        let value = value.into();
        self.push(Feature::Title(state), move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_title(value.clone(), state);
            }
        })
    }

    fn state_color(&self, value: Color, state: ControlState) -> DecorationItem {
        self.push(Feature::TitleColor(state), move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_title_color(value, state);
            }
        })
    }

    fn state_image(&self, value: impl Into<Image>, state: ControlState) -> DecorationItem {
        let value = value.into();
        self.push(Feature::StateImage(state), move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_image(value.clone(), state);
            }
        })
    }

    fn state_background_image(
        &self,
        value: impl Into<Image>,
        state: ControlState,
    ) -> DecorationItem {
        let value = value.into();
        self.push(Feature::BackgroundImage(state), move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_background_image(value.clone(), state);
            }
        })
    }

    fn state_attributed_title(
        &self,
        value: impl Into<AttributedText>,
        state: ControlState,
    ) -> DecorationItem {
        let value = value.into();
        self.push(Feature::AttributedTitle(state), move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.set_attributed_title(value.clone(), state);
            }
        })
    }

    fn title_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::TitleInset, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.title_insets = value;
            }
        })
    }

    fn image_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::ImageInset, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.image_insets = value;
            }
        })
    }

    fn vertical_align(&self, value: VerticalAlignment) -> DecorationItem {
        self.push(Feature::VerticalAlign, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.vertical_alignment = value;
            }
        })
    }

    fn horizontal_align(&self, value: HorizontalAlignment) -> DecorationItem {
        self.push(Feature::HorizontalAlign, move |view| {
            if let Some(element) = view.downcast_mut::<Button>() {
                element.horizontal_alignment = value;
            }
        })
    }
}
