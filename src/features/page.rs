//! Features targeting page controls.

use adorn_controls::{PageBackgroundStyle, PageControl};
use adorn_core::{Color, DecorationItem, Feature, SwitchState};

/// Feature constructors for page controls.
pub trait PageFeatures: Sized {
    /// Sets the color of the inactive page dots.
    #[must_use]
    fn indicator_color(&self, value: Color) -> DecorationItem;

    /// Sets the color of the current page's dot.
    #[must_use]
    fn current_indicator_color(&self, value: Color) -> DecorationItem;

    /// Sets the backdrop treatment behind the dots.
    #[must_use]
    fn background_style(&self, value: PageBackgroundStyle) -> DecorationItem;

    /// Sets the inactive and current dot colors in one step.
    #[must_use]
    fn selected_indicator_color(&self, value: impl Into<SwitchState<Color>>) -> DecorationItem {
        let value = value.into();
        self.indicator_color(value.off)
            .current_indicator_color(value.on)
    }
}

impl PageFeatures for DecorationItem {
    fn indicator_color(&self, value: Color) -> DecorationItem {
        self.push(Feature::PageIndicatorColor, move |view| {
            if let Some(element) = view.downcast_mut::<PageControl>() {
                element.indicator_color = Some(value);
            }
        })
    }

    fn current_indicator_color(&self, value: Color) -> DecorationItem {
        self.push(Feature::CurrentPageIndicatorColor, move |view| {
            if let Some(element) = view.downcast_mut::<PageControl>() {
                element.current_indicator_color = Some(value);
            }
        })
    }

    fn background_style(&self, value: PageBackgroundStyle) -> DecorationItem {
        self.push(Feature::PageBackgroundStyle, move |view| {
            if let Some(element) = view.downcast_mut::<PageControl>() {
                element.background_style = value;
            }
        })
    }
}
