//! Features targeting scrollable surfaces.
//!
//! These resolve against whatever the target exposes through
//! [`Decorable::scroll_surface`](adorn_core::Decorable::scroll_surface),
//! so they work identically on scroll views, tables, text areas and web
//! views.

use adorn_core::{
    Axes, Decorable, DecorationItem, EdgeInsets, Feature, IndicatorStyle, InsetBehavior,
    ScrollSurface, Size,
};

fn with_surface(view: &mut dyn Decorable, set: impl FnOnce(&mut ScrollSurface)) {
    if let Some(surface) = view.scroll_surface() {
        set(surface);
    }
}

/// Feature constructors for scrolling behavior.
pub trait ScrollFeatures: Sized {
    /// Sets the scrollable content size.
    #[must_use]
    fn content_size(&self, value: Size) -> DecorationItem;

    /// Sets whether scrolling locks to the dominant axis of a drag.
    #[must_use]
    fn directional_lock(&self, value: bool) -> DecorationItem;

    /// Sets whether the content bounces past its edges.
    #[must_use]
    fn bounces(&self, value: bool) -> DecorationItem;

    /// Sets the axes that bounce even when the content fits.
    #[must_use]
    fn always_bounce(&self, value: Axes) -> DecorationItem;

    /// Sets whether scrolling snaps to page boundaries.
    #[must_use]
    fn paging(&self, value: bool) -> DecorationItem;

    /// Sets whether scrolling is enabled.
    #[must_use]
    fn scroll_enabled(&self, value: bool) -> DecorationItem;

    /// Sets whether touch delivery to content is briefly delayed.
    #[must_use]
    fn delays_touches(&self, value: bool) -> DecorationItem;

    /// Sets the axes on which scroll indicators are shown.
    #[must_use]
    fn indicators(&self, value: Axes) -> DecorationItem;

    /// Sets the vertical indicator insets.
    #[must_use]
    fn vertical_indicator_insets(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Sets the horizontal indicator insets.
    #[must_use]
    fn horizontal_indicator_insets(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Sets the minimum zoom scale.
    #[must_use]
    fn min_zoom(&self, value: f32) -> DecorationItem;

    /// Sets the maximum zoom scale.
    #[must_use]
    fn max_zoom(&self, value: f32) -> DecorationItem;

    /// Sets how content insets adjust for surrounding chrome.
    #[must_use]
    fn inset_behavior(&self, value: InsetBehavior) -> DecorationItem;

    /// Sets the indicator style.
    #[must_use]
    fn indicator_style(&self, value: IndicatorStyle) -> DecorationItem;

    /// Disables edge bouncing.
    #[must_use]
    fn un_bounce(&self) -> DecorationItem {
        self.bounces(false)
    }

    /// Hides the scroll indicators on both axes.
    #[must_use]
    fn no_indicators(&self) -> DecorationItem {
        self.indicators(Axes::empty())
    }

    /// Sets the minimum and maximum zoom scales in one step.
    #[must_use]
    fn zoom_range(&self, min: f32, max: f32) -> DecorationItem {
        self.min_zoom(min).max_zoom(max)
    }

    /// Never adjusts content insets for surrounding chrome.
    #[must_use]
    fn never_behavior(&self) -> DecorationItem {
        self.inset_behavior(InsetBehavior::Never)
    }
}

impl ScrollFeatures for DecorationItem {
    fn content_size(&self, value: Size) -> DecorationItem {
        self.push(Feature::ContentSize, move |view| {
            with_surface(view, |surface| surface.content_size = value);
        })
    }

    fn directional_lock(&self, value: bool) -> DecorationItem {
        self.push(Feature::DirectionalLock, move |view| {
            with_surface(view, |surface| surface.directional_lock = value);
        })
    }

    fn bounces(&self, value: bool) -> DecorationItem {
        self.push(Feature::Bounces, move |view| {
            with_surface(view, |surface| surface.bounces = value);
        })
    }

    fn always_bounce(&self, value: Axes) -> DecorationItem {
        self.push(Feature::AlwaysBounce, move |view| {
            with_surface(view, |surface| surface.always_bounce = value);
        })
    }

    fn paging(&self, value: bool) -> DecorationItem {
        self.push(Feature::Paging, move |view| {
            with_surface(view, |surface| surface.paging = value);
        })
    }

    fn scroll_enabled(&self, value: bool) -> DecorationItem {
        self.push(Feature::ScrollEnabled, move |view| {
            with_surface(view, |surface| surface.scroll_enabled = value);
        })
    }

    fn delays_touches(&self, value: bool) -> DecorationItem {
        self.push(Feature::DelaysTouches, move |view| {
            with_surface(view, |surface| surface.delays_content_touches = value);
        })
    }

    fn indicators(&self, value: Axes) -> DecorationItem {
        self.push(Feature::Indicators, move |view| {
            with_surface(view, |surface| surface.shows_indicators = value);
        })
    }

    fn vertical_indicator_insets(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::VerticalIndicatorInsets, move |view| {
            with_surface(view, |surface| surface.vertical_indicator_insets = value);
        })
    }

    fn horizontal_indicator_insets(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::HorizontalIndicatorInsets, move |view| {
            with_surface(view, |surface| surface.horizontal_indicator_insets = value);
        })
    }

    fn min_zoom(&self, value: f32) -> DecorationItem {
        self.push(Feature::MinZoom, move |view| {
            with_surface(view, |surface| surface.min_zoom = value);
        })
    }

    fn max_zoom(&self, value: f32) -> DecorationItem {
        self.push(Feature::MaxZoom, move |view| {
            with_surface(view, |surface| surface.max_zoom = value);
        })
    }

    fn inset_behavior(&self, value: InsetBehavior) -> DecorationItem {
        self.push(Feature::InsetBehavior, move |view| {
            with_surface(view, |surface| surface.inset_behavior = value);
        })
    }

    fn indicator_style(&self, value: IndicatorStyle) -> DecorationItem {
        self.push(Feature::IndicatorStyle, move |view| {
            with_surface(view, |surface| surface.indicator_style = value);
        })
    }
}
