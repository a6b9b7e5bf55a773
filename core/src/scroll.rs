//! The scrollable surface exposed by scroll-capable widgets.

use crate::geometry::{Axes, EdgeInsets, Size};

/// How a scrollable surface adjusts its content insets for surrounding
/// chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum InsetBehavior {
    /// Let the host decide (default).
    #[default]
    Automatic,
    /// Adjust only scrollable axes.
    ScrollableAxes,
    /// Never adjust insets.
    Never,
    /// Always adjust insets.
    Always,
}

/// The visual style of scroll indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum IndicatorStyle {
    /// The platform default style.
    #[default]
    Default,
    /// Dark indicators for light content.
    Black,
    /// Light indicators for dark content.
    White,
}

/// The scroll-related properties of a scrollable surface.
///
/// A widget that can scroll, or that wraps something that can (a web
/// view, a text area, a table), exposes one of these through
/// [`Decorable::scroll_surface`](crate::Decorable::scroll_surface).
/// Scroll features operate on the surface rather than on the widget
/// type itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSurface {
    /// The size of the scrollable content.
    pub content_size: Size,
    /// Extra insets around the content.
    pub content_inset: EdgeInsets,
    /// Whether scrolling locks to the dominant axis of a drag.
    pub directional_lock: bool,
    /// Whether the content bounces past its edges.
    pub bounces: bool,
    /// Axes that bounce even when the content fits.
    pub always_bounce: Axes,
    /// Whether scrolling snaps to page boundaries.
    pub paging: bool,
    /// Whether scrolling is enabled at all.
    pub scroll_enabled: bool,
    /// Whether touch delivery to content is briefly delayed.
    pub delays_content_touches: bool,
    /// Axes on which scroll indicators are shown.
    pub shows_indicators: Axes,
    /// Insets for the vertical indicator.
    pub vertical_indicator_insets: EdgeInsets,
    /// Insets for the horizontal indicator.
    pub horizontal_indicator_insets: EdgeInsets,
    /// The minimum zoom scale.
    pub min_zoom: f32,
    /// The maximum zoom scale.
    pub max_zoom: f32,
    /// How content insets adjust for surrounding chrome.
    pub inset_behavior: InsetBehavior,
    /// The indicator style.
    pub indicator_style: IndicatorStyle,
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self {
            content_size: Size::ZERO,
            content_inset: EdgeInsets::default(),
            directional_lock: false,
            bounces: true,
            always_bounce: Axes::empty(),
            paging: false,
            scroll_enabled: true,
            delays_content_touches: true,
            shows_indicators: Axes::all(),
            vertical_indicator_insets: EdgeInsets::default(),
            horizontal_indicator_insets: EdgeInsets::default(),
            min_zoom: 1.0,
            max_zoom: 1.0,
            inset_behavior: InsetBehavior::default(),
            indicator_style: IndicatorStyle::default(),
        }
    }
}
