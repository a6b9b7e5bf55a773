//! Stable keys identifying decoration features.

use crate::state::ControlState;

/// The key under which a decoration action is stored.
///
/// Keys are what make the builder's merge semantics work: pushing a
/// feature twice replaces the earlier action, and merging items picks
/// the last writer per key. Per-control-state button features carry the
/// state in the key so that, say, a normal title and a selected title
/// coexist while two normal titles collapse to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Feature {
    /// The view frame.
    Frame,
    /// Clipping to bounds.
    Clips,
    /// The background color.
    Background,
    /// The integer tag.
    Tag,
    /// The source image.
    Src,
    /// The affine transform.
    Transform,
    /// The z position.
    ZPosition,
    /// Whether the view receives input.
    Interaction,
    /// The highlighted state.
    Highlighted,
    /// The selected state.
    Selected,
    /// The enabled state.
    Enabled,
    /// The opacity.
    Alpha,
    /// The opaque declaration.
    Opaque,
    /// The hidden state.
    Hidden,
    /// The content fit mode.
    Fit,
    /// The mask view.
    Mask,
    /// The tint color.
    Tint,
    /// The corner radius.
    Radius,
    /// Which corners are rounded.
    Corners,
    /// The border.
    Border,
    /// The drop shadow.
    Shadow,
    /// The layout priority.
    Priority,

    /// The highlighted-state image of an image view.
    HighlightedSrc,
    /// The animation image sequence.
    AnimationImages,
    /// The highlighted animation image sequence.
    HighlightedAnimationImages,
    /// The animation duration and repeat count.
    Animation,

    /// A button title for one control state.
    Title(ControlState),
    /// A button title color for one control state.
    TitleColor(ControlState),
    /// A button image for one control state.
    StateImage(ControlState),
    /// A button background image for one control state.
    BackgroundImage(ControlState),
    /// A button attributed title for one control state.
    AttributedTitle(ControlState),
    /// Content padding.
    Padding,
    /// Button title insets.
    TitleInset,
    /// Button image insets.
    ImageInset,
    /// Control content vertical alignment.
    VerticalAlign,
    /// Control content horizontal alignment.
    HorizontalAlign,

    /// Table row height.
    RowHeight,
    /// Table or cell separator insets.
    SeparatorInset,
    /// Table separator style.
    SeparatorStyle,
    /// Table separator color.
    SeparatorColor,
    /// Table separator blur effect.
    SeparatorEffect,
    /// Table header view.
    Header,
    /// Table footer view.
    Footer,

    /// Cell selected-background color.
    SelectedBackground,
    /// Cell accessory type.
    AccessoryType,
    /// Cell accessory view.
    AccessoryView,
    /// Cell indentation width.
    IndentationWidth,

    /// Stack axis.
    Axis,
    /// Stack alignment.
    StackAlignment,
    /// Stack spacing.
    Spacing,
    /// Stack distribution.
    Distribution,
    /// Deferred custom spacing after the decorated view.
    SpacingAfter,

    /// Line break mode.
    BreakMode,
    /// Text font.
    Font,
    /// Text alignment.
    TextAlignment,
    /// Maximum line count.
    Lines,
    /// Plain text content.
    Text,
    /// Attributed text content.
    AttributedText,
    /// Text color.
    Color,
    /// Highlighted text color.
    HighlightedColor,

    /// Autocapitalization behavior.
    Autocapitalization,
    /// Autocorrection behavior.
    Autocorrection,
    /// Spell-checking behavior.
    SpellChecking,
    /// Keyboard kind.
    Keyboard,
    /// Keyboard appearance.
    KeyboardAppearance,
    /// Return key kind.
    ReturnKey,
    /// Automatic return-key enabling.
    ReturnKeyAutomatically,
    /// Secure text entry.
    SecureEntry,

    /// Field placeholder text.
    Placeholder,
    /// Field attributed placeholder.
    AttributedPlaceholder,
    /// Field leading overlay view.
    LeftOverlay,
    /// Field trailing overlay view.
    RightOverlay,

    /// Scroll content size.
    ContentSize,
    /// Scroll directional lock.
    DirectionalLock,
    /// Scroll bounce behavior.
    Bounces,
    /// Axes that always bounce.
    AlwaysBounce,
    /// Scroll paging.
    Paging,
    /// Whether scrolling is enabled.
    ScrollEnabled,
    /// Delayed content touches.
    DelaysTouches,
    /// Indicator visibility.
    Indicators,
    /// Vertical indicator insets.
    VerticalIndicatorInsets,
    /// Horizontal indicator insets.
    HorizontalIndicatorInsets,
    /// Minimum zoom scale.
    MinZoom,
    /// Maximum zoom scale.
    MaxZoom,
    /// Content-inset adjustment behavior.
    InsetBehavior,
    /// Indicator style.
    IndicatorStyle,

    /// Page indicator color.
    PageIndicatorColor,
    /// Current page indicator color.
    CurrentPageIndicatorColor,
    /// Page control background style.
    PageBackgroundStyle,

    /// Progress bar style.
    ProgressStyle,
    /// Progress value.
    Progress,
    /// Progress tint color.
    ProgressTint,
    /// Track tint color.
    TrackTint,
    /// Progress image.
    ProgressImage,
    /// Track image.
    TrackImage,

    /// Blur effect style.
    Blur,
}
