//! The target side of the decoration contract.
//!
//! A decoration action receives a `&mut dyn Decorable` and probes it for
//! capabilities in a fixed order: the custom [`DecorationExtend`] hook
//! first, then known widget kinds via [`downcast_mut`](dyn Decorable::downcast_mut)
//! and the secondary capability accessors, and finally nothing at all.
//! A feature that finds no capability on its target silently declines.

use core::any::Any;
use core::cell::RefCell;
use core::fmt::Debug;
use std::rc::{Rc, Weak};

use adorn_color::Color;

use crate::extend::{DecorationExtend, TextContainer};
use crate::geometry::{ContentMode, Rect, RectCorners, Transform};
use crate::id::ViewId;
use crate::media::Image;
use crate::scroll::ScrollSurface;
use crate::style::{Border, Shadow};

/// A shared, type-erased handle to a view in the widget tree.
pub type SharedView = Rc<RefCell<dyn Decorable>>;

/// A weak counterpart to [`SharedView`], used for parent links and
/// deferred actions.
pub type WeakView = Weak<RefCell<dyn Decorable>>;

/// A widget that decoration items can be applied to.
///
/// Every widget embeds a [`ViewBase`] holding the properties common to
/// all views. The optional capability accessors default to `None`; a
/// widget opts into a capability by overriding the accessor.
pub trait Decorable: Any + Debug {
    /// Returns the common view properties.
    fn base(&self) -> &ViewBase;

    /// Returns the common view properties mutably.
    fn base_mut(&mut self) -> &mut ViewBase;

    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as [`Any`] for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Attaches a child view.
    ///
    /// The default stores the child in the base child list. Composite
    /// widgets may route children elsewhere, the way a blur view hosts
    /// children inside its content container.
    fn insert_child(&mut self, child: SharedView) {
        self.base_mut().children.push(child);
    }

    /// Returns the custom decoration hook, if this widget has one.
    ///
    /// When present, hooks take precedence over the default handling for
    /// every feature they report as handled.
    fn extend(&mut self) -> Option<&mut dyn DecorationExtend> {
        None
    }

    /// Returns the generic text storage, if this widget bears text.
    fn text_container(&mut self) -> Option<&mut dyn TextContainer> {
        None
    }

    /// Returns the scrollable surface, if this widget has or wraps one.
    fn scroll_surface(&mut self) -> Option<&mut ScrollSurface> {
        None
    }
}

impl dyn Decorable {
    /// Returns `true` if the concrete widget type is `T`.
    #[must_use]
    pub fn is<T: Decorable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to a concrete widget type.
    #[must_use]
    pub fn downcast_ref<T: Decorable>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Downcasts to a concrete widget type mutably.
    pub fn downcast_mut<T: Decorable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

/// The properties shared by every view, embedded in each widget.
#[derive(Debug)]
pub struct ViewBase {
    id: ViewId,
    /// The view's frame in its parent's coordinate space.
    pub frame: Rect,
    /// The background fill color.
    pub background: Option<Color>,
    /// The tint color inherited by symbolic content.
    pub tint: Option<Color>,
    /// The view's opacity, from `0.0` to `1.0`.
    pub alpha: f32,
    /// Whether the view is hidden.
    pub hidden: bool,
    /// Whether the view is declared fully opaque.
    pub opaque: bool,
    /// Whether content outside the bounds is clipped.
    pub clips_to_bounds: bool,
    /// The corner rounding radius.
    pub corner_radius: f32,
    /// Which corners the radius applies to.
    pub masked_corners: RectCorners,
    /// The border, if any.
    pub border: Option<Border>,
    /// The drop shadow, if any.
    pub shadow: Option<Shadow>,
    /// The stacking position relative to siblings.
    pub z_position: f32,
    /// The affine transform applied when rendering.
    pub transform: Transform,
    /// How content is fitted into the bounds.
    pub content_mode: ContentMode,
    /// A caller-assigned integer tag.
    pub tag: i64,
    /// Whether the view receives input.
    pub interaction_enabled: bool,
    /// Layout hugging/compression priority, if assigned.
    pub layout_priority: Option<f32>,
    /// Raw layer content, used when an image is assigned to a view with
    /// no better home for it.
    pub layer_content: Option<Image>,
    /// A mask view, if any.
    pub mask: Option<SharedView>,
    /// The parent view, if attached.
    pub parent: Option<WeakView>,
    /// The attached children.
    pub children: Vec<SharedView>,
}

impl ViewBase {
    /// Creates a base with default properties and a fresh [`ViewId`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            frame: Rect::ZERO,
            background: None,
            tint: None,
            alpha: 1.0,
            hidden: false,
            opaque: true,
            clips_to_bounds: false,
            corner_radius: 0.0,
            masked_corners: RectCorners::all(),
            border: None,
            shadow: None,
            z_position: 0.0,
            transform: Transform::IDENTITY,
            content_mode: ContentMode::default(),
            tag: 0,
            interaction_enabled: true,
            layout_priority: None,
            layer_content: None,
            mask: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the view's unique identifier.
    #[must_use]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    /// Returns `true` if a child with the given id is attached.
    #[must_use]
    pub fn contains_child(&self, id: ViewId) -> bool {
        self.children
            .iter()
            .any(|child| child.borrow().base().id() == id)
    }
}

impl Default for ViewBase {
    fn default() -> Self {
        Self::new()
    }
}
