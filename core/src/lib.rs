//! Core decoration model for the adorn framework.
//!
//! This crate defines the keyed decoration builder ([`DecorationItem`]),
//! the target side of the contract ([`Decorable`] and its capability
//! accessors), the shared value vocabulary used by decoration features
//! (geometry, fonts, colors, control state), and the host main-queue
//! model used by deferred features ([`dispatch`]).
//!
//! The builder accumulates property-setter actions under stable
//! [`Feature`] keys. Items are value types: every mutating operation
//! returns a new item and leaves the receiver untouched, so a partially
//! built item can be shared as a prefix for divergent styles without
//! aliasing surprises. Merging items is last-write-wins per key.

pub mod dispatch;
pub mod extend;
pub mod feature;
pub mod font;
pub mod geometry;
pub mod handle;
pub mod id;
pub mod item;
pub mod media;
pub mod scroll;
pub mod state;
pub mod style;
pub mod target;
pub mod text;

pub use adorn_color::Color;
pub use extend::{DecorationExtend, TextContainer};
pub use feature::Feature;
pub use font::{Font, FontWeight};
pub use geometry::{
    Axes, Axis, ContentMode, EdgeInsets, Point, Rect, RectCorners, Size, Transform, Vector,
};
pub use handle::ViewHandle;
pub use id::ViewId;
pub use item::{Action, DecorationItem, decorate};
pub use media::{BlurStyle, Image};
pub use scroll::{IndicatorStyle, InsetBehavior, ScrollSurface};
pub use state::{ControlState, SwitchState};
pub use style::{Border, Shadow};
pub use target::{Decorable, SharedView, ViewBase, WeakView};
pub use text::{AttributedText, LineBreakMode, TextAlignment, TextAttributes};
