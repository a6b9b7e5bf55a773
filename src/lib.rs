//! A fluent decoration layer for retained-mode widget trees.
//!
//! `adorn` separates *what a view looks like* from *what a view is*. A
//! [`DecorationItem`] is an immutable bundle of property setters keyed
//! by feature; widgets opt into capabilities (text storage, a scrollable
//! surface, custom hooks) and every feature resolves against whatever
//! the target actually supports, declining silently otherwise.
//!
//! ```
//! use adorn::prelude::*;
//!
//! let card = decoration()
//!     .ground(Color::WHITE)
//!     .clip_radius(12.0)
//!     .shadow(Shadow::default());
//!
//! let root = ViewHandle::new(container());
//! let title = root.add_label("Hello");
//! title.decoration([card.clone(), decoration().s17().center()]);
//!
//! assert_eq!(title.borrow().storage.font, Font::semibold(17.0));
//! ```
//!
//! Items are value types: every constructor returns a new item, so a
//! shared prefix can branch into divergent styles without aliasing.
//! Merging items is last-write-wins per feature key.

pub mod features;
pub mod instance;

pub use adorn_color as color;
pub use adorn_controls as controls;
pub use adorn_layout as layout;
pub use adorn_media as media;
pub use adorn_text as text;

pub use adorn_core::{Color, Decorable, DecorationItem, Feature, ViewHandle, decorate};

/// Re-export of the `tracing` crate used for internal diagnostics.
pub use tracing as log;

/// Returns an empty decoration item to start a fluent chain.
#[must_use]
pub fn decoration() -> DecorationItem {
    DecorationItem::root()
}

/// Everything needed to build and decorate widget trees.
pub mod prelude {
    pub use crate::decoration;
    pub use crate::features::{
        ButtonFeatures, CellFeatures, EffectFeatures, FieldFeatures, FontShorthands,
        ImageFeatures, InputFeatures, PageFeatures, ProgressFeatures, ScrollFeatures,
        StackFeatures, TableFeatures, TextFeatures, ViewFeatures,
    };
    pub use crate::instance::ViewInstance;

    pub use adorn_core::{
        Axes, Axis, AttributedText, Border, Color, ContentMode, ControlState, Decorable,
        DecorationExtend, DecorationItem, EdgeInsets, Feature, Font, FontWeight, Image,
        LineBreakMode, Point, Rect, RectCorners, Shadow, SharedView, Size, SwitchState,
        TextAlignment, TextContainer, Transform, ViewBase, ViewHandle, ViewId, WeakView, decorate,
        dispatch,
    };
    pub use adorn_core::{BlurStyle, IndicatorStyle, InsetBehavior, ScrollSurface};

    pub use adorn_controls::{
        AccessoryType, Button, HorizontalAlignment, PageBackgroundStyle, PageControl, ProgressBar,
        ProgressStyle, SeparatorStyle, TableCell, TableView, VerticalAlignment, button, cell,
        page_control, progress_bar, table,
    };
    pub use adorn_layout::{
        Container, Distribution, ScrollView, Stack, StackAlignment, column, container, row,
        scroll, stack,
    };
    pub use adorn_media::{BlurView, ImageView, WebView, blur, image, web};
    pub use adorn_text::{
        Autocapitalization, Autocorrection, InputTraits, KeyboardAppearance, KeyboardKind, Label,
        OverlayMode, ReturnKey, SpellChecking, TextArea, TextField, TextStorage, field, label,
        text_area,
    };
}
