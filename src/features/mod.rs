//! Fluent feature constructors on [`DecorationItem`](adorn_core::DecorationItem).
//!
//! Each trait covers one widget family. All of them are implemented for
//! `DecorationItem` and re-exported from the crate prelude, so a single
//! `use adorn::prelude::*` makes the whole fluent surface available.
//!
//! Widget-specific features decline silently on targets that lack the
//! capability: applying `row_height` to a label does nothing. Features
//! with a custom hook consult it first and fall back to the known widget
//! kinds only when the hook declines.

mod button;
mod effect;
mod field;
mod font;
mod image;
mod input;
mod page;
mod progress;
mod scroll;
mod stack;
mod table;
mod text;
mod view;

pub use button::ButtonFeatures;
pub use effect::EffectFeatures;
pub use field::FieldFeatures;
pub use font::FontShorthands;
pub use image::ImageFeatures;
pub use input::InputFeatures;
pub use page::PageFeatures;
pub use progress::ProgressFeatures;
pub use scroll::ScrollFeatures;
pub use stack::StackFeatures;
pub use table::{CellFeatures, TableFeatures};
pub use text::TextFeatures;
pub use view::ViewFeatures;
