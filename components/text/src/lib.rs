//! Text-bearing widgets: labels, single-line fields and multi-line areas.
//!
//! All three expose their shared [`TextStorage`] through the
//! [`TextContainer`](adorn_core::TextContainer) capability, which is what
//! lets generic text features (text, font, color, alignment, line count,
//! attributed text) treat them uniformly.

mod area;
mod field;
mod input;
mod label;
mod storage;

pub use area::{TextArea, text_area};
pub use field::{TextField, field};
pub use input::{
    Autocapitalization, Autocorrection, InputTraits, KeyboardAppearance, KeyboardKind, OverlayMode,
    ReturnKey, SpellChecking,
};
pub use label::{Label, label};
pub use storage::TextStorage;
