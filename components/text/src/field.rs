//! A single-line editable text field.

use core::any::Any;

use adorn_core::{
    AttributedText, Decorable, DecorationExtend, SharedView, TextContainer, ViewBase,
};

use crate::input::{InputTraits, OverlayMode};
use crate::storage::TextStorage;

/// A view that edits a single line of text.
#[derive(Debug, Default)]
pub struct TextField {
    /// Common view properties.
    pub base: ViewBase,
    /// The field's text properties.
    pub storage: TextStorage,
    /// Keyboard and input behavior.
    pub traits: InputTraits,
    /// The plain placeholder shown while the field is empty.
    pub placeholder: Option<String>,
    /// The styled placeholder shown while the field is empty.
    pub attributed_placeholder: Option<AttributedText>,
    /// The view shown at the leading edge and when it is visible.
    pub left_overlay: Option<(SharedView, OverlayMode)>,
    /// The view shown at the trailing edge and when it is visible.
    pub right_overlay: Option<(SharedView, OverlayMode)>,
    /// Whether the field accepts input.
    pub enabled: bool,
}

impl TextField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a field with a placeholder.
    #[must_use]
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.placeholder = Some(placeholder.into());
        field
    }
}

impl Decorable for TextField {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn extend(&mut self) -> Option<&mut dyn DecorationExtend> {
        Some(self)
    }

    fn text_container(&mut self) -> Option<&mut dyn TextContainer> {
        Some(&mut self.storage)
    }
}

impl DecorationExtend for TextField {
    fn attributed_placeholder(&mut self, value: &AttributedText) -> bool {
        self.attributed_placeholder = Some(value.clone());
        true
    }
}

/// Creates an empty text field.
#[must_use]
pub fn field() -> TextField {
    TextField::new()
}
