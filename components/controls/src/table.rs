//! A scrolling list of rows and the cells that fill it.

use core::any::Any;

use adorn_color::Color;
use adorn_core::{
    BlurStyle, Decorable, EdgeInsets, ScrollSurface, SharedView, ViewBase,
};

/// How a table draws the separator between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum SeparatorStyle {
    /// A single hairline (default).
    #[default]
    SingleLine,
    /// No separators.
    None,
}

/// The indicator drawn at a cell's trailing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum AccessoryType {
    /// No accessory (default).
    #[default]
    None,
    /// A disclosure chevron.
    DisclosureIndicator,
    /// A detail button with a chevron.
    DetailDisclosureButton,
    /// A checkmark.
    Checkmark,
    /// A detail button.
    DetailButton,
}

/// A view that scrolls a vertical list of row cells.
#[derive(Debug)]
pub struct TableView {
    /// Common view properties.
    pub base: ViewBase,
    /// Scrolling behavior.
    pub surface: ScrollSurface,
    /// The fixed row height, or zero for self-sizing rows.
    pub row_height: f32,
    /// The height estimate used before rows are measured.
    pub estimated_row_height: f32,
    /// Insets applied to the row separators.
    pub separator_inset: EdgeInsets,
    /// How separators are drawn.
    pub separator_style: SeparatorStyle,
    /// The separator color.
    pub separator_color: Option<Color>,
    /// A blur applied to the separators instead of a flat color.
    pub separator_effect: Option<BlurStyle>,
    /// A view pinned above the first row.
    pub header: Option<SharedView>,
    /// A view pinned below the last row.
    pub footer: Option<SharedView>,
}

impl TableView {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            surface: ScrollSurface::default(),
            row_height: 0.0,
            estimated_row_height: 0.0,
            separator_inset: EdgeInsets::default(),
            separator_style: SeparatorStyle::default(),
            separator_color: None,
            separator_effect: None,
            header: None,
            footer: None,
        }
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorable for TableView {
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

    fn scroll_surface(&mut self) -> Option<&mut ScrollSurface> {
        Some(&mut self.surface)
    }
}

/// A single row in a table.
#[derive(Debug, Default)]
pub struct TableCell {
    /// Common view properties.
    pub base: ViewBase,
    /// The view shown behind the cell while selected.
    pub selected_background: Option<SharedView>,
    /// Insets applied to the cell's separator.
    pub separator_inset: EdgeInsets,
    /// The trailing accessory indicator.
    pub accessory: AccessoryType,
    /// A custom view replacing the accessory indicator.
    pub accessory_view: Option<SharedView>,
    /// The indentation depth.
    pub indentation_level: u32,
    /// The width of one indentation step.
    pub indentation_width: f32,
    /// Whether the cell renders in its highlighted state.
    pub highlighted: bool,
    /// Whether the cell renders in its selected state.
    pub selected: bool,
}

impl TableCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indentation_width: 10.0,
            ..Self::default()
        }
    }
}

impl Decorable for TableCell {
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
}

/// Creates an empty table.
#[must_use]
pub fn table() -> TableView {
    TableView::new()
}

/// Creates an empty table cell.
#[must_use]
pub fn cell() -> TableCell {
    TableCell::new()
}
