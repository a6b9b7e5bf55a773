//! Features targeting tables and table cells.

use adorn_core::{
    BlurStyle, Color, DecorationItem, EdgeInsets, Feature, SharedView, ViewHandle,
};
use adorn_controls::{AccessoryType, SeparatorStyle, TableCell, TableView};
use adorn_layout::Container;

/// Feature constructors for tables.
pub trait TableFeatures: Sized {
    /// Sets the fixed row height.
    ///
    /// Shares a key with [`estimated_row_height`](Self::estimated_row_height);
    /// pushing one replaces the other.
    #[must_use]
    fn row_height(&self, value: f32) -> DecorationItem;

    /// Sets the row height estimate used before rows are measured.
    #[must_use]
    fn estimated_row_height(&self, value: f32) -> DecorationItem;

    /// Sets the separator insets on a table or a cell.
    #[must_use]
    fn separator_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem;

    /// Sets how separators are drawn.
    #[must_use]
    fn separator_style(&self, value: SeparatorStyle) -> DecorationItem;

    /// Sets the separator color.
    #[must_use]
    fn separator_color(&self, value: Color) -> DecorationItem;

    /// Sets a blur effect on the separators, or clears it.
    #[must_use]
    fn separator_effect(&self, value: Option<BlurStyle>) -> DecorationItem;

    /// Pins a view above the first row.
    #[must_use]
    fn header(&self, value: SharedView) -> DecorationItem;

    /// Pins a view below the last row.
    #[must_use]
    fn footer(&self, value: SharedView) -> DecorationItem;
}

impl TableFeatures for DecorationItem {
    fn row_height(&self, value: f32) -> DecorationItem {
        self.push(Feature::RowHeight, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.row_height = value;
            }
        })
    }

    fn estimated_row_height(&self, value: f32) -> DecorationItem {
        self.push(Feature::RowHeight, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.estimated_row_height = value;
            }
        })
    }

    fn separator_inset(&self, value: impl Into<EdgeInsets>) -> DecorationItem {
        let value = value.into();
        self.push(Feature::SeparatorInset, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.separator_inset = value;
            }
            if let Some(element) = view.downcast_mut::<TableCell>() {
                element.separator_inset = value;
            }
        })
    }

    fn separator_style(&self, value: SeparatorStyle) -> DecorationItem {
        self.push(Feature::SeparatorStyle, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.separator_style = value;
            }
        })
    }

    fn separator_color(&self, value: Color) -> DecorationItem {
        self.push(Feature::SeparatorColor, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.separator_color = Some(value);
            }
        })
    }

    fn separator_effect(&self, value: Option<BlurStyle>) -> DecorationItem {
        self.push(Feature::SeparatorEffect, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.separator_effect = value;
            }
        })
    }

    fn header(&self, value: SharedView) -> DecorationItem {
        self.push(Feature::Header, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.header = Some(value.clone());
            }
        })
    }

    fn footer(&self, value: SharedView) -> DecorationItem {
        self.push(Feature::Footer, move |view| {
            if let Some(element) = view.downcast_mut::<TableView>() {
                element.footer = Some(value.clone());
            }
        })
    }
}

/// Feature constructors for table cells.
pub trait CellFeatures: Sized {
    /// Sets a flat-color view behind the cell while selected.
    #[must_use]
    fn selected_background(&self, value: Color) -> DecorationItem;

    /// Sets the trailing accessory indicator.
    #[must_use]
    fn accessory(&self, value: AccessoryType) -> DecorationItem;

    /// Replaces the accessory indicator with a custom view.
    #[must_use]
    fn accessory_view(&self, value: SharedView) -> DecorationItem;

    /// Sets the indentation width and indents the cell one level.
    #[must_use]
    fn indentation_width(&self, value: f32) -> DecorationItem;
}

impl CellFeatures for DecorationItem {
    fn selected_background(&self, value: Color) -> DecorationItem {
        self.push(Feature::SelectedBackground, move |view| {
            if let Some(element) = view.downcast_mut::<TableCell>() {
                let mut backdrop = Container::new();
                backdrop.base.background = Some(value);
                element.selected_background = Some(ViewHandle::new(backdrop).erased());
            }
        })
    }

    fn accessory(&self, value: AccessoryType) -> DecorationItem {
        self.push(Feature::AccessoryType, move |view| {
            if let Some(element) = view.downcast_mut::<TableCell>() {
                element.accessory = value;
            }
        })
    }

    fn accessory_view(&self, value: SharedView) -> DecorationItem {
        self.push(Feature::AccessoryView, move |view| {
            if let Some(element) = view.downcast_mut::<TableCell>() {
                element.accessory_view = Some(value.clone());
            }
        })
    }

    fn indentation_width(&self, value: f32) -> DecorationItem {
        self.push(Feature::IndentationWidth, move |view| {
            if let Some(element) = view.downcast_mut::<TableCell>() {
                element.indentation_level = 1;
                element.indentation_width = value;
            }
        })
    }
}
