//! Child-construction helpers on [`ViewHandle`].
//!
//! Each helper builds a widget, attaches it under the receiver and
//! returns a typed handle to the child, so trees read top-down:
//!
//! ```
//! use adorn::prelude::*;
//!
//! let root = ViewHandle::new(container());
//! let list = root.add_column();
//! list.add_label("Title").decoration([decoration().s17()]);
//! list.add_label("Subtitle").decoration([decoration().r13()]);
//! ```

use adorn_controls::{Button, ProgressBar, ProgressStyle};
use adorn_core::{Axis, BlurStyle, Decorable, Image, ViewHandle};
use adorn_layout::{Container, ScrollView, Stack, StackAlignment};
use adorn_media::{BlurView, ImageView};
use adorn_text::{Label, TextField};

/// Child-construction helpers available on every widget handle.
pub trait ViewInstance {
    /// Attaches an empty container.
    fn add_view(&self) -> ViewHandle<Container>;

    /// Attaches a label with the given text.
    fn add_label(&self, text: impl Into<String>) -> ViewHandle<Label>;

    /// Attaches an empty button.
    fn add_button(&self) -> ViewHandle<Button>;

    /// Attaches an image view with the given image.
    fn add_image(&self, image: impl Into<Image>) -> ViewHandle<ImageView>;

    /// Attaches a blur view with the given style.
    fn add_blur(&self, style: BlurStyle) -> ViewHandle<BlurView>;

    /// Attaches an empty stack along the given axis.
    fn add_stack(&self, axis: Axis) -> ViewHandle<Stack>;

    /// Attaches a horizontal stack.
    fn add_row(&self) -> ViewHandle<Stack>;

    /// Attaches a vertical stack.
    fn add_column(&self) -> ViewHandle<Stack>;

    /// Attaches a horizontal stack aligned to the leading edge.
    fn add_leading_row(&self) -> ViewHandle<Stack>;

    /// Attaches a vertical stack aligned to the leading edge.
    fn add_leading_column(&self) -> ViewHandle<Stack>;

    /// Attaches a horizontal stack centered across its axis.
    fn add_center_row(&self) -> ViewHandle<Stack>;

    /// Attaches a vertical stack centered across its axis.
    fn add_center_column(&self) -> ViewHandle<Stack>;

    /// Attaches an empty scroll view.
    fn add_scroll(&self) -> ViewHandle<ScrollView>;

    /// Attaches an empty text field.
    fn add_field(&self) -> ViewHandle<TextField>;

    /// Attaches a progress bar with the given style.
    fn add_progress(&self, style: ProgressStyle) -> ViewHandle<ProgressBar>;
}

impl<W: Decorable> ViewInstance for ViewHandle<W> {
    fn add_view(&self) -> ViewHandle<Container> {
        self.insert(Container::new())
    }

    fn add_label(&self, text: impl Into<String>) -> ViewHandle<Label> {
        self.insert(Label::with_text(text))
    }

    fn add_button(&self) -> ViewHandle<Button> {
        self.insert(Button::new())
    }

    fn add_image(&self, image: impl Into<Image>) -> ViewHandle<ImageView> {
        self.insert(ImageView::with_image(image.into()))
    }

    fn add_blur(&self, style: BlurStyle) -> ViewHandle<BlurView> {
        self.insert(BlurView::new(style))
    }

    fn add_stack(&self, axis: Axis) -> ViewHandle<Stack> {
        self.insert(Stack::new(axis))
    }

    fn add_row(&self) -> ViewHandle<Stack> {
        self.add_stack(Axis::Horizontal)
    }

    fn add_column(&self) -> ViewHandle<Stack> {
        self.add_stack(Axis::Vertical)
    }

    fn add_leading_row(&self) -> ViewHandle<Stack> {
        let stack = self.add_row();
        stack.borrow_mut().alignment = StackAlignment::Leading;
        stack
    }

    fn add_leading_column(&self) -> ViewHandle<Stack> {
        let stack = self.add_column();
        stack.borrow_mut().alignment = StackAlignment::Leading;
        stack
    }

    fn add_center_row(&self) -> ViewHandle<Stack> {
        let stack = self.add_row();
        stack.borrow_mut().alignment = StackAlignment::Center;
        stack
    }

    fn add_center_column(&self) -> ViewHandle<Stack> {
        let stack = self.add_column();
        stack.borrow_mut().alignment = StackAlignment::Center;
        stack
    }

    fn add_scroll(&self) -> ViewHandle<ScrollView> {
        self.insert(ScrollView::new())
    }

    fn add_field(&self) -> ViewHandle<TextField> {
        self.insert(TextField::new())
    }

    fn add_progress(&self, style: ProgressStyle) -> ViewHandle<ProgressBar> {
        let mut bar = ProgressBar::new();
        bar.style = style;
        self.insert(bar)
    }
}
