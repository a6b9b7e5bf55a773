//! A view that blurs whatever is behind it.

use core::any::Any;

use adorn_core::{BlurStyle, Decorable, SharedView, ViewBase, ViewHandle};
use adorn_layout::Container;

/// A view that applies a blur effect behind its content.
///
/// Children are hosted inside a dedicated content container rather than
/// directly under the effect view, so they render above the blur.
#[derive(Debug)]
pub struct BlurView {
    /// Common view properties.
    pub base: ViewBase,
    /// The blur style, or `None` to disable the effect.
    pub style: Option<BlurStyle>,
    /// The container that hosts the view's children.
    pub content: ViewHandle<Container>,
}

impl BlurView {
    /// Creates a blur view with the given style.
    #[must_use]
    pub fn new(style: BlurStyle) -> Self {
        Self {
            base: ViewBase::new(),
            style: Some(style),
            content: ViewHandle::new(Container::new()),
        }
    }
}

impl Default for BlurView {
    fn default() -> Self {
        Self::new(BlurStyle::default())
    }
}

impl Decorable for BlurView {
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

    fn insert_child(&mut self, child: SharedView) {
        self.content.borrow_mut().base.children.push(child);
    }
}

/// Creates a blur view with the given style.
#[must_use]
pub fn blur(style: BlurStyle) -> BlurView {
    BlurView::new(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_land_in_the_content_container() {
        let view = ViewHandle::new(BlurView::default());
        let child = view.insert(Container::new());

        assert!(view.borrow().base.children.is_empty());
        assert!(view.borrow().content.borrow().base.contains_child(child.id()));
    }
}
