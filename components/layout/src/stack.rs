//! A linear stack that arranges its children along one axis.

use core::any::Any;
use std::collections::HashMap;

use adorn_core::{Axis, Decorable, ViewBase, ViewId};

/// How a stack aligns children across its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum StackAlignment {
    /// Stretch children to fill the cross axis (default).
    #[default]
    Fill,
    /// Align to the leading edge.
    Leading,
    /// Align to the trailing edge.
    Trailing,
    /// Center across the axis.
    Center,
    /// Align text baselines of the first line.
    FirstBaseline,
    /// Align text baselines of the last line.
    LastBaseline,
}

/// How a stack distributes children along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum Distribution {
    /// Size children by their own content (default).
    #[default]
    Fill,
    /// Give every child equal length.
    FillEqually,
    /// Size children proportionally to their content.
    FillProportionally,
    /// Keep the declared spacing exactly.
    EqualSpacing,
    /// Equalize the gaps between child centers.
    EqualCentering,
}

/// A view that lays out its children along a single axis.
#[derive(Debug)]
pub struct Stack {
    /// Common view properties.
    pub base: ViewBase,
    /// The layout axis.
    pub axis: Axis,
    /// Cross-axis alignment.
    pub alignment: StackAlignment,
    /// The uniform gap between adjacent children.
    pub spacing: f32,
    /// Along-axis distribution.
    pub distribution: Distribution,
    custom_spacing: HashMap<ViewId, f32>,
}

impl Stack {
    /// Creates an empty stack along the given axis.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            base: ViewBase::new(),
            axis,
            alignment: StackAlignment::default(),
            spacing: 0.0,
            distribution: Distribution::default(),
            custom_spacing: HashMap::new(),
        }
    }

    /// Overrides the gap after a particular child.
    ///
    /// Ignored unless a child with the given id is currently attached,
    /// which makes deferred spacing updates safe when the child has
    /// since been removed.
    pub fn set_spacing_after(&mut self, child: ViewId, spacing: f32) {
        if self.base.contains_child(child) {
            self.custom_spacing.insert(child, spacing);
        }
    }

    /// Returns the custom gap after a child, if one is set.
    #[must_use]
    pub fn spacing_after(&self, child: ViewId) -> Option<f32> {
        self.custom_spacing.get(&child).copied()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(Axis::default())
    }
}

impl Decorable for Stack {
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

/// Creates an empty stack along the default axis.
#[must_use]
pub fn stack() -> Stack {
    Stack::default()
}

/// Creates a horizontal stack.
#[must_use]
pub fn row() -> Stack {
    Stack::new(Axis::Horizontal)
}

/// Creates a vertical stack.
#[must_use]
pub fn column() -> Stack {
    Stack::new(Axis::Vertical)
}

#[cfg(test)]
mod tests {
    use adorn_core::ViewHandle;

    use super::*;
    use crate::container::Container;

    #[test]
    fn spacing_after_requires_an_attached_child() {
        let parent = ViewHandle::new(row());
        let child = parent.insert(Container::new());
        let stranger = ViewHandle::new(Container::new());

        parent.borrow_mut().set_spacing_after(child.id(), 12.0);
        parent.borrow_mut().set_spacing_after(stranger.id(), 99.0);

        assert_eq!(parent.borrow().spacing_after(child.id()), Some(12.0));
        assert_eq!(parent.borrow().spacing_after(stranger.id()), None);
    }
}
