//! Features targeting stacks, including deferred custom spacing.

use adorn_core::{Axis, DecorationItem, Feature, dispatch};
use adorn_layout::{Distribution, Stack, StackAlignment};

/// Feature constructors for stacks.
pub trait StackFeatures: Sized {
    /// Sets the layout axis.
    #[must_use]
    fn axis(&self, value: Axis) -> DecorationItem;

    /// Sets the cross-axis alignment.
    #[must_use]
    fn stack_align(&self, value: StackAlignment) -> DecorationItem;

    /// Sets the uniform gap between adjacent children.
    #[must_use]
    fn space(&self, value: f32) -> DecorationItem;

    /// Sets the along-axis distribution.
    #[must_use]
    fn distribution(&self, value: Distribution) -> DecorationItem;

    /// Overrides the gap after the decorated view inside its parent
    /// stack.
    ///
    /// The write is deferred to the next main-queue drain, because the
    /// view may not be arranged in its parent yet when the item is
    /// applied. If the parent is gone, is not a stack, or no longer
    /// holds the view by then, nothing happens.
    #[must_use]
    fn after(&self, value: f32) -> DecorationItem;

    /// Gives every child equal length.
    #[must_use]
    fn fill_equally(&self) -> DecorationItem {
        self.distribution(Distribution::FillEqually)
    }

    /// Keeps the declared spacing exactly.
    #[must_use]
    fn equal_spacing(&self) -> DecorationItem {
        self.distribution(Distribution::EqualSpacing)
    }

    /// Equalizes the gaps between child centers.
    #[must_use]
    fn equal_centering(&self) -> DecorationItem {
        self.distribution(Distribution::EqualCentering)
    }
}

impl StackFeatures for DecorationItem {
    fn axis(&self, value: Axis) -> DecorationItem {
        self.push(Feature::Axis, move |view| {
            if let Some(hook) = view.extend() {
                if hook.axis(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Stack>() {
                element.axis = value;
            }
        })
    }

    fn stack_align(&self, value: StackAlignment) -> DecorationItem {
        self.push(Feature::StackAlignment, move |view| {
            if let Some(element) = view.downcast_mut::<Stack>() {
                element.alignment = value;
            }
        })
    }

    fn space(&self, value: f32) -> DecorationItem {
        self.push(Feature::Spacing, move |view| {
            if let Some(hook) = view.extend() {
                if hook.spacing(value) {
                    return;
                }
            }
            if let Some(element) = view.downcast_mut::<Stack>() {
                element.spacing = value;
            }
        })
    }

    fn distribution(&self, value: Distribution) -> DecorationItem {
        self.push(Feature::Distribution, move |view| {
            if let Some(element) = view.downcast_mut::<Stack>() {
                element.distribution = value;
            }
        })
    }

    fn after(&self, value: f32) -> DecorationItem {
        self.push(Feature::SpacingAfter, move |view| {
            let id = view.base().id();
            let Some(parent) = view.base().parent.clone() else {
                return;
            };
            dispatch::defer(move || {
                let Some(parent) = parent.upgrade() else {
                    return;
                };
                let mut parent = parent.borrow_mut();
                if let Some(stack) = parent.downcast_mut::<Stack>() {
                    stack.set_spacing_after(id, value);
                }
            });
        })
    }
}
