//! Shared handles to widgets in a tree.

use core::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::geometry::Rect;
use crate::id::ViewId;
use crate::item::DecorationItem;
use crate::target::{Decorable, SharedView, WeakView};

/// A typed, shared handle to a widget.
///
/// Widgets live in `Rc<RefCell<_>>` cells so that a parent's child list,
/// the caller's handle, and deferred tasks can all refer to the same
/// view. Handles are single-threaded, matching the host toolkit's
/// threading model.
#[derive(Debug)]
pub struct ViewHandle<W: Decorable>(Rc<RefCell<W>>);

impl<W: Decorable> Clone for ViewHandle<W> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<W: Decorable> ViewHandle<W> {
    /// Wraps a widget in a shared handle.
    #[must_use]
    pub fn new(widget: W) -> Self {
        Self(Rc::new(RefCell::new(widget)))
    }

    /// Returns the widget's unique identifier.
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently mutably borrowed.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.0.borrow().base().id()
    }

    /// Borrows the widget immutably.
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, W> {
        self.0.borrow()
    }

    /// Borrows the widget mutably.
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, W> {
        self.0.borrow_mut()
    }

    /// Returns a type-erased shared handle to the same widget.
    #[must_use]
    pub fn erased(&self) -> SharedView {
        self.0.clone()
    }

    /// Returns a type-erased weak handle to the same widget.
    #[must_use]
    pub fn downgrade(&self) -> WeakView {
        Rc::downgrade(&self.erased())
    }

    /// Merges `items` and applies the result to the widget.
    ///
    /// Later items win per feature key. Returns the handle for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently borrowed.
    pub fn decoration<I>(&self, items: I) -> &Self
    where
        I: IntoIterator<Item = DecorationItem>,
    {
        DecorationItem::merge(items).apply(&mut *self.0.borrow_mut());
        self
    }

    /// Sets the widget's frame. Returns the handle for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently borrowed.
    pub fn frame(&self, frame: Rect) -> &Self {
        self.0.borrow_mut().base_mut().frame = frame;
        self
    }

    /// Attaches `child` under this widget and returns a handle to it.
    ///
    /// The child's parent link is set to this widget; where the child is
    /// stored is up to the parent's
    /// [`insert_child`](Decorable::insert_child).
    ///
    /// # Panics
    ///
    /// Panics if either widget is currently borrowed.
    pub fn insert<C: Decorable>(&self, child: C) -> ViewHandle<C> {
        let child = ViewHandle::new(child);
        child.borrow_mut().base_mut().parent = Some(self.downgrade());
        self.0.borrow_mut().insert_child(child.erased());
        child
    }
}
