//! Deferred custom spacing through the main-queue model.

use adorn::prelude::*;

#[test]
fn after_applies_custom_spacing_on_the_next_drain() {
    dispatch::drain();
    let parent = ViewHandle::new(row());
    let child = parent.add_label("first");
    child.decoration([decoration().after(16.0)]);

    // Nothing is written until the queue drains.
    assert_eq!(parent.borrow().spacing_after(child.id()), None);
    assert_eq!(dispatch::drain(), 1);
    assert_eq!(parent.borrow().spacing_after(child.id()), Some(16.0));
}

#[test]
fn after_is_dropped_when_the_child_was_removed() {
    dispatch::drain();
    let parent = ViewHandle::new(column());
    let child = parent.add_view();
    child.decoration([decoration().after(8.0)]);

    parent.borrow_mut().base.children.clear();
    dispatch::drain();
    assert_eq!(parent.borrow().spacing_after(child.id()), None);
}

#[test]
fn after_is_dropped_when_the_parent_is_gone() {
    dispatch::drain();
    let parent = ViewHandle::new(row());
    let child = parent.add_view();
    child.decoration([decoration().after(8.0)]);

    drop(parent);

    // The task upgrades a dead weak reference and does nothing.
    assert_eq!(dispatch::drain(), 1);
}

#[test]
fn after_without_a_parent_queues_nothing() {
    dispatch::drain();
    let orphan = ViewHandle::new(container());
    orphan.decoration([decoration().after(8.0)]);
    assert_eq!(dispatch::pending(), 0);
}

#[test]
fn after_ignores_parents_that_are_not_stacks() {
    dispatch::drain();
    let parent = ViewHandle::new(container());
    let child = parent.add_view();
    child.decoration([decoration().after(8.0)]);
    assert_eq!(dispatch::drain(), 1);
}
