//! Building widget trees with the instance helpers.

use adorn::prelude::*;

#[test]
fn children_are_attached_with_parent_links() {
    let root = ViewHandle::new(container());
    let column = root.add_column();
    let title = column.add_label("Title");
    let field = column.add_field();

    assert!(root.borrow().base.contains_child(column.id()));
    assert!(column.borrow().base.contains_child(title.id()));
    assert!(column.borrow().base.contains_child(field.id()));

    let parent = title.borrow().base.parent.clone().unwrap();
    assert_eq!(
        parent.upgrade().unwrap().borrow().base().id(),
        column.id()
    );
}

#[test]
fn aligned_stack_helpers_preset_axis_and_alignment() {
    let root = ViewHandle::new(container());
    let row = root.add_leading_row();
    let column = root.add_center_column();

    assert_eq!(row.borrow().axis, Axis::Horizontal);
    assert_eq!(row.borrow().alignment, StackAlignment::Leading);
    assert_eq!(column.borrow().axis, Axis::Vertical);
    assert_eq!(column.borrow().alignment, StackAlignment::Center);
}

#[test]
fn blur_views_route_children_into_their_content() {
    let root = ViewHandle::new(container());
    let backdrop = root.add_blur(BlurStyle::Regular);
    let caption = backdrop.add_label("caption");

    assert!(backdrop.borrow().base.children.is_empty());
    assert!(
        backdrop
            .borrow()
            .content
            .borrow()
            .base
            .contains_child(caption.id())
    );
}

#[test]
fn handles_chain_construction_and_decoration() {
    let root = ViewHandle::new(container());
    root.add_label("chained")
        .frame(Rect::from_parts(0.0, 0.0, 120.0, 24.0))
        .decoration([decoration().r14().color(Color::GRAY)]);

    let label = root.borrow().base.children[0].clone();
    let label = label.borrow();
    assert_eq!(label.base().frame.size.width, 120.0);
}

#[test]
fn image_helper_presets_aspect_fit() {
    let root = ViewHandle::new(container());
    let avatar = root.add_image("avatar");

    assert_eq!(avatar.borrow().base.content_mode, ContentMode::AspectFit);
    assert_eq!(
        avatar.borrow().image.as_ref().map(|i| i.name.as_str()),
        Some("avatar")
    );
}
