//! Capability probing: custom hooks, fallbacks and silent no-ops.

use core::any::Any;

use adorn::prelude::*;

/// A custom widget that intercepts the text feature but nothing else.
#[derive(Debug, Default)]
struct Badge {
    base: ViewBase,
    storage: TextStorage,
    hook_text: Option<String>,
    hook_calls: usize,
}

impl Decorable for Badge {
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

impl DecorationExtend for Badge {
    fn text(&mut self, value: &str) -> bool {
        self.hook_calls += 1;
        self.hook_text = Some(value.to_owned());
        true
    }
}

#[test]
fn custom_hooks_take_precedence_over_text_storage() {
    let view = ViewHandle::new(Badge::default());
    view.decoration([decoration().text("intercepted")]);

    let view = view.borrow();
    assert_eq!(view.hook_calls, 1);
    assert_eq!(view.hook_text.as_deref(), Some("intercepted"));
    // The generic fallback never ran.
    assert_eq!(view.storage.text, None);
}

#[test]
fn declined_hooks_fall_through_to_the_default_handling() {
    // Badge does not override the color hook, so the default body
    // declines and the text container handles it.
    let view = ViewHandle::new(Badge::default());
    view.decoration([decoration().color(Color::RED)]);

    let view = view.borrow();
    assert_eq!(view.hook_calls, 0);
    assert_eq!(view.storage.color, Color::RED);
}

#[test]
fn widget_features_decline_silently_on_plain_containers() {
    let view = ViewHandle::new(container());
    view.decoration([decoration()
        .text("ignored")
        .row_height(44.0)
        .progress(0.5)
        .space(8.0)
        .placeholder("ignored")
        .bounces(false)
        .tag(7)]);

    // Only the common feature landed.
    assert_eq!(view.borrow().base.tag, 7);
}

#[test]
fn scroll_features_reach_every_scrollable_surface() {
    let tune = decoration().un_bounce().paging(true).no_indicators();

    let scroll = ViewHandle::new(scroll());
    let table = ViewHandle::new(table());
    let area = ViewHandle::new(text_area());
    let web = ViewHandle::new(web());
    scroll.decoration([tune.clone()]);
    table.decoration([tune.clone()]);
    area.decoration([tune.clone()]);
    web.decoration([tune]);

    for surface in [
        scroll.borrow().surface.clone(),
        table.borrow().surface.clone(),
        area.borrow().scroll.clone(),
        web.borrow().surface.clone(),
    ] {
        assert!(!surface.bounces);
        assert!(surface.paging);
        assert!(surface.shows_indicators.is_empty());
    }
}

#[test]
fn padding_routes_by_capability() {
    let pad = decoration().padding(10.0);

    let button = ViewHandle::new(button("x"));
    let area = ViewHandle::new(text_area());
    let scroll = ViewHandle::new(scroll());
    button.decoration([pad.clone()]);
    area.decoration([pad.clone()]);
    scroll.decoration([pad]);

    assert_eq!(button.borrow().content_insets, EdgeInsets::all(10.0));
    assert_eq!(area.borrow().text_insets, EdgeInsets::all(10.0));
    // The area's surface insets are reset, not padded.
    assert_eq!(area.borrow().scroll.content_inset, EdgeInsets::default());
    assert_eq!(
        scroll.borrow().surface.content_inset,
        EdgeInsets::all(10.0)
    );
}

#[test]
fn src_routes_by_widget_kind() {
    let portrait = decoration().src("portrait");

    let image = ViewHandle::new(image("placeholder"));
    let button = ViewHandle::new(button("x"));
    let plain = ViewHandle::new(container());
    image.decoration([portrait.clone()]);
    button.decoration([portrait.clone()]);
    plain.decoration([portrait]);

    assert_eq!(
        image.borrow().image.as_ref().map(|i| i.name.as_str()),
        Some("portrait")
    );
    assert_eq!(
        button
            .borrow()
            .image_for(ControlState::NORMAL)
            .map(|i| i.name.as_str()),
        Some("portrait")
    );
    assert_eq!(
        plain
            .borrow()
            .base
            .layer_content
            .as_ref()
            .map(|i| i.name.as_str()),
        Some("portrait")
    );
}

#[test]
fn highlighted_reaches_each_widget_kind_with_the_state() {
    let lit = decoration().highlighted(true);

    let label = ViewHandle::new(label("x"));
    let button = ViewHandle::new(button("x"));
    let image = ViewHandle::new(image("x"));
    let cell = ViewHandle::new(cell());
    label.decoration([lit.clone()]);
    button.decoration([lit.clone()]);
    image.decoration([lit.clone()]);
    cell.decoration([lit]);

    assert!(label.borrow().highlighted);
    assert!(button.borrow().highlighted);
    assert!(image.borrow().highlighted);
    assert!(cell.borrow().highlighted);
}

#[test]
fn blur_prefers_the_hook_and_falls_back_to_blur_views() {
    let view = ViewHandle::new(blur(BlurStyle::Light));
    view.decoration([decoration().blur(BlurStyle::Dark)]);
    assert_eq!(view.borrow().style, Some(BlurStyle::Dark));

    // Plain views ignore it entirely.
    let plain = ViewHandle::new(container());
    plain.decoration([decoration().blur(BlurStyle::Dark)]);
}

#[test]
fn field_overlays_and_placeholders_apply() {
    let icon = ViewHandle::new(image("magnifier")).erased();
    let view = ViewHandle::new(field());
    view.decoration([decoration()
        .placeholder("Search")
        .color_placeholder("Search", Color::GRAY)
        .left(icon, OverlayMode::Always)
        .password()]);

    let view = view.borrow();
    assert_eq!(view.placeholder.as_deref(), Some("Search"));
    let attributed = view.attributed_placeholder.as_ref().unwrap();
    assert_eq!(attributed.string, "Search");
    assert_eq!(attributed.attributes.color, Some(Color::GRAY));
    assert!(matches!(
        view.left_overlay,
        Some((_, OverlayMode::Always))
    ));
    assert!(view.traits.secure_entry);
}
