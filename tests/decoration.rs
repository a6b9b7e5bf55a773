//! Builder semantics exercised against real widgets.

use adorn::prelude::*;

#[test]
fn shared_prefixes_branch_without_aliasing() {
    let base = decoration().ground(Color::WHITE).clip_radius(8.0);
    let danger = base.color(Color::RED);
    let calm = base.color(Color::BLUE);

    let warning = label("warning");
    let info = label("info");
    let warning = ViewHandle::new(warning);
    let info = ViewHandle::new(info);
    warning.decoration([danger]);
    info.decoration([calm]);

    assert_eq!(warning.borrow().storage.color, Color::RED);
    assert_eq!(info.borrow().storage.color, Color::BLUE);
    // The shared prefix reached both.
    assert_eq!(warning.borrow().base.background, Some(Color::WHITE));
    assert_eq!(info.borrow().base.corner_radius, 8.0);
    // And stayed unchanged itself.
    assert_eq!(base.len(), 3);
}

#[test]
fn later_items_override_earlier_ones_per_key() {
    let view = ViewHandle::new(container());
    view.decoration([
        decoration().ground(Color::RED).radius(4.0),
        decoration().ground(Color::GREEN),
    ]);

    let view = view.borrow();
    assert_eq!(view.base.background, Some(Color::GREEN));
    assert_eq!(view.base.corner_radius, 4.0);
}

#[test]
fn composite_features_are_overridden_piecewise() {
    // clip_radius records two keys; a later radius replaces only one.
    let view = ViewHandle::new(container());
    view.decoration([decoration().clip_radius(12.0), decoration().radius(2.0)]);

    let view = view.borrow();
    assert!(view.base.clips_to_bounds);
    assert_eq!(view.base.corner_radius, 2.0);
}

#[test]
fn button_state_features_coexist_per_state() {
    let view = ViewHandle::new(button("Send"));
    view.decoration([decoration()
        .state_title("Sending", ControlState::DISABLED)
        .state_color(Color::GRAY, ControlState::DISABLED)
        .color(Color::BLUE)]);

    let view = view.borrow();
    assert_eq!(view.title_for(ControlState::NORMAL), Some("Send"));
    assert_eq!(view.title_for(ControlState::DISABLED), Some("Sending"));
    assert_eq!(view.title_color_for(ControlState::NORMAL), Some(Color::BLUE));
    assert_eq!(
        view.title_color_for(ControlState::DISABLED),
        Some(Color::GRAY)
    );
    // Unset states fall back to the normal entry.
    assert_eq!(
        view.title_color_for(ControlState::HIGHLIGHTED),
        Some(Color::BLUE)
    );
}

#[test]
fn selected_composites_cover_highlighted_combinations() {
    let view = ViewHandle::new(button("Off"));
    view.decoration([decoration().selected_title(("Off".to_owned(), "On".to_owned()))]);

    let view = view.borrow();
    assert_eq!(view.title_for(ControlState::SELECTED), Some("On"));
    assert_eq!(
        view.title_for(ControlState::SELECTED | ControlState::HIGHLIGHTED),
        Some("On")
    );
    assert_eq!(view.title_for(ControlState::HIGHLIGHTED), Some("Off"));
}

#[test]
fn text_features_reach_every_text_container() {
    let styled = decoration().text("hello").s17().center().unlimited();

    let label = ViewHandle::new(label(""));
    let field = ViewHandle::new(field());
    let area = ViewHandle::new(text_area());
    label.decoration([styled.clone()]);
    field.decoration([styled.clone()]);
    area.decoration([styled]);

    for (font, alignment, lines, text) in [
        {
            let l = label.borrow();
            (l.storage.font, l.storage.alignment, l.storage.lines, l.storage.text.clone())
        },
        {
            let f = field.borrow();
            (f.storage.font, f.storage.alignment, f.storage.lines, f.storage.text.clone())
        },
        {
            let a = area.borrow();
            (a.storage.font, a.storage.alignment, a.storage.lines, a.storage.text.clone())
        },
    ] {
        assert_eq!(font, Font::semibold(17.0));
        assert_eq!(alignment, TextAlignment::Center);
        assert_eq!(lines, 0);
        assert_eq!(text.as_deref(), Some("hello"));
    }
}

#[test]
fn attributed_text_mirrors_its_string() {
    let view = ViewHandle::new(label(""));
    view.decoration([
        decoration().attributed_text(AttributedText::new("styled").color(Color::RED))
    ]);

    let view = view.borrow();
    assert_eq!(view.storage.text.as_deref(), Some("styled"));
    let attributed = view.storage.attributed.as_ref().unwrap();
    assert_eq!(attributed.attributes.color, Some(Color::RED));
}

#[test]
fn enabled_applies_to_labels_buttons_and_fields() {
    let disable = decoration().enabled(false);

    let label = ViewHandle::new(label("x"));
    let button = ViewHandle::new(button("x"));
    let field = ViewHandle::new(field());
    let plain = ViewHandle::new(container());
    label.decoration([disable.clone()]);
    button.decoration([disable.clone()]);
    field.decoration([disable.clone()]);
    plain.decoration([disable]);

    assert!(!label.borrow().enabled);
    assert!(!button.borrow().enabled);
    assert!(!field.borrow().enabled);
}

#[test]
fn progress_feature_clamps_like_the_widget() {
    let view = ViewHandle::new(progress_bar());
    view.decoration([decoration().progress(2.5).progress_tint(Color::GREEN)]);

    let view = view.borrow();
    assert_eq!(view.progress(), 1.0);
    assert_eq!(view.progress_color, Some(Color::GREEN));
}

#[test]
fn corners_defaults_to_all_when_empty() {
    let view = ViewHandle::new(container());
    view.decoration([decoration().corners(RectCorners::empty())]);
    assert_eq!(view.borrow().base.masked_corners, RectCorners::all());

    view.decoration([decoration().corners(RectCorners::TOP)]);
    assert_eq!(view.borrow().base.masked_corners, RectCorners::TOP);
}

#[test]
fn shorthand_composites_expand_to_their_primitives() {
    let view = ViewHandle::new(container());
    view.decoration([decoration().blank().clear().interaction_off()]);
    assert_eq!(view.borrow().base.background, Some(Color::CLEAR));
    assert_eq!(view.borrow().base.alpha, 0.0);
    assert!(!view.borrow().base.interaction_enabled);

    let button = ViewHandle::new(button("x"));
    button.decoration([decoration().highlight().select().disable()]);
    assert!(button.borrow().highlighted);
    assert!(button.borrow().selected);
    assert!(!button.borrow().enabled);
}
