//! Step navigation through the public `App` surface.

use lesson_engine::{App, Control, NavKey, STEP_COUNT, StatusNotice, StepError, StepIndex};

fn assert_single_step_shown(app: &App, n: u8) {
    let page = app.page();
    for step in StepIndex::all() {
        let expected = step.get() == n;
        assert_eq!(page.is_menu_highlighted(step), expected, "menu entry {step}");
    }
    assert_eq!(page.visible_panel().map(StepIndex::get), Some(n));
    assert_eq!(page.progress_label(), n.to_string());
    assert_eq!(page.is_control_visible(Control::Previous), n != 1);
    assert_eq!(page.is_control_visible(Control::Next), n != STEP_COUNT);
    assert_eq!(page.content_scroll(), 0);
}

#[test]
fn every_step_renders_exactly_one_panel() {
    let mut app = App::new(None);
    for n in 1..=STEP_COUNT {
        app.go_to_step(i64::from(n)).expect("in range");
        assert_single_step_shown(&app, n);
    }
}

#[test]
fn rejected_steps_leave_page_untouched() {
    let mut app = App::new(None);
    app.go_to_step(3).expect("in range");
    app.scroll_content(4);

    for bad in [0, -1, 7, i64::MAX] {
        let err = app.go_to_step(bad).expect_err("out of range");
        assert_eq!(
            err,
            StepError::OutOfRange {
                requested: bad,
                max: STEP_COUNT
            }
        );
    }
    assert_eq!(app.current_step().get(), 3);
    assert_eq!(app.page().visible_panel().map(StepIndex::get), Some(3));
    // A rejected request does not reset the scroll either.
    assert_eq!(app.page().content_scroll(), 4);
    assert!(matches!(app.notice(), Some(StatusNotice::Warning(_))));
}

#[test]
fn boundaries_do_not_wrap() {
    let mut app = App::new(None);
    assert!(!app.previous_step());
    assert_single_step_shown(&app, 1);

    while app.next_step() {}
    assert_single_step_shown(&app, STEP_COUNT);
    assert!(!app.next_step());
    assert_eq!(app.current_step(), StepIndex::LAST);
}

#[test]
fn going_to_current_step_is_idempotent() {
    let mut app = App::new(None);
    app.go_to_step(2).expect("in range");
    app.scroll_content(3);
    let current = i64::from(app.current_step().get());
    app.go_to_step(current).expect("in range");
    assert_single_step_shown(&app, 2);
}

#[test]
fn keyboard_mapping() {
    let mut app = App::new(None);
    let script = [
        (NavKey::Right, 2),
        (NavKey::Right, 3),
        (NavKey::Left, 2),
        (NavKey::End, 6),
        (NavKey::Char('0'), 6),
        (NavKey::Char('7'), 6),
        (NavKey::Char('a'), 6),
        (NavKey::Char('2'), 2),
        (NavKey::Home, 1),
    ];
    for (key, expected) in script {
        app.handle_nav_key(key);
        assert_eq!(app.current_step().get(), expected, "after {key:?}");
    }
}
