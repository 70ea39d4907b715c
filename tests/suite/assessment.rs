//! Checklist scoring as the learner sees it.

use lesson_engine::{App, FeedbackTier, Score};

fn tick_items(app: &mut App, count: usize) {
    for _ in 0..count {
        app.toggle_checklist_item();
        app.move_checklist_cursor(1);
    }
}

#[test]
fn tiers_match_percentages() {
    let cases = [
        (6, 6, 100, FeedbackTier::Complete),
        (5, 6, 83, FeedbackTier::Strong),
        (3, 4, 75, FeedbackTier::Developing),
        (2, 4, 50, FeedbackTier::Emerging),
        (1, 6, 17, FeedbackTier::Beginning),
        (0, 4, 0, FeedbackTier::Beginning),
    ];
    for (checked, total, pct, tier) in cases {
        let score = Score::new(checked, total).expect("non-empty group");
        assert_eq!(score.percentage(), pct, "{checked}/{total}");
        assert_eq!(score.tier(), tier, "{checked}/{total}");
    }
    assert!(Score::new(0, 0).is_none());
}

#[test]
fn self_assessment_feedback_updates_on_every_toggle() {
    let mut app = App::new(None);
    app.go_to_step(6).expect("in range");
    let group = app.current_checklist().expect("self-assessment");
    assert_eq!(group.name, "self-assessment");
    assert_eq!(app.page().feedback(group.name), None);

    tick_items(&mut app, 1);
    assert!(app.page().feedback(group.name).is_some_and(|t| t.starts_with("17%")));

    tick_items(&mut app, 5);
    let text = app.page().feedback(group.name).expect("feedback");
    assert!(text.starts_with("100%"));
    assert!(text.contains(FeedbackTier::Complete.message()));
}

#[test]
fn groups_are_scored_independently() {
    let mut app = App::new(None);
    app.go_to_step(4).expect("in range");
    tick_items(&mut app, 3);

    let reflection = app.check_progress("reflection").expect("scored");
    assert_eq!(reflection.percentage(), 75);
    let self_assessment = app.check_progress("self-assessment").expect("scored");
    assert_eq!(self_assessment.percentage(), 0);
    assert_eq!(app.check_progress("homework"), None);
}
