//! Relationship diagram behaviour through the page model.

use std::time::Duration;

use lesson_engine::{App, ConceptId, HighlightTiming, Point, Strength};

use crate::common::{grid_centers, laid_out_app};

#[test]
fn leadership_shows_four_strength_tagged_connectors() {
    let mut app = laid_out_app();
    app.select_node("leadership");

    let detail = app.page().detail().expect("detail panel");
    assert_eq!(detail.node, ConceptId::Leadership);
    assert_eq!(detail.entries.len(), 4);
    assert_eq!(detail.entries[0].target_name, "Culture");

    let connectors = app.page().connectors();
    assert_eq!(connectors.len(), 4);
    assert!(connectors.iter().all(|c| c.source == ConceptId::Leadership));
    let strengths: Vec<Strength> = connectors.iter().map(|c| c.strength).collect();
    assert_eq!(
        strengths,
        vec![
            Strength::Strong,
            Strength::Strong,
            Strength::Medium,
            Strength::Medium
        ]
    );
}

#[test]
fn exactly_one_node_is_active() {
    let mut app = laid_out_app();
    for id in ConceptId::ALL {
        app.select_node(id.as_str());
        let active: Vec<_> = ConceptId::ALL
            .into_iter()
            .filter(|n| app.page().is_node_active(*n))
            .collect();
        assert_eq!(active, vec![id]);
    }
}

#[test]
fn unknown_identifier_is_ignored() {
    let mut app = laid_out_app();
    app.select_node("culture");
    let detail = app.page().detail().cloned();
    let connectors = app.page().connectors().to_vec();

    assert_eq!(app.select_node("synergy"), None);
    assert_eq!(app.select_node(""), None);
    assert_eq!(app.page().detail().cloned(), detail);
    assert_eq!(app.page().connectors(), connectors.as_slice());
}

#[test]
fn unmeasurable_targets_are_skipped() {
    let mut app = App::new(None);
    let partial: Vec<(ConceptId, Point)> = grid_centers(80.0, 20.0)
        .into_iter()
        .filter(|(id, _)| *id != ConceptId::People)
        .collect();
    app.update_diagram_layout(partial);

    let targets: Vec<_> = app.page().connectors().iter().map(|c| c.target).collect();
    assert_eq!(
        targets,
        vec![ConceptId::Culture, ConceptId::Processes, ConceptId::Results]
    );
    // Indices keep their position in the adjacency list.
    let indices: Vec<_> = app.page().connectors().iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 3]);
}

#[test]
fn reselection_drops_pending_highlights() {
    let mut app = laid_out_app();
    app.select_node("leadership");
    app.advance(Duration::from_millis(400));
    app.select_node("results");

    // Leadership's first settle comes due here; it must not touch the new
    // connectors.
    app.advance(Duration::from_millis(60));
    let lit: Vec<bool> = app.page().connectors().iter().map(|c| c.highlighted).collect();
    assert_eq!(lit, vec![true, false]);

    app.advance(HighlightTiming::DEFAULT_STAGGER + HighlightTiming::DEFAULT_HOLD);
    assert!(app.page().connectors().iter().all(|c| !c.highlighted));
}

#[test]
fn connectors_follow_layout_changes() {
    let mut app = laid_out_app();
    let before = app.page().connectors()[0].from;

    app.handle_resize();
    app.update_diagram_layout(grid_centers(160.0, 40.0));
    let after = app.page().connectors()[0].from;
    assert_ne!(before, after);
    assert_eq!(after, Point::new(80.0, 4.0));
}
