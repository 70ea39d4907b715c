//! Loading `config.toml` and starting the app from it.

use std::time::Duration;

use lesson_engine::{App, ConceptId, ConfigError, HighlightTiming, LessonConfig, SeedNode};

use crate::common::{grid_centers, load_config};

#[test]
fn configured_app_starts_where_asked() {
    let (_file, config) = load_config(
        r#"
        [app]
        high_contrast = true
        start_step = 3

        [diagram]
        seed_node = "processes"
        "#,
    );
    let app = App::new(Some(&config));
    assert!(app.ui_options().high_contrast);
    assert_eq!(app.current_step().get(), 3);
    assert_eq!(app.active_node(), Some(ConceptId::Processes));
}

#[test]
fn timing_comes_from_config() {
    let (_file, config) = load_config("[diagram]\nstagger_ms = 10\nhighlight_ms = 20\n");
    assert_eq!(
        config.highlight_timing(),
        HighlightTiming {
            stagger: Duration::from_millis(10),
            hold: Duration::from_millis(20),
        }
    );

    let mut app = App::new(Some(&config));
    app.update_diagram_layout(grid_centers(80.0, 20.0));
    app.advance(Duration::from_millis(5));
    assert!(app.page().connectors()[0].highlighted);
    app.advance(Duration::from_millis(100));
    assert!(app.page().connectors().iter().all(|c| !c.highlighted));
}

#[test]
fn disabled_seed_starts_with_empty_detail() {
    let (_file, config) = load_config("[diagram]\nseed_node = \"none\"\n");
    assert_eq!(config.seed_node(), SeedNode::Disabled);
    let mut app = App::new(Some(&config));
    app.update_diagram_layout(grid_centers(80.0, 20.0));
    assert!(app.page().detail().is_none());
    assert!(app.page().connectors().is_empty());
}

#[test]
fn broken_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[app]\nstart_step = \"three\"\n").expect("write");
    let err = LessonConfig::load_from(&path).expect_err("wrong type");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}
