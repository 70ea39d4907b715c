//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Write;

use lesson_engine::{App, ConceptId, LessonConfig, Point};
use tempfile::NamedTempFile;

/// Node centres on a `width` x `height` grid, from the fractional positions.
pub fn grid_centers(width: f64, height: f64) -> Vec<(ConceptId, Point)> {
    ConceptId::ALL
        .into_iter()
        .map(|id| {
            let pos = id.node().position;
            let x = (f64::from(pos.x) * width).round();
            let y = (f64::from(pos.y) * height).round();
            (id, Point::new(x, y))
        })
        .collect()
}

/// App with default config and a measured diagram layout.
pub fn laid_out_app() -> App {
    let mut app = App::new(None);
    app.update_diagram_layout(grid_centers(80.0, 20.0));
    app
}

/// Write `raw` to a temp file and load it the way the binary does.
pub fn load_config(raw: &str) -> (NamedTempFile, LessonConfig) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(raw.as_bytes()).expect("write config");
    let config = LessonConfig::load_from(file.path()).expect("valid config");
    (file, config)
}
