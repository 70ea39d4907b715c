use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use lesson_types::{ConceptId, StepIndex, ui::UiOptions};
use thiserror::Error;

use crate::highlight::HighlightTiming;

/// Environment override forcing ASCII glyphs.
pub const ASCII_ENV_VAR: &str = "LESSON_ASCII";

/// Raw `~/.lesson/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// start_step = 1
///
/// [diagram]
/// seed_node = "leadership"
/// stagger_ms = 120
/// highlight_ms = 450
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LessonConfig {
    pub app: Option<AppConfig>,
    pub diagram: Option<DiagramConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and connectors.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable connector highlight effects.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Step shown at startup. Out-of-range values fall back to step 1.
    pub start_step: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiagramConfig {
    /// Node selected once at startup. `"none"` disables the seed.
    pub seed_node: Option<SeedNode>,
    pub stagger_ms: Option<u64>,
    pub highlight_ms: Option<u64>,
}

/// What the diagram selects once at startup: a concept id, or `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SeedNode {
    #[serde(rename = "none")]
    Disabled,
    #[serde(untagged)]
    Node(ConceptId),
}

impl Default for SeedNode {
    fn default() -> Self {
        SeedNode::Node(ConceptId::Leadership)
    }
}

impl LessonConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        toml::from_str(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn start_step(&self) -> StepIndex {
        let Some(raw) = self.app.as_ref().and_then(|a| a.start_step) else {
            return StepIndex::FIRST;
        };
        StepIndex::new(raw).unwrap_or_else(|err| {
            tracing::warn!("Ignoring start_step: {err}");
            StepIndex::FIRST
        })
    }

    #[must_use]
    pub fn highlight_timing(&self) -> HighlightTiming {
        let diagram = self.diagram.as_ref();
        HighlightTiming {
            stagger: diagram
                .and_then(|d| d.stagger_ms)
                .map_or(HighlightTiming::DEFAULT_STAGGER, Duration::from_millis),
            hold: diagram
                .and_then(|d| d.highlight_ms)
                .map_or(HighlightTiming::DEFAULT_HOLD, Duration::from_millis),
        }
    }

    #[must_use]
    pub fn seed_node(&self) -> SeedNode {
        self.diagram
            .as_ref()
            .and_then(|d| d.seed_node)
            .unwrap_or_default()
    }
}

/// Resolve UI options from config, then apply environment overrides.
#[must_use]
pub fn resolve_ui_options(config: Option<&LessonConfig>) -> UiOptions {
    let mut options = config.map(LessonConfig::ui_options).unwrap_or_default();
    if env::var(ASCII_ENV_VAR).is_ok_and(|raw| is_truthy(&raw)) {
        options.ascii_only = true;
    }
    options
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lesson").join("config.toml"))
}
