//! Configuration for the folio page.
//!
//! Settings live in `config.toml` under the platform config directory.
//! Every field has a default, so a partial file (or no file) is fine.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::{BackgroundSettings, CellMetrics};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

/// Upper bound on the particle count.
pub const MAX_PARTICLES: usize = 2000;
/// Upper bound on the noise tile side.
pub const MAX_PATTERN_SIZE: usize = 1024;

/// Errors produced while loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Site identity and page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title, shown as the terminal title.
    pub title: String,
    pub description: String,
    /// Name shown as the header brand link.
    pub owner: String,
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Mustafa Enes Öztürk".to_string(),
            description: "Mustafa Enes Öztürk".to_string(),
            owner: "mustafa enes öztürk".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Terminal geometry and frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell: CellMetrics,
    /// Target time between frames.
    pub frame_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell: CellMetrics::default(),
            frame_interval_ms: 16,
        }
    }
}

/// Optional page text overrides. `None` keeps the built-in text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub about: Option<String>,
    pub projects: Option<String>,
    pub writing: Option<String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub display: DisplayConfig,
    pub background: BackgroundSettings,
    pub pages: PagesConfig,
}

impl Config {
    /// Default location of the config file, if a home directory is known.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write this config as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Reject values that would break the animation math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let particles = &self.background.particles;
        let noise = &self.background.noise;
        let grid = &self.background.grid;
        let cell = &self.display.cell;

        ensure(
            particles.ease > 0.0,
            "background.particles.ease",
            "must be greater than 0",
        )?;
        ensure(
            particles.staticity > 0.0,
            "background.particles.staticity",
            "must be greater than 0",
        )?;
        ensure(
            particles.quantity <= MAX_PARTICLES,
            "background.particles.quantity",
            format!("must be at most {MAX_PARTICLES}"),
        )?;
        ensure(
            particles.size >= 0.0,
            "background.particles.size",
            "must not be negative",
        )?;
        ensure(
            noise.refresh_interval > 0,
            "background.noise.refresh_interval",
            "must be at least 1",
        )?;
        ensure(
            noise.pattern_size > 0 && noise.pattern_size <= MAX_PATTERN_SIZE,
            "background.noise.pattern_size",
            format!("must be between 1 and {MAX_PATTERN_SIZE}"),
        )?;
        ensure(
            noise.scale_x > 0.0 && noise.scale_y > 0.0,
            "background.noise.scale",
            "must be greater than 0",
        )?;
        ensure(
            (0.0..=1.0).contains(&grid.opacity),
            "background.grid.opacity",
            "must be between 0 and 1",
        )?;
        ensure(
            grid.size_px >= 0.0,
            "background.grid.size_px",
            "must not be negative",
        )?;
        ensure(
            cell.width_px > 0.0 && cell.height_px > 0.0,
            "display.cell",
            "cell size must be greater than 0",
        )?;
        ensure(
            self.display.frame_interval_ms > 0,
            "display.frame_interval_ms",
            "must be at least 1",
        )
    }
}

fn ensure(
    condition: bool,
    field: &'static str,
    reason: impl Into<String>,
) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Rgb;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r##"
[background.particles]
quantity = 300
color = "#00ff00"

[pages]
about = "hello"
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.background.particles.quantity, 300);
        assert_eq!(config.background.particles.color, Rgb::new(0, 255, 0));
        assert_eq!(config.background.particles.ease, 80.0);
        assert_eq!(config.background.noise.pattern_size, 75);
        assert_eq!(config.pages.about.as_deref(), Some("hello"));
        assert_eq!(config.site.owner, "mustafa enes öztürk");
    }

    #[test]
    fn test_bad_colour_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[background.grid]\ncolor = \"#12345\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_zero_ease() {
        let mut config = Config::default();
        config.background.particles.ease = 0.0;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => {
                assert_eq!(field, "background.particles.ease")
            }
            other => panic!("expected invalid ease, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_zero_refresh_interval() {
        let mut config = Config::default();
        config.background.noise.refresh_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_opacity_out_of_range() {
        let mut config = Config::default();
        config.background.grid.opacity = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_each_rule_names_its_field() {
        let cases: [(&str, fn(&mut Config)); 14] = [
            ("background.particles.ease", |c| c.background.particles.ease = -1.0),
            ("background.particles.staticity", |c| {
                c.background.particles.staticity = 0.0
            }),
            ("background.particles.quantity", |c| {
                c.background.particles.quantity = MAX_PARTICLES + 1
            }),
            ("background.particles.size", |c| c.background.particles.size = -0.5),
            ("background.noise.refresh_interval", |c| {
                c.background.noise.refresh_interval = 0
            }),
            ("background.noise.pattern_size", |c| {
                c.background.noise.pattern_size = 0
            }),
            ("background.noise.pattern_size", |c| {
                c.background.noise.pattern_size = MAX_PATTERN_SIZE + 1
            }),
            ("background.noise.scale", |c| c.background.noise.scale_x = 0.0),
            ("background.noise.scale", |c| c.background.noise.scale_y = -1.0),
            ("background.grid.opacity", |c| c.background.grid.opacity = -0.1),
            ("background.grid.size_px", |c| c.background.grid.size_px = -40.0),
            ("display.cell", |c| c.display.cell.width_px = 0.0),
            ("display.cell", |c| c.display.cell.height_px = 0.0),
            ("display.frame_interval_ms", |c| c.display.frame_interval_ms = 0),
        ];

        for (expected, break_it) in cases {
            let mut config = Config::default();
            break_it(&mut config);
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid `{expected}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_limits_are_inclusive() {
        let mut config = Config::default();
        config.background.particles.quantity = MAX_PARTICLES;
        config.background.noise.pattern_size = MAX_PATTERN_SIZE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = Config::default();
        config.background.grid.size_px = 20.0;
        config.pages.writing = Some("soon".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
