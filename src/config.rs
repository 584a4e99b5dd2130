// SPDX-License-Identifier: MIT
//
// chromo.toml: display and accessibility defaults for the command line.
//
// Precedence, lowest first: built-in defaults, the config file, CHROMO_*
// environment variables, command-line flags. The file is looked up at
// `--config`, then `CHROMO_CONFIG`, then `<config dir>/chromo/config.toml`.
// A missing file at the default location is not an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chromo_color::{ColorMode, Level};
use chromo_theme::contrast::{DEFAULT_PRECISION, IterativeOptions, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub accessibility: AccessibilityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `auto`, `truecolor`, `ansi256` or `plain`.
    pub color_mode: String,
    pub max_terminal_colors: usize,
    pub swatch_maxn: usize,
    pub svg_width: u32,
    pub svg_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_mode: "auto".to_string(),
            max_terminal_colors: chromo_map::gradient::TERMINAL_MAX_CHARS,
            swatch_maxn: chromo_map::swatch::DEFAULT_MAXN,
            svg_width: chromo_map::render::SVG_SIZE.0,
            svg_height: chromo_map::render::SVG_SIZE.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// `AA` or `AAA`.
    pub level: String,
    pub step_size: f64,
    pub max_attempts: usize,
    pub precision: f64,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        let iterative = IterativeOptions::default();
        Self {
            level: Level::default().name().to_string(),
            step_size: iterative.step_size,
            max_attempts: MAX_ATTEMPTS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    /// Load with an arbitrary variable lookup.
    pub fn load_with(
        explicit: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let named =
            explicit.map(Path::to_path_buf).or_else(|| lookup("CHROMO_CONFIG").map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::read(&path)?,
            None => match default_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };

        if let Some(level) = lookup("CHROMO_LEVEL") {
            config.accessibility.level = level;
        }
        if let Some(mode) = lookup("CHROMO_COLOR_MODE") {
            config.display.color_mode = mode;
        }
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The terminal color mode; `auto` detects from the environment.
    pub fn color_mode(&self) -> Result<ColorMode> {
        match self.display.color_mode.trim() {
            "" | "auto" => Ok(ColorMode::detect()),
            other => other.parse().with_context(|| format!("invalid display.color_mode '{other}'")),
        }
    }

    pub fn level(&self) -> Result<Level> {
        self.accessibility.level.parse().context("invalid accessibility.level")
    }

    pub fn iterative_options(&self) -> Result<IterativeOptions> {
        let a = &self.accessibility;
        if !(a.step_size > 0.0 && a.step_size < 1.0) {
            bail!("accessibility.step_size must be in (0, 1), got {}", a.step_size);
        }
        Ok(IterativeOptions { step_size: a.step_size, max_attempts: a.max_attempts })
    }
}

/// `<config dir>/chromo/config.toml`, when the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chromo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chromo-config-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_library_constants() {
        let config = Config::default();
        assert_eq!(config.display.color_mode, "auto");
        assert_eq!(config.display.max_terminal_colors, 64);
        assert_eq!(config.display.swatch_maxn, 32);
        assert_eq!((config.display.svg_width, config.display.svg_height), (500, 50));
        assert_eq!(config.accessibility.level, "AA");
        assert_eq!(config.accessibility.max_attempts, 50);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial", "[accessibility]\nlevel = \"AAA\"\n");
        let config = Config::load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(config.level().unwrap(), Level::Aaa);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn env_overrides_file() {
        let path = temp_file("env", "[display]\ncolor_mode = \"ansi256\"\n");
        let config =
            Config::load_with(Some(&path), env(&[("CHROMO_COLOR_MODE", "plain")])).unwrap();
        assert_eq!(config.color_mode().unwrap(), ColorMode::Plain);
    }

    #[test]
    fn config_path_from_env() {
        let path = temp_file("from-env", "[display]\nswatch_maxn = 8\n");
        let path_str = path.to_string_lossy().to_string();
        let config = Config::load_with(None, env(&[("CHROMO_CONFIG", &path_str)])).unwrap();
        assert_eq!(config.display.swatch_maxn, 8);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("chromo-config-does-not-exist.toml");
        assert!(Config::load_with(Some(&path), env(&[])).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("bad", "[display\n");
        let err = Config::load_with(Some(&path), env(&[])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"), "{err:#}");
    }

    #[test]
    fn bad_values_surface_on_access() {
        let mut config = Config::default();
        config.accessibility.level = "AAAA".to_string();
        assert!(config.level().is_err());
        config.accessibility.step_size = 1.5;
        assert!(config.iterative_options().is_err());
        config.display.color_mode = "sixteen".to_string();
        assert!(config.color_mode().is_err());
    }

    #[test]
    fn defaults_roundtrip_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }
}
