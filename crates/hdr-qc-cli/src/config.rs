//! Configuration file support for hdr-qc.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/hdr-qc/config.toml` (lowest priority)
//! - Project-local: `.hdr-qc.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// White balance check settings.
    pub white_balance: WhiteBalanceConfig,
    /// Highlight clipping and control settings.
    pub highlight: HighlightConfig,
    /// Contrast settings (shared by check and grader).
    pub contrast: ContrastConfig,
    /// Shadow detail grader settings.
    pub shadow: ShadowConfig,
    /// Brightness balance grader settings.
    pub brightness: BrightnessConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
    /// Aggregation policy: "penalty" or "tally".
    pub policy: Option<String>,
    /// Ignore highlight clipping from ceiling lights by default.
    pub ignore_lamps: Option<bool>,
}

/// White balance check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct WhiteBalanceConfig {
    /// Maximum channel-mean deviation.
    pub max_deviation: Option<f64>,
}

/// Highlight configuration, covering both the binary clipping check and
/// the categorical control grader.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Luminance clip level (0-255).
    pub clip_level: Option<u8>,
    /// Maximum tolerated clipping percentage (0-100).
    pub max_clip_percent: Option<f64>,
    /// Near-white channel floor (0-255).
    pub channel_floor: Option<u8>,
    /// Near-white ratio above which the grade is Poor (0-1).
    pub poor_ratio: Option<f64>,
    /// Near-white ratio below which the grade is Excellent (0-1).
    pub excellent_ratio: Option<f64>,
}

/// Contrast configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Minimum luminance standard deviation.
    pub min_std_dev: Option<f64>,
}

/// Shadow detail grader configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Deep-shadow luminance level (0-255).
    pub shadow_level: Option<u8>,
    /// Deep-shadow fraction above which the grade is Poor (0-1).
    pub poor_fraction: Option<f64>,
    /// Deep-shadow fraction below which the grade is Excellent (0-1).
    pub excellent_fraction: Option<f64>,
}

/// Brightness balance grader configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BrightnessConfig {
    /// Mean luminance lower bound.
    pub min_mean: Option<f64>,
    /// Mean luminance upper bound.
    pub max_mean: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text", "jsonl" or "json".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/hdr-qc/config.toml`
    /// 2. Project-local: `.hdr-qc.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref p) = self.general.policy {
            if p != "penalty" && p != "tally" {
                return Err(format!(
                    "general.policy must be 'penalty' or 'tally', got '{p}'"
                ));
            }
        }

        if let Some(d) = self.white_balance.max_deviation {
            if d < 0.0 {
                return Err(format!(
                    "white_balance.max_deviation must be non-negative, got {d}"
                ));
            }
        }

        if let Some(p) = self.highlight.max_clip_percent {
            if !(0.0..=100.0).contains(&p) {
                return Err(format!(
                    "highlight.max_clip_percent must be 0.0-100.0, got {p}"
                ));
            }
        }
        for (name, value) in [
            ("highlight.poor_ratio", self.highlight.poor_ratio),
            ("highlight.excellent_ratio", self.highlight.excellent_ratio),
            ("shadow.poor_fraction", self.shadow.poor_fraction),
            ("shadow.excellent_fraction", self.shadow.excellent_fraction),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(format!("{name} must be 0.0-1.0, got {v}"));
                }
            }
        }

        if let Some(s) = self.contrast.min_std_dev {
            if s < 0.0 {
                return Err(format!("contrast.min_std_dev must be non-negative, got {s}"));
            }
        }

        if let (Some(min), Some(max)) = (self.brightness.min_mean, self.brightness.max_mean) {
            if min > max {
                return Err(format!(
                    "brightness.min_mean ({min}) must not exceed brightness.max_mean ({max})"
                ));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "text" && f != "jsonl" && f != "json" {
                return Err(format!(
                    "output.format must be 'text', 'jsonl' or 'json', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);
        self.general.policy = other.general.policy.or_else(|| self.general.policy.take());
        self.general.ignore_lamps = other.general.ignore_lamps.or(self.general.ignore_lamps);

        // White balance
        self.white_balance.max_deviation = other
            .white_balance
            .max_deviation
            .or(self.white_balance.max_deviation);

        // Highlight
        self.highlight.clip_level = other.highlight.clip_level.or(self.highlight.clip_level);
        self.highlight.max_clip_percent = other
            .highlight
            .max_clip_percent
            .or(self.highlight.max_clip_percent);
        self.highlight.channel_floor = other
            .highlight
            .channel_floor
            .or(self.highlight.channel_floor);
        self.highlight.poor_ratio = other.highlight.poor_ratio.or(self.highlight.poor_ratio);
        self.highlight.excellent_ratio = other
            .highlight
            .excellent_ratio
            .or(self.highlight.excellent_ratio);

        // Contrast
        self.contrast.min_std_dev = other.contrast.min_std_dev.or(self.contrast.min_std_dev);

        // Shadow
        self.shadow.shadow_level = other.shadow.shadow_level.or(self.shadow.shadow_level);
        self.shadow.poor_fraction = other.shadow.poor_fraction.or(self.shadow.poor_fraction);
        self.shadow.excellent_fraction = other
            .shadow
            .excellent_fraction
            .or(self.shadow.excellent_fraction);

        // Brightness
        self.brightness.min_mean = other.brightness.min_mean.or(self.brightness.min_mean);
        self.brightness.max_mean = other.brightness.max_mean.or(self.brightness.max_mean);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hdr-qc").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.hdr-qc.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".hdr-qc.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = AppConfig::default();
        assert!(config.general.policy.is_none());
        assert!(config.white_balance.max_deviation.is_none());
        assert!(config.contrast.min_std_dev.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.general.recursive.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[general]
recursive = true
policy = "tally"
ignore_lamps = true

[white_balance]
max_deviation = 50.0

[highlight]
clip_level = 245
max_clip_percent = 2.5
channel_floor = 240
poor_ratio = 0.05
excellent_ratio = 0.005

[contrast]
min_std_dev = 28.0

[shadow]
shadow_level = 30
poor_fraction = 0.1
excellent_fraction = 0.02

[brightness]
min_mean = 80.0
max_mean = 200.0

[output]
format = "jsonl"
pretty = true
progress = false
"#;
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(config.general.policy.as_deref(), Some("tally"));
        assert_eq!(config.general.ignore_lamps, Some(true));
        assert_eq!(config.white_balance.max_deviation, Some(50.0));
        assert_eq!(config.highlight.clip_level, Some(245));
        assert_eq!(config.highlight.max_clip_percent, Some(2.5));
        assert_eq!(config.contrast.min_std_dev, Some(28.0));
        assert_eq!(config.shadow.shadow_level, Some(30));
        assert_eq!(config.brightness.max_mean, Some(200.0));
        assert_eq!(config.output.format.as_deref(), Some("jsonl"));
        assert_eq!(config.output.pretty, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_leaves_rest_unset() {
        let toml = r"
[contrast]
min_std_dev = 25.0
";
        let config: AppConfig = toml::from_str(toml).expect("parse partial config");

        assert_eq!(config.contrast.min_std_dev, Some(25.0));
        assert!(config.white_balance.max_deviation.is_none());
        assert!(config.highlight.max_clip_percent.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_merge_override_wins() {
        let mut base: AppConfig = toml::from_str(
            r#"
[general]
policy = "penalty"

[contrast]
min_std_dev = 30.0
"#,
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r#"
[general]
policy = "tally"

[white_balance]
max_deviation = 45.0
"#,
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.general.policy.as_deref(), Some("tally"));
        // Preserved from base
        assert_eq!(base.contrast.min_std_dev, Some(30.0));
        // Added from override
        assert_eq!(base.white_balance.max_deviation, Some(45.0));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            r"
[brightness]
min_mean = 70.0
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());
        assert_eq!(base.brightness.min_mean, Some(70.0));
    }

    #[test]
    fn test_invalid_toml_syntax_is_error() {
        let toml = r"
[highlight
max_clip_percent = 2.0
";
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_field_type_is_error() {
        let toml = r#"
[contrast]
min_std_dev = "flat"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_policy_name() {
        let mut config = AppConfig::default();
        config.general.policy = Some("scorecard".into());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("general.policy"));
    }

    #[test]
    fn test_validate_clip_percent_range() {
        let mut config = AppConfig::default();
        config.highlight.max_clip_percent = Some(150.0);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("highlight.max_clip_percent"));
    }

    #[test]
    fn test_validate_ratio_ranges() {
        let mut config = AppConfig::default();
        config.shadow.poor_fraction = Some(1.5);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("shadow.poor_fraction"));
    }

    #[test]
    fn test_validate_brightness_bounds_ordering() {
        let mut config = AppConfig::default();
        config.brightness.min_mean = Some(210.0);
        config.brightness.max_mean = Some(200.0);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("brightness.min_mean"));
    }

    #[test]
    fn test_validate_output_format() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".into());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_find_config_in_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".hdr-qc.toml"), "[general]\n").unwrap();

        let found = find_config_in_parents(&nested).expect("config found");
        assert_eq!(found, dir.path().join(".hdr-qc.toml"));
    }
}
