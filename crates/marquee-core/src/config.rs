use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::length::Length;
use crate::slide::SlideItem;

/// Scroll direction of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content travels towards the left edge
    #[default]
    Left,
    /// Content travels towards the right edge
    Right,
}

impl Direction {
    pub fn from_to_right(to_right: bool) -> Self {
        if to_right {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn is_right(self) -> bool {
        self == Direction::Right
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Per-render slider properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Width applied to every slide, overriding the slide's own width
    #[serde(default)]
    pub width: Length,
    /// Seconds for one full traversal of `width * slide count`
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    #[serde(default)]
    pub direction: Direction,
    /// Pause while the pointer is over the viewport
    #[serde(default)]
    pub pause_on_hover: bool,
    /// Fade the left and right edges
    #[serde(default)]
    pub blur_borders: bool,
    /// Color the edges fade from
    #[serde(default = "default_blur_border_color")]
    pub blur_border_color: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: Length::default(),
            duration_secs: default_duration_secs(),
            direction: Direction::default(),
            pause_on_hover: false,
            blur_borders: false,
            blur_border_color: default_blur_border_color(),
        }
    }
}

impl SliderConfig {
    pub fn to_right(&self) -> bool {
        self.direction.is_right()
    }

    /// Reject values that would produce undefined loop geometry
    pub fn validate(&self) -> crate::Result<()> {
        self.duration()?;
        if !self.width.is_positive() {
            return Err(crate::Error::InvalidConfig(format!(
                "slide width must be positive, got {}",
                self.width
            )));
        }
        Ok(())
    }

    /// Loop duration; positive and representable as a [`Duration`]
    pub fn duration(&self) -> crate::Result<Duration> {
        match Duration::try_from_secs_f64(self.duration_secs) {
            Ok(duration) if !duration.is_zero() => Ok(duration),
            _ => Err(crate::Error::InvalidConfig(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            ))),
        }
    }

    /// Whether switching from `self` to `other` needs a fresh animation
    pub fn geometry_differs(&self, other: &SliderConfig) -> bool {
        self.width != other.width
            || self.duration_secs != other.duration_secs
            || self.direction != other.direction
    }
}

fn default_duration_secs() -> f64 {
    40.0
}

fn default_blur_border_color() -> String {
    "#fff".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            slider: SliderConfig::default(),
            ui: UiConfig::default(),
            slides: default_slides(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Redraw rate while the strip is moving
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixels covered by one terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f64,
    /// Font size used to resolve `em`/`rem` lengths
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Rows occupied by the strip
    #[serde(default = "default_slide_height")]
    pub slide_height: u16,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width_px(),
            font_size_px: default_font_size_px(),
            slide_height: default_slide_height(),
            theme: default_theme_name(),
        }
    }
}

/// A slide as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub text: String,
    /// Declared width; the slider width always wins when rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
}

impl SlideConfig {
    pub fn to_item(&self) -> SlideItem<String> {
        let item = SlideItem::new(self.text.clone());
        match self.width {
            Some(width) => item.with_width(width),
            None => item,
        }
    }
}

fn default_slides() -> Vec<SlideConfig> {
    ["Rust", "Ratatui", "Crossterm", "Serde", "Tokio"]
        .iter()
        .map(|text| SlideConfig {
            text: text.to_string(),
            width: None,
        })
        .collect()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width_px() -> f64 {
    8.0
}

fn default_font_size_px() -> f64 {
    16.0
}

fn default_slide_height() -> u16 {
    3
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path` or return defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.slider.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("marquee.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Configured slides as renderable items
    pub fn slide_items(&self) -> Vec<SlideItem<String>> {
        self.slides.iter().map(SlideConfig::to_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.width.to_string(), "200px");
        assert_eq!(config.duration_secs, 40.0);
        assert_eq!(config.direction, Direction::Left);
        assert!(!config.pause_on_hover);
        assert!(!config.blur_borders);
        assert_eq!(config.blur_border_color, "#fff");
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let mut config = SliderConfig::default();
        assert!(config.validate().is_ok());

        config.duration_secs = 0.0;
        assert!(config.validate().is_err());

        config.duration_secs = f64::NAN;
        assert!(config.validate().is_err());

        config.duration_secs = 1e20;
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidConfig(_))
        ));

        config.duration_secs = 10.0;
        config.width = Length::px(-5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duration_conversion() {
        let config = SliderConfig {
            duration_secs: 12.5,
            ..Default::default()
        };
        assert_eq!(config.duration().unwrap(), Duration::from_millis(12_500));

        let too_long = SliderConfig {
            duration_secs: 1e20,
            ..Default::default()
        };
        assert!(too_long.duration().is_err());

        let too_short = SliderConfig {
            duration_secs: 1e-12,
            ..Default::default()
        };
        assert!(too_short.duration().is_err());
    }

    #[test]
    fn test_geometry_differs_ignores_presentation() {
        let base = SliderConfig::default();
        let presentational = SliderConfig {
            pause_on_hover: true,
            blur_borders: true,
            blur_border_color: "#000".to_string(),
            ..base.clone()
        };
        assert!(!base.geometry_differs(&presentational));

        let reversed = SliderConfig {
            direction: Direction::Right,
            ..base.clone()
        };
        assert!(base.geometry_differs(&reversed));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AppConfig::from_toml(
            r##"
            [slider]
            width = "100px"
            direction = "right"
            blur_borders = true

            [[slides]]
            text = "alpha"

            [[slides]]
            text = "beta"
            width = "10ch"
            "##,
        )
        .unwrap();

        assert_eq!(config.slider.width, Length::px(100.0));
        assert!(config.slider.to_right());
        assert_eq!(config.slider.duration_secs, 40.0);
        assert_eq!(config.slider.blur_border_color, "#fff");
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[1].width, Some(Length::ch(10.0)));
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_invalid_duration_in_file() {
        let result = AppConfig::from_toml("[slider]\nduration_secs = -1.0\n");
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("marquee-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.slider.duration_secs = 12.5;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.slider, config.slider);
        assert_eq!(loaded.slides, config.slides);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/marquee.toml")).unwrap();
        assert_eq!(config.slides.len(), 5);
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = Path::new("/tmp/marquee");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/marquee"));
    }
}
