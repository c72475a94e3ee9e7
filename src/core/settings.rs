//! Display settings: font size, font weight, and icon color used when rendering replies.
//!
//! Stored as JSON in the config directory (`settings.json`). Rendering never fails because
//! of settings: a missing or broken file falls back to defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{app, paths};

/// Errors when parsing or persisting settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid icon color '{0}': expected #RRGGBB")]
    InvalidColor(String),
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to access settings: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum FontSize {
    #[serde(rename = "text-sm")]
    #[value(name = "sm")]
    Small,
    #[default]
    #[serde(rename = "text-base")]
    #[value(name = "base")]
    Base,
    #[serde(rename = "text-lg")]
    #[value(name = "lg")]
    Large,
    #[serde(rename = "text-xl")]
    #[value(name = "xl")]
    ExtraLarge,
}

impl FontSize {
    /// Class token used by HTML output.
    pub fn class(self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Base => "text-base",
            FontSize::Large => "text-lg",
            FontSize::ExtraLarge => "text-xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum FontWeight {
    #[default]
    #[serde(rename = "font-normal")]
    #[value(name = "normal")]
    Normal,
    #[serde(rename = "font-medium")]
    #[value(name = "medium")]
    Medium,
    #[serde(rename = "font-semibold")]
    #[value(name = "semibold")]
    Semibold,
    #[serde(rename = "font-bold")]
    #[value(name = "bold")]
    Bold,
}

impl FontWeight {
    pub fn class(self) -> &'static str {
        match self {
            FontWeight::Normal => "font-normal",
            FontWeight::Medium => "font-medium",
            FontWeight::Semibold => "font-semibold",
            FontWeight::Bold => "font-bold",
        }
    }

    /// Terminals only have one bold level; semibold and bold both map to it.
    pub fn is_bold(self) -> bool {
        matches!(self, FontWeight::Semibold | FontWeight::Bold)
    }
}

/// RGB icon color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for IconColor {
    fn default() -> Self {
        // #0F4C81
        Self {
            r: 0x0f,
            g: 0x4c,
            b: 0x81,
        }
    }
}

impl FromStr for IconColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SettingsError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for IconColor {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IconColor> for String {
    fn from(color: IconColor) -> Self {
        color.to_string()
    }
}

/// Display parameters applied uniformly to a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub icon_color: IconColor,
}

/// Per-invocation overrides (CLI flags); `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOverrides {
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub icon_color: Option<IconColor>,
}

impl RenderOverrides {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.font_weight.is_none() && self.icon_color.is_none()
    }
}

impl RenderConfig {
    pub fn with_overrides(self, overrides: &RenderOverrides) -> Self {
        Self {
            font_size: overrides.font_size.unwrap_or(self.font_size),
            font_weight: overrides.font_weight.unwrap_or(self.font_weight),
            icon_color: overrides.icon_color.unwrap_or(self.icon_color),
        }
    }
}

/// Path to the settings file in the config directory.
pub fn settings_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(app::SETTINGS_FILE))
}

/// Read settings from `path`. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<RenderConfig, SettingsError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RenderConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write settings to `path`, creating parent directories.
pub fn save_to(path: &Path, config: &RenderConfig) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

/// Load stored settings, falling back to defaults (with a warning) when unreadable.
pub fn load() -> RenderConfig {
    let Some(path) = settings_path() else {
        return RenderConfig::default();
    };
    load_from(&path).unwrap_or_else(|e| {
        log::warn!("Ignoring {}: {}", path.display(), e);
        RenderConfig::default()
    })
}

/// Persist settings to the config directory.
pub fn save(config: &RenderConfig) -> Result<PathBuf, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_to(&path, config)?;
    log::info!("Saved settings to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_color_parses_hex() {
        let color: IconColor = "#ff8000".parse().expect("valid color");
        assert_eq!(
            color,
            IconColor {
                r: 255,
                g: 128,
                b: 0
            }
        );
        assert_eq!(color.to_string(), "#FF8000");
    }

    #[test]
    fn icon_color_rejects_malformed_values() {
        for bad in ["ff8000", "#ff80", "#gg8000", "#ff80001", "", "#"] {
            assert!(
                matches!(bad.parse::<IconColor>(), Err(SettingsError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_config_serializes_to_class_tokens() {
        let json = serde_json::to_value(RenderConfig::default()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "font_size": "text-base",
                "font_weight": "font-normal",
                "icon_color": "#0F4C81",
            })
        );
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_fields() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"font_weight": "font-bold"}"#).expect("parse");
        assert_eq!(config.font_weight, FontWeight::Bold);
        assert_eq!(config.font_size, FontSize::Base);
        assert_eq!(config.icon_color, IconColor::default());
    }

    #[test]
    fn invalid_color_in_file_is_an_error() {
        let result = serde_json::from_str::<RenderConfig>(r#"{"icon_color": "blue"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config = load_from(&dir.path().join("settings.json")).expect("load");
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");
        let config = RenderConfig {
            font_size: FontSize::Large,
            font_weight: FontWeight::Semibold,
            icon_color: "#C1272D".parse().expect("valid color"),
        };
        save_to(&path, &config).expect("save");
        assert_eq!(load_from(&path).expect("load"), config);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").expect("write");
        assert!(matches!(load_from(&path), Err(SettingsError::Json(_))));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = RenderOverrides {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        };
        let config = RenderConfig::default().with_overrides(&overrides);
        assert_eq!(config.font_weight, FontWeight::Bold);
        assert_eq!(config.font_size, FontSize::Base);
        assert!(config.font_weight.is_bold());
        assert!(RenderOverrides::default().is_empty());
    }
}
