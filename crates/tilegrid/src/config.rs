#![forbid(unsafe_code)]

//! Board configuration.
//!
//! Values come from defaults, a JSON options object supplied by the host, or
//! environment variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `TILEGRID_TILE_SIZE` | `grid.size` | 100 |
//! | `TILEGRID_GAP` | `grid.gap` | 12 |
//! | `TILEGRID_DRAG_THRESHOLD` | `drag.threshold` | 3 |
//! | `TILEGRID_STRICT_POINTER` | `drag.strict_pointer_match` | true |
//!
//! Environment parsing never fails: a malformed or out-of-range value keeps
//! the default and is reported in [`ConfigParse::errors`].

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tilegrid_drag::{DragConfig, DragError};
use tilegrid_layout::GridParams;

pub const ENV_TILE_SIZE: &str = "TILEGRID_TILE_SIZE";
pub const ENV_GAP: &str = "TILEGRID_GAP";
pub const ENV_DRAG_THRESHOLD: &str = "TILEGRID_DRAG_THRESHOLD";
pub const ENV_STRICT_POINTER: &str = "TILEGRID_STRICT_POINTER";

/// Everything a [`crate::TileBoard`] needs besides the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGridConfig {
    pub grid: GridParams,
    pub drag: DragConfig,
}

/// Environment parse result with diagnostics.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: TileGridConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<DragError> for ConfigError {
    fn from(err: DragError) -> Self {
        match err {
            DragError::InvalidThreshold { threshold } => {
                Self::new("drag.threshold", threshold.to_string(), err.to_string())
            }
        }
    }
}

impl TileGridConfig {
    /// Parse a JSON options object. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup.
    #[must_use]
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_TILE_SIZE) {
            match parse_f64(&value).filter(|v| size_ok(*v)) {
                Some(parsed) => config.grid.size = parsed,
                None => errors.push(ConfigError::new(
                    "grid.size",
                    value,
                    "expected finite number > 0",
                )),
            }
        }

        if let Some(value) = get(ENV_GAP) {
            match parse_f64(&value).filter(|v| non_negative(*v)) {
                Some(parsed) => config.grid.gap = parsed,
                None => errors.push(ConfigError::new(
                    "grid.gap",
                    value,
                    "expected finite number >= 0",
                )),
            }
        }

        if let Some(value) = get(ENV_DRAG_THRESHOLD) {
            match parse_f64(&value).filter(|v| non_negative(*v)) {
                Some(parsed) => config.drag.threshold = parsed,
                None => errors.push(ConfigError::new(
                    "drag.threshold",
                    value,
                    "expected finite number >= 0",
                )),
            }
        }

        if let Some(value) = get(ENV_STRICT_POINTER) {
            match parse_bool(&value) {
                Some(parsed) => config.drag.strict_pointer_match = parsed,
                None => errors.push(ConfigError::new(
                    "drag.strict_pointer_match",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        ConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if !size_ok(self.grid.size) {
            errors.push(ConfigError::new(
                "grid.size",
                self.grid.size.to_string(),
                "tile size must be finite and > 0",
            ));
        }
        if !non_negative(self.grid.gap) {
            errors.push(ConfigError::new(
                "grid.gap",
                self.grid.gap.to_string(),
                "gap must be finite and >= 0",
            ));
        }
        if let Err(err) = self.drag.validate() {
            errors.push(err.into());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[inline]
fn size_ok(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[inline]
fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[inline]
fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_grid_constants() {
        let config = TileGridConfig::default();
        assert_eq!(config.grid, GridParams::new(100.0, 12.0));
        assert_eq!(config.drag.threshold, 3.0);
        assert!(config.drag.strict_pointer_match);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_apply() {
        let parse = TileGridConfig::from_env_with(lookup(&[
            (ENV_TILE_SIZE, "80"),
            (ENV_GAP, " 8 "),
            (ENV_DRAG_THRESHOLD, "0"),
            (ENV_STRICT_POINTER, "off"),
        ]));
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
        assert_eq!(parse.config.grid, GridParams::new(80.0, 8.0));
        assert_eq!(parse.config.drag.threshold, 0.0);
        assert!(!parse.config.drag.strict_pointer_match);
    }

    #[test]
    fn bad_env_values_keep_defaults() {
        let parse = TileGridConfig::from_env_with(lookup(&[
            (ENV_TILE_SIZE, "0"),
            (ENV_GAP, "wide"),
            (ENV_DRAG_THRESHOLD, "-1"),
            (ENV_STRICT_POINTER, "maybe"),
        ]));
        assert_eq!(parse.config, TileGridConfig::default());
        let fields: Vec<_> = parse.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "grid.size",
                "grid.gap",
                "drag.threshold",
                "drag.strict_pointer_match"
            ]
        );
        assert_eq!(
            parse.errors[1].to_string(),
            "grid.gap=wide (expected finite number >= 0)"
        );
    }

    #[test]
    fn validate_reports_every_violation() {
        let mut config = TileGridConfig::default();
        config.grid.size = f64::NAN;
        config.grid.gap = -1.0;
        config.drag.threshold = f64::INFINITY;
        let errors = config.validate().expect_err("three violations");
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["grid.size", "grid.gap", "drag.threshold"]);
    }

    #[test]
    fn json_options_fill_missing_fields() {
        let config =
            TileGridConfig::from_json_str(r#"{"grid":{"gap":4.0},"drag":{"strict_pointer_match":false}}"#)
                .expect("valid options");
        assert_eq!(config.grid, GridParams::new(100.0, 4.0));
        assert_eq!(config.drag.threshold, 3.0);
        assert!(!config.drag.strict_pointer_match);

        assert_eq!(
            TileGridConfig::from_json_str("{}").expect("empty object"),
            TileGridConfig::default()
        );
        assert!(TileGridConfig::from_json_str(r#"{"grid":{"size":"big"}}"#).is_err());
    }
}
