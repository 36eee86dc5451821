//! Splitter configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::{self, VarError};

use crate::consts::{MIN_DRAW_SIZE, MIN_PIECE_SIZE, Z_INDEX_MARGIN};
use crate::split::SplitReach;

pub const ENV_MIN_DRAW_SIZE: &str = "PILLSPLIT_MIN_DRAW_SIZE";
pub const ENV_MIN_PIECE_SIZE: &str = "PILLSPLIT_MIN_PIECE_SIZE";
pub const ENV_Z_MARGIN: &str = "PILLSPLIT_Z_MARGIN";
pub const ENV_SHOW_GUIDES: &str = "PILLSPLIT_SHOW_GUIDES";
pub const ENV_SPLIT_REACH: &str = "PILLSPLIT_SPLIT_REACH";

/// Error returned when a configuration value is malformed or inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds text that does not parse for its field.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    /// A size limit is zero, negative, or not finite.
    #[error("{field} must be a positive finite size, got {value}")]
    BadSize { field: &'static str, value: f64 },
    /// Split pieces may not be larger than the smallest drawable pill.
    #[error("min_piece_size ({piece}) exceeds min_draw_size ({draw})")]
    PieceExceedsDraw { piece: f64, draw: f64 },
    /// The post-split z-index margin is negative.
    #[error("z_index_margin must be non-negative, got {0}")]
    NegativeMargin(i64),
}

/// Tunable limits and session defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterConfig {
    /// Minimum width and height of a drawn pill.
    pub min_draw_size: f64,
    /// Minimum width and height of a split piece.
    pub min_piece_size: f64,
    /// Z-index headroom skipped after each split.
    pub z_index_margin: i64,
    /// Whether guide lines start out visible.
    pub show_guides: bool,
    /// Which pills the crosshair reaches.
    pub split_reach: SplitReach,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            min_draw_size: MIN_DRAW_SIZE,
            min_piece_size: MIN_PIECE_SIZE,
            z_index_margin: Z_INDEX_MARGIN,
            show_guides: true,
            split_reach: SplitReach::Local,
        }
    }
}

impl SplitterConfig {
    /// Build config from environment variables.
    ///
    /// All optional; defaults come from [`crate::consts`]:
    /// - `PILLSPLIT_MIN_DRAW_SIZE`: default 40
    /// - `PILLSPLIT_MIN_PIECE_SIZE`: default 20
    /// - `PILLSPLIT_Z_MARGIN`: default 10
    /// - `PILLSPLIT_SHOW_GUIDES`: `true` (default) or `false`
    /// - `PILLSPLIT_SPLIT_REACH`: `local` (default) or `canvas`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is not unicode, does not parse,
    /// or the resulting limits are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build config from an arbitrary key lookup with the signature of
    /// [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Same as [`SplitterConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();
        let cfg = Self {
            min_draw_size: parse_var(&lookup, ENV_MIN_DRAW_SIZE, defaults.min_draw_size, str::parse)?,
            min_piece_size: parse_var(&lookup, ENV_MIN_PIECE_SIZE, defaults.min_piece_size, str::parse)?,
            z_index_margin: parse_var(&lookup, ENV_Z_MARGIN, defaults.z_index_margin, str::parse)?,
            show_guides: parse_var(&lookup, ENV_SHOW_GUIDES, defaults.show_guides, parse_bool)?,
            split_reach: parse_var(&lookup, ENV_SPLIT_REACH, defaults.split_reach, str::parse)?,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the limits are usable together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("min_draw_size", self.min_draw_size)?;
        check_size("min_piece_size", self.min_piece_size)?;
        if self.min_piece_size > self.min_draw_size {
            return Err(ConfigError::PieceExceedsDraw { piece: self.min_piece_size, draw: self.min_draw_size });
        }
        if self.z_index_margin < 0 {
            return Err(ConfigError::NegativeMargin(self.z_index_margin));
        }
        Ok(())
    }
}

fn parse_var<T, E, F, P>(lookup: &F, var: &'static str, default: T, parse: P) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    P: Fn(&str) -> Result<T, E>,
{
    let raw = match lookup(var) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return Ok(default),
        Err(VarError::NotUnicode(os)) => {
            return Err(ConfigError::InvalidValue { var, value: os.to_string_lossy().into_owned() });
        }
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    parse(trimmed).map_err(|_| ConfigError::InvalidValue { var, value: raw.clone() })
}

fn parse_bool(raw: &str) -> Result<bool, ()> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(()),
    }
}

fn check_size(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::BadSize { field, value })
    }
}
