//! Golem configuration, loaded from a JSON5 file.

use std::{fs, io, path::Path};

use golem_utils::ResourceLocation;
use golem_utils::random::{TimeUtil, UniformInt};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/golem_config.json5");

/// Errors raised while loading a [`GolemConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The values parsed but are out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Tunable constants of the Enderite Golem.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GolemConfig {
    /// Maximum health.
    pub max_health: f64,
    /// Base walking speed.
    pub movement_speed: f64,
    /// Fraction of knockback ignored, 0 to 1.
    pub knockback_resistance: f64,
    /// Base melee damage.
    pub attack_damage: f64,
    /// Item that repairs the golem.
    pub repair_item: ResourceLocation,
    /// Health restored per repair item.
    pub repair_heal_amount: f32,
    /// Shortest anger duration in seconds.
    pub anger_min_seconds: i32,
    /// Longest anger duration in seconds.
    pub anger_max_seconds: i32,
    /// Length of the attack swing animation.
    pub attack_animation_ticks: i32,
    /// How long a flower is held out.
    pub offer_flower_ticks: i32,
}

impl Default for GolemConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            movement_speed: 0.25,
            knockback_resistance: 1.0,
            attack_damage: 15.0,
            repair_item: ResourceLocation::vanilla_static("iron_ingot"),
            repair_heal_amount: 25.0,
            anger_min_seconds: 20,
            anger_max_seconds: 39,
            attack_animation_ticks: 10,
            offer_flower_ticks: 400,
        }
    }
}

impl GolemConfig {
    /// Parses and validates a config from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: GolemConfig = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json5(&text)
    }

    /// Loads the config at `path`, writing the bundled default there first
    /// if the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default golem config to {}", path.display());
        Self::from_json5(DEFAULT_CONFIG)
    }

    /// Checks that every value is in a usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health.is_nan() || self.max_health <= 0.0 {
            return Err(ConfigError::Invalid("max_health must be positive"));
        }
        if !(0.0..=1.0).contains(&self.knockback_resistance) {
            return Err(ConfigError::Invalid(
                "knockback_resistance must be between 0 and 1",
            ));
        }
        if self.movement_speed.is_nan() || self.movement_speed < 0.0 {
            return Err(ConfigError::Invalid("movement_speed must not be negative"));
        }
        if !self.attack_damage.is_finite() {
            return Err(ConfigError::Invalid("attack_damage must be finite"));
        }
        if self.repair_heal_amount.is_nan() || self.repair_heal_amount <= 0.0 {
            return Err(ConfigError::Invalid("repair_heal_amount must be positive"));
        }
        if self.anger_min_seconds < 0 || self.anger_max_seconds < self.anger_min_seconds {
            return Err(ConfigError::Invalid(
                "anger range must satisfy 0 <= anger_min_seconds <= anger_max_seconds",
            ));
        }
        if self.anger_max_seconds > TimeUtil::MAX_SECONDS {
            return Err(ConfigError::Invalid(
                "anger_max_seconds is too large to count in ticks",
            ));
        }
        if self.attack_animation_ticks < 0 || self.offer_flower_ticks < 0 {
            return Err(ConfigError::Invalid("animation ticks must not be negative"));
        }
        Ok(())
    }

    /// The tick range persistent anger is drawn from.
    ///
    /// Unvalidated values are clamped into a non-empty, non-negative range.
    #[must_use]
    pub fn anger_time(&self) -> UniformInt {
        let min = self.anger_min_seconds.clamp(0, TimeUtil::MAX_SECONDS);
        let max = self.anger_max_seconds.clamp(min, TimeUtil::MAX_SECONDS);
        TimeUtil::range_of_seconds(min, max)
    }
}

#[cfg(test)]
mod tests {
    use golem_utils::random::TimeUtil;

    use super::{ConfigError, GolemConfig};

    #[test]
    fn test_bundled_config_matches_default() {
        let parsed = GolemConfig::from_json5(super::DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, GolemConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = GolemConfig::from_json5("{ attack_damage: 4.0 }").unwrap();
        assert!((parsed.attack_damage - 4.0).abs() < f64::EPSILON);
        assert_eq!(parsed.anger_min_seconds, 20);
    }

    #[test]
    fn test_rejects_inverted_anger_range() {
        let err = GolemConfig::from_json5("{ anger_min_seconds: 40, anger_max_seconds: 10 }")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_anger_time_overflowing_ticks() {
        let err = GolemConfig::from_json5("{ anger_max_seconds: 200000000 }").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let limit = format!("{{ anger_max_seconds: {} }}", TimeUtil::MAX_SECONDS);
        let config = GolemConfig::from_json5(&limit).unwrap();
        assert_eq!(
            config.anger_time().max_inclusive(),
            TimeUtil::MAX_SECONDS * 20
        );

        let unchecked = GolemConfig {
            anger_min_seconds: i32::MAX,
            anger_max_seconds: i32::MAX,
            ..GolemConfig::default()
        };
        let range = unchecked.anger_time();
        assert_eq!(range.min_inclusive(), TimeUtil::MAX_SECONDS * 20);
        assert_eq!(range.max_inclusive(), TimeUtil::MAX_SECONDS * 20);
    }

    #[test]
    fn test_rejects_bad_repair_item() {
        let err = GolemConfig::from_json5("{ repair_item: \"Not A Key\" }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_anger_time_in_ticks() {
        let range = GolemConfig::default().anger_time();
        assert_eq!(range.min_inclusive(), 400);
        assert_eq!(range.max_inclusive(), 780);

        let inverted = GolemConfig {
            anger_min_seconds: 5,
            anger_max_seconds: -3,
            ..GolemConfig::default()
        };
        assert_eq!(inverted.anger_time().min_inclusive(), 100);
        assert_eq!(inverted.anger_time().max_inclusive(), 100);
    }
}
