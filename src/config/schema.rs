use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::ConfigError;
use crate::core::context::EnhanceOptions;
use crate::core::quality::DEFAULT_MAX_SUGGESTIONS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where this config was read from; not persisted.
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub context: ContextConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,
}

// ── Logging ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.level.trim())
            .map_err(|_| ConfigError::Validation(format!("unknown log level: {}", self.level)))
    }
}

// ── Context enhancement defaults ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default = "default_true")]
    pub include_atmosphere: bool,
    #[serde(default = "default_true")]
    pub include_lighting: bool,
    #[serde(default)]
    pub include_activity: bool,
    #[serde(default = "default_max_additions")]
    pub max_additions: usize,
}

fn default_true() -> bool {
    true
}
fn default_max_additions() -> usize {
    EnhanceOptions::default().max_additions
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            include_atmosphere: default_true(),
            include_lighting: default_true(),
            include_activity: false,
            max_additions: default_max_additions(),
        }
    }
}

impl ContextConfig {
    pub fn enhance_options(&self) -> EnhanceOptions {
        EnhanceOptions {
            include_atmosphere: self.include_atmosphere,
            include_lighting: self.include_lighting,
            include_activity: self.include_activity,
            max_additions: self.max_additions,
        }
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.tracing_level()?;
        if !(1..=DEFAULT_MAX_SUGGESTIONS).contains(&self.scoring.max_suggestions) {
            return Err(ConfigError::Validation(format!(
                "scoring.max_suggestions must be between 1 and {DEFAULT_MAX_SUGGESTIONS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.log.level, "warn");
        assert_eq!(cfg.context.enhance_options(), EnhanceOptions::default());
        assert_eq!(cfg.scoring.max_suggestions, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config::default();
        let serialized = toml::to_string(&cfg).expect("serialize");
        let deserialized: Config = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(deserialized.scoring.max_suggestions, 5);
        assert_eq!(deserialized.context.max_additions, 3);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str("[context]\ninclude_activity = true\n").unwrap();
        assert!(cfg.context.include_activity);
        assert!(cfg.context.include_atmosphere);
        assert_eq!(cfg.context.max_additions, 3);
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut cfg = Config::default();
        cfg.log.level = "loud".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn validate_rejects_zero_suggestion_cap() {
        let mut cfg = Config::default();
        cfg.scoring.max_suggestions = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_suggestion_cap_above_five() {
        let mut cfg = Config::default();
        cfg.scoring.max_suggestions = 9;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));

        cfg.scoring.max_suggestions = 5;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let cfg = LogConfig {
            level: "DEBUG".into(),
        };
        assert_eq!(cfg.tracing_level().unwrap(), tracing::Level::DEBUG);
    }
}
