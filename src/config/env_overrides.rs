use super::Config;
use crate::core::quality::DEFAULT_MAX_SUGGESTIONS;

impl Config {
    /// Applies `VISAGE_*` environment overrides. Unparseable or empty values
    /// are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("VISAGE_LOG_LEVEL")
            && !level.trim().is_empty()
        {
            self.log.level = level.trim().to_string();
        }

        if let Ok(raw) = std::env::var("VISAGE_MAX_ADDITIONS")
            && let Ok(max) = raw.trim().parse::<usize>()
        {
            self.context.max_additions = max;
        }

        if let Ok(raw) = std::env::var("VISAGE_MAX_SUGGESTIONS")
            && let Ok(max) = raw.trim().parse::<usize>()
            && (1..=DEFAULT_MAX_SUGGESTIONS).contains(&max)
        {
            self.scoring.max_suggestions = max;
        }
    }
}
