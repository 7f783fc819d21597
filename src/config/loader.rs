use super::Config;
use crate::{ConfigError, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// `~/.visage/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        Ok(home.join(".visage").join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when no file exists.
    /// Environment overrides are applied on top and the result is validated.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// A missing file is not an error. Logging is not yet installed when this
    /// runs, so callers report where the config came from.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(ConfigError::from)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(format!("{}: {e}", config_path.display())))?;
            config.config_path = config_path.to_path_buf();
            config
        } else {
            Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VisageError;
    use crate::config::test_env::{ENV_LOCK, EnvVarGuard};

    fn clear_overrides() -> [EnvVarGuard; 3] {
        [
            EnvVarGuard::unset("VISAGE_LOG_LEVEL"),
            EnvVarGuard::unset("VISAGE_MAX_ADDITIONS"),
            EnvVarGuard::unset("VISAGE_MAX_SUGGESTIONS"),
        ]
    }

    #[test]
    fn missing_file_yields_defaults_without_writing() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.scoring.max_suggestions, 5);
        assert!(!path.exists());
    }

    #[test]
    fn file_values_are_read() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[log]\nlevel = \"debug\"\n\n[context]\ninclude_lighting = false\nmax_additions = 2\n\n[scoring]\nmax_suggestions = 3\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(!config.context.include_lighting);
        assert_eq!(config.context.max_additions, 2);
        assert_eq!(config.scoring.max_suggestions, 3);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scoring\nmax_suggestions = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, VisageError::Config(ConfigError::Load(_))));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let dir = tempfile::tempdir().unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, VisageError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scoring]\nmax_suggestions = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, VisageError::Config(ConfigError::Validation(_))));
    }

    #[test]
    fn env_overrides_apply_after_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = clear_overrides();
        let _suggestions = EnvVarGuard::set("VISAGE_MAX_SUGGESTIONS", "2");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scoring]\nmax_suggestions = 4\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scoring.max_suggestions, 2);
    }
}
