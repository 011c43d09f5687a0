use crate::domain::models::Config;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/syracuse/config.toml"))
}

/// Loads `~/.config/syracuse/config.toml`, falling back to defaults when
/// `HOME` is unset or the file does not exist.
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_config_from, ConfigError};
    use crate::domain::models::DEFAULT_MAX_STEPS;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart]\nshow = false\nwidth = 640\n").unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.max_steps, DEFAULT_MAX_STEPS);
        assert!(!cfg.chart.show);
        assert_eq!(cfg.chart.width, 640);
        assert_eq!(cfg.chart.height, 768);
        assert_eq!(cfg.chart.output_dir, None);
    }

    #[test]
    fn max_steps_and_output_dir_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "max_steps = 12\n[chart]\noutput_dir = \"/var/tmp/charts\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.max_steps, 12);
        assert_eq!(
            cfg.chart.output_dir.as_deref(),
            Some(std::path::Path::new("/var/tmp/charts"))
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_steps = \"many\"\n").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
