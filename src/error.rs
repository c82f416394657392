use std::path::PathBuf;

/// Errors that can occur while saving or loading a move log.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to write save file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read save file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_display() {
        let err = PersistenceError::Read {
            path: PathBuf::from("saves/game.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read save file saves/game.txt: not found"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("session.human_player must be 1 or 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: session.human_player must be 1 or 2"
        );
    }
}
