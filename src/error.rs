use std::path::PathBuf;

pub type CelebrationResult<T> = Result<T, CelebrationError>;

#[derive(thiserror::Error, Debug)]
pub enum CelebrationError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("asset error: {0}")]
    Asset(String),

    #[error("playback blocked: {0}")]
    Playback(String),
}

impl CelebrationError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(CelebrationError::config("x").to_string().starts_with("invalid configuration:"));
        assert!(CelebrationError::asset("x").to_string().starts_with("asset error:"));
        assert!(CelebrationError::playback("x").to_string().starts_with("playback blocked:"));
    }
}
