use keycanvas_types::KeyCanvasError;
use thiserror::Error;

/// Errors that can occur in CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("nothing to compare: the address to compare is empty")]
    EmptyComparison,

    #[error("{0}")]
    Core(#[from] KeyCanvasError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("prompt error: {0}")]
    Prompt(String),
}

impl CliError {
    /// A follow-up suggestion shown under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::EmptyComparison => {
                Some("pass --with <ADDRESS>, or --example to use the current address")
            }
            CliError::Core(KeyCanvasError::EmptyAddress) => Some("addresses cannot be empty"),
            CliError::Core(KeyCanvasError::InvalidSharedAddress { .. }) => {
                Some("shared addresses must be at least 26 characters long")
            }
            CliError::Config(_) => Some("run `keycanvas config --reset` to restore defaults"),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display_passthrough() {
        let err: CliError = KeyCanvasError::EmptyAddress.into();
        assert_eq!(err.to_string(), "address must not be empty");
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("bad json".to_string());
        assert!(err.to_string().contains("bad json"));
        assert!(err.hint().unwrap().contains("--reset"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let e = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CliError = e.into();
        assert!(matches!(err, CliError::Serialization(_)));
        assert!(err.hint().is_none());
    }
}
