//! Error types for tgsend

use thiserror::Error;

use crate::alias::Namespace;

#[derive(Error, Debug)]
pub enum Error {
    /// Config file missing, unparsable or inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown {namespace} alias: {alias}")]
    UnknownAlias { namespace: Namespace, alias: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Transport failure or the Bot API refused the message.
    #[error("Failed to send message: {0}")]
    Dispatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn unknown_alias(namespace: Namespace, alias: impl Into<String>) -> Self {
        Error::UnknownAlias {
            namespace,
            alias: alias.into(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(format!("failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::config("missing section: bots");
        let msg = err.to_string();
        assert!(msg.contains("Config error"));
        assert!(msg.contains("missing section: bots"));
    }

    #[test]
    fn test_error_display_unknown_alias_names_namespace_and_alias() {
        let err = Error::unknown_alias(Namespace::Chat, "unknown");
        assert_eq!(err.to_string(), "Unknown chat alias: unknown");

        let err = Error::unknown_alias(Namespace::Bot, "ghost");
        assert_eq!(err.to_string(), "Unknown bot alias: ghost");
    }

    #[test]
    fn test_error_display_validation() {
        let err = Error::validation("message is empty");
        assert_eq!(err.to_string(), "Invalid input: message is empty");
    }

    #[test]
    fn test_error_display_dispatch() {
        let err = Error::Dispatch(r#"{"ok":false}"#.to_string());
        let msg = err.to_string();
        assert!(msg.contains("Failed to send message"));
        assert!(msg.contains(r#"{"ok":false}"#));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_serde_yaml_is_config_error() {
        let yaml_err = serde_yaml::from_str::<Vec<i32>>("{ invalid yaml [").unwrap_err();
        let err: Error = yaml_err.into();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("failed to parse config"));
    }
}
