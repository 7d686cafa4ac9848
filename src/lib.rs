//! tgsend library
//!
//! Sends a single Telegram message through the Bot API, addressing bots and
//! chats by alias:
//! - `alias`: alias namespaces, values and lookup
//! - `config`: loading `tgsend.yml` and validating the defaults
//! - `input`: merging CLI overrides, defaults and stdin into a `ResolvedInput`
//! - `sender`: the `sendMessage` HTTP call
//! - `commands`: the end-to-end send command used by the binary

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod sender;

// Re-export common types
pub use alias::{AliasCollection, AliasName, AliasValue, Namespace};
pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use input::{resolve, MessageFormat, Overrides, ResolvedInput};
pub use sender::{SendRequest, TelegramSender};

pub mod commands;

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::LazyLock<std::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(()));
