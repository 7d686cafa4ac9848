//! Input resolution: defaults + CLI overrides + message source -> `ResolvedInput`.

use std::io::Read;

use crate::alias::{AliasName, Namespace};
use crate::config::Config;
use crate::error::{Error, Result};

/// Message formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    #[default]
    Plain,
    Markdown,
    Html,
}

impl MessageFormat {
    /// Value of the Bot API `parse_mode` field, `None` for plain text.
    pub fn parse_mode(self) -> Option<&'static str> {
        match self {
            MessageFormat::Plain => None,
            MessageFormat::Markdown => Some("markdown"),
            MessageFormat::Html => Some("html"),
        }
    }
}

/// Values supplied on the command line. Empty `message` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub bot: Option<String>,
    pub chat: Option<String>,
    pub silent: bool,
    pub message: String,
    pub markdown: bool,
    pub html: bool,
}

/// A validated message, ready to hand to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    bot: AliasName,
    chat: AliasName,
    text: String,
    format: MessageFormat,
    silent: bool,
}

impl ResolvedInput {
    pub fn bot(&self) -> &AliasName {
        &self.bot
    }

    pub fn chat(&self) -> &AliasName {
        &self.chat
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }

    pub fn silent(&self) -> bool {
        self.silent
    }
}

/// Combine config defaults, CLI overrides and the content stream.
///
/// The stream is read to EOF even when `overrides.message` is set: which
/// source wins is decided by content, so an explicit message plus piped
/// input is an error rather than a silent pick.
pub fn resolve<R: Read>(config: &Config, overrides: Overrides, stream: R) -> Result<ResolvedInput> {
    let bot = overrides
        .bot
        .map(AliasName::new)
        .unwrap_or_else(|| config.default_bot.clone());
    let chat = overrides
        .chat
        .map(AliasName::new)
        .unwrap_or_else(|| config.default_chat.clone());

    if overrides.markdown && overrides.html {
        return Err(Error::validation("md and html flags are mutually exclusive"));
    }

    ensure_known(config, Namespace::Bot, &bot)?;
    ensure_known(config, Namespace::Chat, &chat)?;

    let streamed = read_content(stream)?;
    let text = pick_message(overrides.message, streamed)?;

    let format = if overrides.markdown {
        MessageFormat::Markdown
    } else if overrides.html {
        MessageFormat::Html
    } else {
        MessageFormat::Plain
    };

    Ok(ResolvedInput {
        bot,
        chat,
        text,
        format,
        silent: overrides.silent,
    })
}

fn ensure_known(config: &Config, namespace: Namespace, alias: &AliasName) -> Result<()> {
    if config.collection(namespace).contains_key(alias.as_str()) {
        Ok(())
    } else {
        Err(Error::unknown_alias(namespace, alias.as_str()))
    }
}

/// Read the whole stream. No timeout: an open terminal blocks until EOF.
pub fn read_content<R: Read>(mut stream: R) -> Result<String> {
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| Error::validation("message is not valid UTF-8"))
}

fn pick_message(argument: String, streamed: String) -> Result<String> {
    match (argument.is_empty(), streamed.is_empty()) {
        (true, true) => Err(Error::validation("message is empty")),
        (false, false) => Err(Error::validation(
            "message should come from exactly one source: stdin or --msg, not both",
        )),
        (false, true) => Ok(argument),
        (true, false) => Ok(streamed),
    }
}
