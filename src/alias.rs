//! Alias store: user-chosen names for bot tokens and chat ids.
//!
//! Bots and chats live in separate namespaces, each one a plain map
//! from alias to value. Lookup never fails; an unknown alias is `None`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Raw config section as parsed from YAML.
pub type Section = HashMap<String, serde_yaml::Value>;

/// Alias namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Bot,
    Chat,
}

impl Namespace {
    /// Name of the config section holding this namespace.
    pub fn section(self) -> &'static str {
        match self {
            Namespace::Bot => "bots",
            Namespace::Chat => "chats",
        }
    }

    /// Key naming this namespace's default inside the `defaults` section.
    pub fn default_key(self) -> &'static str {
        match self {
            Namespace::Bot => "bot",
            Namespace::Chat => "chat",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasName(String);

impl AliasName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AliasName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AliasName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Bot token or chat id. Deliberately has no `Display` and a redacted `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AliasValue(String);

impl AliasValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AliasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AliasValue(***)")
    }
}

pub type AliasCollection = HashMap<AliasName, AliasValue>;

/// Look up the value bound to `alias`.
///
/// `Some("")` means the alias exists with an empty value, which is not the
/// same thing as an unknown alias.
pub fn lookup<'a>(collection: &'a AliasCollection, alias: &str) -> Option<&'a AliasValue> {
    collection.get(alias)
}

/// Build the collection for `namespace` from its raw section.
pub fn collection_from_section(namespace: Namespace, section: &Section) -> Result<AliasCollection> {
    let mut collection = AliasCollection::with_capacity(section.len());
    for (name, raw) in section {
        let value = alias_value(namespace.section(), name, raw)?;
        collection.insert(AliasName::new(name.as_str()), value);
    }
    Ok(collection)
}

fn alias_value(section: &str, name: &str, raw: &serde_yaml::Value) -> Result<AliasValue> {
    let value = scalar_to_string(raw).ok_or_else(|| {
        Error::config(format!(
            "{}.{} must be a string or a number",
            section, name
        ))
    })?;
    expand_placeholder(section, name, value).map(AliasValue::new)
}

/// Accepts strings and numbers; chat ids are usually written as bare integers.
pub(crate) fn scalar_to_string(raw: &serde_yaml::Value) -> Option<String> {
    match raw {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Replace a `${VAR}` value with the content of the environment variable.
fn expand_placeholder(section: &str, name: &str, value: String) -> Result<String> {
    let Some(var_name) = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Ok(value);
    };

    std::env::var(var_name).map_err(|_| {
        Error::config(format!(
            "{}.{} refers to environment variable {}, which is not set",
            section, name, var_name
        ))
    })
}
