//! Configuration: bot and chat aliases plus the default selection.
//!
//! Loads `tgsend.yml` from the first existing candidate path:
//!
//! ```yaml
//! bots:
//!   work: "123456:ABC-DEF"
//!   alerts: "${ALERTS_BOT_TOKEN}"
//! chats:
//!   me: 12345
//!   team: -1001234567890
//! defaults:
//!   bot: work
//!   chat: me
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::alias::{
    self, collection_from_section, scalar_to_string, AliasCollection, AliasName, AliasValue,
    Namespace, Section,
};
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "tgsend.yml";
pub const SYSTEM_CONFIG_DIR: &str = "/etc";
pub const DEFAULTS_SECTION: &str = "defaults";

/// YAML document layout
#[derive(Debug, Deserialize)]
struct FileConfig {
    bots: Option<Section>,
    chats: Option<Section>,
    defaults: Option<Section>,
}

/// Loaded configuration. Immutable once built; defaults are already validated.
#[derive(Debug, Clone)]
pub struct Config {
    pub default_bot: AliasName,
    pub default_chat: AliasName,
    pub bots: AliasCollection,
    pub chats: AliasCollection,
}

impl Config {
    /// Candidate config locations, system-wide first.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILE_NAME)];
        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(".config").join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Load .env (if any) and then the first config found in the standard locations.
    pub fn discover() -> Result<Self> {
        Self::load_dotenv();
        Self::discover_in(&Self::candidate_paths())
    }

    /// Load the first existing file among `paths`.
    pub fn discover_in(paths: &[PathBuf]) -> Result<Self> {
        let found = paths.iter().find(|path| path.exists()).ok_or_else(|| {
            let tried: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            Error::config(format!(
                "config file is not found in following paths: {}",
                tried.join(", ")
            ))
        })?;

        debug!(path = %found.display(), "Using config file");
        Self::load_from_file(found)
    }

    /// Load `.env` from the current directory, then from its parent.
    fn load_dotenv() {
        if !Self::load_env_file(Path::new(".env")) {
            Self::load_env_file(Path::new("../.env"));
        }
    }

    /// Export variables from an env file; variables already set are kept.
    /// A missing or unreadable file is skipped.
    pub(crate) fn load_env_file(path: &Path) -> bool {
        match dotenvy::from_path(path) {
            Ok(()) => {
                debug!(path = %path.display(), "Loaded env file");
                true
            }
            Err(_) => false,
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate a config document. Both namespaces and both
    /// defaults must be present; nothing is returned on partial success.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: FileConfig = serde_yaml::from_str(content)?;

        let bots = collection_from_section(
            Namespace::Bot,
            required_section(file.bots.as_ref(), Namespace::Bot.section())?,
        )?;
        let chats = collection_from_section(
            Namespace::Chat,
            required_section(file.chats.as_ref(), Namespace::Chat.section())?,
        )?;

        let defaults = required_section(file.defaults.as_ref(), DEFAULTS_SECTION)?;
        let default_bot = resolve_default(defaults, Namespace::Bot.default_key(), &bots)?;
        let default_chat = resolve_default(defaults, Namespace::Chat.default_key(), &chats)?;

        Ok(Self {
            default_bot,
            default_chat,
            bots,
            chats,
        })
    }

    pub fn collection(&self, namespace: Namespace) -> &AliasCollection {
        match namespace {
            Namespace::Bot => &self.bots,
            Namespace::Chat => &self.chats,
        }
    }

    pub fn bot_token(&self, alias: &str) -> Option<&AliasValue> {
        alias::lookup(&self.bots, alias)
    }

    pub fn chat_id(&self, alias: &str) -> Option<&AliasValue> {
        alias::lookup(&self.chats, alias)
    }
}

fn required_section<'a>(section: Option<&'a Section>, name: &str) -> Result<&'a Section> {
    section.ok_or_else(|| Error::config(format!("missing or empty section: {}", name)))
}

/// Read the default alias stored under `key_name` and check that
/// `collection` knows it.
pub fn resolve_default(
    defaults: &Section,
    key_name: &str,
    collection: &AliasCollection,
) -> Result<AliasName> {
    let raw = defaults.get(key_name).ok_or_else(|| {
        Error::config(format!("missing key {}.{}", DEFAULTS_SECTION, key_name))
    })?;
    let name = scalar_to_string(raw).ok_or_else(|| {
        Error::config(format!(
            "{}.{} must be an alias name",
            DEFAULTS_SECTION, key_name
        ))
    })?;

    if alias::lookup(collection, &name).is_none() {
        return Err(Error::config(format!(
            "unknown alias in defaults section: {}",
            name
        )));
    }

    Ok(AliasName::new(name))
}
