//! Project options store
//!
//! The Teams project generator records its answers in `.yo-rc.json` under the
//! `generator-teams` key. hostwire reads the fields it needs from there and
//! ignores the rest.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::common::fs::read_text_if_exists;
use crate::error::{Result, config};

/// Options file at the project root
pub const OPTIONS_FILE: &str = ".yo-rc.json";

/// Key of the generator's section in the options file
pub const GENERATOR_KEY: &str = "generator-teams";

/// Environment variable holding the bot id of generated bots
pub const DEFAULT_BOT_ID_ENV: &str = "MICROSOFT_APP_ID";

/// Options recorded by the project generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    /// Manifest version token (e.g. `v1.9`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_version: Option<String>,

    /// Environment variable name used for new bot ids
    #[serde(default = "default_bot_id_env")]
    pub botid_env: String,
}

fn default_bot_id_env() -> String {
    DEFAULT_BOT_ID_ENV.to_string()
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            manifest_version: None,
            botid_env: default_bot_id_env(),
        }
    }
}

impl ProjectOptions {
    /// Load options from the project root
    ///
    /// A missing file or a file without the generator section yields the
    /// defaults. A file that is not valid JSON is an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(OPTIONS_FILE);
        let Some(text) = read_text_if_exists(&path)? else {
            return Ok(Self::default());
        };
        Self::from_json(&text).map_err(|e| config::parse_failed(path.display().to_string(), e))
    }

    fn from_json(text: &str) -> std::result::Result<Self, String> {
        let document: JsonValue = serde_json::from_str(text).map_err(|e| e.to_string())?;
        match document.get(GENERATOR_KEY) {
            Some(section) => {
                serde_json::from_value(section.clone()).map_err(|e| e.to_string())
            }
            None => Ok(Self::default()),
        }
    }
}
