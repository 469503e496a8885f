//! Component descriptors
//!
//! A [`ComponentDescriptor`] captures everything the workflow knows about the
//! message extension being added: its derived names, where it is hosted and
//! which bot id ties it to the host.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::common::string_utils::{camel_case, capitalize_word};
use crate::error::{Result, config};

/// Suffix every message extension name ends with
pub const NAME_SUFFIX: &str = "MessageExtension";

/// Maximum length of a message extension title (manifest limit)
pub const MAX_TITLE_LEN: usize = 32;

/// Where the message extension's bot lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostKind {
    /// A bot generated together with the extension
    New,
    /// A bot already implemented in this project
    Existing,
    /// A bot hosted somewhere else; only the manifest is updated
    External,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostKind::New => "new",
            HostKind::Existing => "existing",
            HostKind::External => "external",
        };
        write!(f, "{name}")
    }
}

/// Kind of messaging extension command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExtensionType {
    /// Search based
    #[default]
    Query,
    /// Action based
    Action,
}

/// Where an action command can be invoked from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionContext {
    #[value(name = "compose")]
    Compose,
    #[value(name = "commandBox")]
    CommandBox,
    #[value(name = "message")]
    Message,
}

impl ActionContext {
    /// Value used in the manifest
    pub fn manifest_value(self) -> &'static str {
        match self {
            ActionContext::Compose => "compose",
            ActionContext::CommandBox => "commandBox",
            ActionContext::Message => "message",
        }
    }
}

/// How an action collects its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActionInput {
    #[default]
    #[value(name = "adaptiveCard")]
    AdaptiveCard,
    #[value(name = "static")]
    Static,
    #[value(name = "taskModule")]
    TaskModule,
}

/// How an action responds to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActionResponse {
    #[value(name = "message")]
    Message,
    #[default]
    #[value(name = "adaptiveCard")]
    AdaptiveCard,
}

/// Settings that only apply to action commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSettings {
    pub contexts: Vec<ActionContext>,
    pub input: ActionInput,
    pub response: ActionResponse,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            contexts: vec![ActionContext::Compose, ActionContext::CommandBox],
            input: ActionInput::default(),
            response: ActionResponse::default(),
        }
    }
}

/// The message extension being added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// camelCase name ending with `MessageExtension`
    pub name: String,
    /// Title as entered
    pub title: String,
    pub description: String,
    /// `name` with its first letter upper-cased
    pub class_name: String,
    pub host: HostKind,
    /// Bot id token as written to the manifest (GUID or `{{VARIABLE}}`)
    pub bot_id: String,
    pub extension_type: ExtensionType,
    /// Present for action commands
    pub action: Option<ActionSettings>,
}

impl ComponentDescriptor {
    /// Derive a descriptor from a title
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when the title is empty, longer than 32
    /// characters, or contains no letters or digits.
    pub fn new(
        title: &str,
        description: Option<&str>,
        host: HostKind,
        bot_id: impl Into<String>,
    ) -> Result<Self> {
        let title = title.trim();
        let title_len = title.chars().count();
        if title_len == 0 || title_len > MAX_TITLE_LEN {
            return Err(config::invalid(format!(
                "message extension name must be 1 to {MAX_TITLE_LEN} characters, got {title_len}"
            )));
        }

        if camel_case(title).is_empty() {
            return Err(config::invalid(format!(
                "'{title}' does not contain any letters or digits"
            )));
        }
        let name = component_name(title);

        Ok(Self {
            class_name: capitalize_word(&name),
            name,
            title: title.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map_or_else(|| format!("Description of {title}"), str::to_string),
            host,
            bot_id: bot_id.into(),
            extension_type: ExtensionType::Query,
            action: None,
        })
    }

    /// Turn the descriptor into an action command
    pub fn with_action(mut self, settings: ActionSettings) -> Self {
        self.extension_type = ExtensionType::Action;
        self.action = Some(settings);
        self
    }

    /// Implementation file rendered by the templates
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from("src/app")
            .join(&self.name)
            .join(format!("{}.ts", self.class_name))
    }

    /// Module specifier of the implementation relative to a sibling folder
    pub fn import_specifier(&self) -> String {
        format!("../{}/{}", self.name, self.class_name)
    }

    /// Name of the field holding the instance in the host class
    pub fn field_name(&self) -> String {
        format!("_{}", self.name)
    }

    /// Client-side modules re-exported from `client.ts`
    pub fn client_modules(&self) -> Vec<String> {
        let mut modules = vec![format!("./{}/{}Config", self.name, self.class_name)];
        if self
            .action
            .as_ref()
            .is_some_and(|a| a.input == ActionInput::TaskModule)
        {
            modules.push(format!("./{}/{}Action", self.name, self.class_name));
        }
        modules
    }
}

/// Derive the component name from a title
pub fn component_name(title: &str) -> String {
    let mut name = camel_case(title);
    if !name.ends_with(NAME_SUFFIX) {
        name.push_str(NAME_SUFFIX);
    }
    name
}

/// Name and class name of the bot generated for a `new` host
pub fn new_bot_names(title: &str) -> (String, String) {
    let name = camel_case(&format!("{title} Bot"));
    let class_name = capitalize_word(&name);
    (name, class_name)
}
