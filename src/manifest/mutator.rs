//! Manifest mutation strategies
//!
//! Each manifest version has a strategy that registers a message extension
//! command in `composeExtensions`. Commands are grouped per bot: a command for
//! a bot that already has a compose extension is appended to it, otherwise a
//! new compose extension entry is created.

use serde_json::{Map, Value as JsonValue, json};

use crate::error::{Result, config, manifest::invalid};
use crate::project::component::{ActionInput, ActionSettings, ComponentDescriptor, ExtensionType};

/// A version specific manifest mutation
pub trait ManifestMutator {
    /// Version token this strategy is bound to
    fn version(&self) -> &'static str;

    /// Whether action commands can be declared in this manifest version
    fn supports_action(&self) -> bool;

    /// Build the command declaration for a component
    fn command(&self, component: &ComponentDescriptor) -> Result<JsonValue> {
        match (&component.extension_type, &component.action) {
            (ExtensionType::Action, Some(settings)) => {
                if !self.supports_action() {
                    return Err(invalid(format!(
                        "action based message extensions are not supported by manifest version {}",
                        self.version()
                    )));
                }
                action_command(component, settings)
            }
            (ExtensionType::Action, None) => Err(config::invalid(
                "action based message extensions need action settings",
            )),
            (ExtensionType::Query, _) => Ok(query_command(component)),
        }
    }

    /// Register the component's command in the manifest
    fn update_message_extension(
        &self,
        manifest: &mut JsonValue,
        component: &ComponentDescriptor,
    ) -> Result<()> {
        let command = self.command(component)?;
        add_command(manifest, &component.bot_id, command)
    }
}

/// Strategy for the released manifest versions
#[derive(Debug, Clone, Copy)]
pub struct StableMutator {
    version: &'static str,
}

impl StableMutator {
    pub fn new(version: &'static str) -> Self {
        Self { version }
    }
}

impl ManifestMutator for StableMutator {
    fn version(&self) -> &'static str {
        self.version
    }

    fn supports_action(&self) -> bool {
        false
    }
}

/// Strategy for the developer preview schema
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewMutator;

impl ManifestMutator for PreviewMutator {
    fn version(&self) -> &'static str {
        "devPreview"
    }

    fn supports_action(&self) -> bool {
        true
    }
}

fn default_parameters() -> JsonValue {
    json!([{
        "name": "parameter",
        "description": "Description of the parameter",
        "title": "Parameter"
    }])
}

fn query_command(component: &ComponentDescriptor) -> JsonValue {
    json!({
        "id": component.name,
        "type": "query",
        "title": component.title,
        "description": component.description,
        "initialRun": true,
        "parameters": default_parameters()
    })
}

fn action_command(component: &ComponentDescriptor, settings: &ActionSettings) -> Result<JsonValue> {
    if settings.contexts.is_empty() {
        return Err(config::invalid("action commands need at least one context"));
    }
    let mut contexts: Vec<&str> = Vec::new();
    for context in &settings.contexts {
        let value = context.manifest_value();
        if !contexts.contains(&value) {
            contexts.push(value);
        }
    }

    let parameters = match settings.input {
        ActionInput::Static => json!([
            {
                "name": "email",
                "title": "Email",
                "description": "Enter an e-mail address",
                "inputType": "text"
            },
            {
                "name": "includeImage",
                "title": "Include image",
                "description": "Include image in Hero Card",
                "inputType": "toggle"
            }
        ]),
        ActionInput::AdaptiveCard | ActionInput::TaskModule => default_parameters(),
    };

    Ok(json!({
        "id": component.name,
        "type": "action",
        "title": component.title,
        "description": component.description,
        "initialRun": false,
        "fetchTask": settings.input != ActionInput::Static,
        "context": contexts,
        "parameters": parameters
    }))
}

/// Append a command to the compose extension of `bot_id`, creating it if needed
fn add_command(manifest: &mut JsonValue, bot_id: &str, command: JsonValue) -> Result<()> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| invalid("the manifest root is not an object"))?;
    let extensions = root
        .entry("composeExtensions")
        .or_insert_with(|| JsonValue::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| invalid("composeExtensions is not an array"))?;

    let existing = extensions
        .iter_mut()
        .find(|extension| extension.get("botId").and_then(JsonValue::as_str) == Some(bot_id));

    let Some(extension) = existing else {
        let mut extension = Map::new();
        extension.insert("botId".to_string(), JsonValue::from(bot_id));
        extension.insert("canUpdateConfiguration".to_string(), JsonValue::Bool(true));
        extension.insert("commands".to_string(), JsonValue::Array(vec![command]));
        extensions.push(JsonValue::Object(extension));
        return Ok(());
    };

    let commands = extension
        .as_object_mut()
        .ok_or_else(|| invalid(format!("compose extension for bot {bot_id} is not an object")))?
        .entry("commands")
        .or_insert_with(|| JsonValue::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| invalid(format!("commands of bot {bot_id} is not an array")))?;

    let id = command.get("id").and_then(JsonValue::as_str).unwrap_or_default();
    if commands
        .iter()
        .any(|c| c.get("id").and_then(JsonValue::as_str) == Some(id))
    {
        return Err(invalid(format!(
            "bot {bot_id} already declares a command with id '{id}'"
        )));
    }
    commands.push(command);
    Ok(())
}
