use clap::Parser;

use crate::project::HostKind;
use crate::project::component::{ActionContext, ActionInput, ActionResponse, ExtensionType};

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a search extension to the bot declared with MICROSOFT_APP_ID:\n    hostwire add --name \"Weather Search\"\n\n\
                  Add an extension to the bot with a literal id:\n    hostwire add --name Weather --bot-id 11111111-1111-1111-1111-111111111111\n\n\
                  Wire an extension into a freshly generated bot:\n    hostwire add --name Weather --host new\n\n\
                  Register an extension of a bot hosted elsewhere:\n    hostwire add --name Weather --host external --bot-id 11111111-1111-1111-1111-111111111111\n\n\
                  Add an action with a task module (devPreview manifests):\n    hostwire add --name \"Create Task\" --type action --action-input taskModule\n\n\
                  Preview the changes:\n    hostwire add --name Weather --dry-run")]
pub struct AddArgs {
    /// Title of the message extension (1 to 32 characters)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Description shown in the manifest
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Where the bot answering the extension lives
    #[arg(long, value_enum, default_value_t = HostKind::Existing)]
    pub host: HostKind,

    /// Bot id: a GUID, {{VARIABLE}} or process.env.VARIABLE
    /// (defaults to the project's bot id variable)
    #[arg(long)]
    pub bot_id: Option<String>,

    /// Kind of command
    #[arg(long = "type", value_enum, default_value_t = ExtensionType::Query)]
    pub extension_type: ExtensionType,

    /// Where an action can be invoked (repeatable or comma separated)
    #[arg(long = "action-context", value_enum, value_delimiter = ',')]
    pub action_contexts: Vec<ActionContext>,

    /// How an action collects its input
    #[arg(long, value_enum, default_value_t = ActionInput::AdaptiveCard)]
    pub action_input: ActionInput,

    /// How an action responds on submit
    #[arg(long, value_enum, default_value_t = ActionResponse::AdaptiveCard)]
    pub action_response: ActionResponse,

    /// Manifest version to target (e.g. 1.9 or devPreview)
    #[arg(long, short = 'm')]
    pub manifest_version: Option<String>,

    /// Show what would be changed without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Insert the field and constructor statement even when they already exist
    #[arg(long)]
    pub repeat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_add_defaults() {
        let cli = super::super::Cli::try_parse_from(["hostwire", "add", "--name", "Weather"])
            .unwrap();
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.name, "Weather");
                assert_eq!(args.host, HostKind::Existing);
                assert_eq!(args.extension_type, ExtensionType::Query);
                assert!(args.bot_id.is_none());
                assert!(args.action_contexts.is_empty());
                assert!(!args.dry_run);
                assert!(!args.repeat);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_action() {
        let cli = super::super::Cli::try_parse_from([
            "hostwire",
            "add",
            "-n",
            "Create Task",
            "--type",
            "action",
            "--action-context",
            "compose,message",
            "--action-input",
            "taskModule",
            "--action-response",
            "message",
            "-m",
            "devPreview",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.extension_type, ExtensionType::Action);
                assert_eq!(
                    args.action_contexts,
                    vec![ActionContext::Compose, ActionContext::Message]
                );
                assert_eq!(args.action_input, ActionInput::TaskModule);
                assert_eq!(args.action_response, ActionResponse::Message);
                assert_eq!(args.manifest_version.as_deref(), Some("devPreview"));
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_external_host() {
        let cli = super::super::Cli::try_parse_from([
            "hostwire",
            "add",
            "--name",
            "Weather",
            "--host",
            "external",
            "--bot-id",
            "11111111-1111-1111-1111-111111111111",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.host, HostKind::External);
                assert_eq!(
                    args.bot_id.as_deref(),
                    Some("11111111-1111-1111-1111-111111111111")
                );
                assert!(args.dry_run);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_requires_name() {
        assert!(super::super::Cli::try_parse_from(["hostwire", "add"]).is_err());
    }

    #[test]
    fn test_cli_parsing_add_rejects_unknown_host() {
        assert!(
            super::super::Cli::try_parse_from(["hostwire", "add", "-n", "X", "--host", "remote"])
                .is_err()
        );
    }
}
