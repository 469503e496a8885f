//! Common test utilities for hostwire integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Bot id used by the fixture project
#[allow(dead_code)]
pub const BOT_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Schema URL of the default manifest version
#[allow(dead_code)]
pub const SCHEMA_V1_9: &str =
    "https://developer.microsoft.com/en-us/json-schemas/teams/v1.9/MicrosoftTeams.schema.json";

/// Bot class as generated for a Teams project
#[allow(dead_code)]
pub const BOT_SOURCE: &str = r#"import { BotDeclaration, PreventIframe } from "express-msteams-host";
import * as debug from "debug";
import { DialogSet, DialogState, StatePropertyAccessor, MemoryStorage, ConversationState, TurnContext } from "botbuilder";

// Initialize debug logging module
const log = debug("msteams");

/**
 * Implementation for My Bot
 */
@BotDeclaration(
    "/api/messages",
    new MemoryStorage(),
    process.env.MICROSOFT_APP_ID,
    process.env.MICROSOFT_APP_PASSWORD)
@PreventIframe("/myBot/aboutMyBot.html")
export class MyBot {
    private readonly conversationState: ConversationState;
    private readonly dialogs: DialogSet;
    private dialogState: StatePropertyAccessor<DialogState>;

    /**
     * The constructor
     * @param conversationState
     */
    public constructor(conversationState: ConversationState) {
        this.conversationState = conversationState;
        this.dialogState = conversationState.createProperty("dialogState");
        this.dialogs = new DialogSet(this.dialogState);
    }

    public async onTurn(context: TurnContext): Promise<any> {
        log("turn");
    }
}
"#;

/// A temporary Teams app project
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a generated project with one bot bound to MICROSOFT_APP_ID
    pub fn teams_project() -> Self {
        let workspace = Self::new();
        workspace.write_file(
            "src/manifest/manifest.json",
            &format!(
                "{{\n  \"$schema\": \"{SCHEMA_V1_9}\",\n  \"manifestVersion\": \"1.9\",\n  \"id\": \"{{{{APPLICATION_ID}}}}\",\n  \"bots\": [\n    {{\n      \"botId\": \"{{{{MICROSOFT_APP_ID}}}}\",\n      \"scopes\": [\"team\"]\n    }}\n  ]\n}}\n"
            ),
        );
        workspace.write_file("src/app/myBot/MyBot.ts", BOT_SOURCE);
        workspace.write_file(
            "src/app/scripts/client.ts",
            "// Default exports used by the client side components\nexport * from \"./myTab/MyTab\";\n",
        );
        workspace.write_file(
            ".env",
            &format!("# Bot settings\nMICROSOFT_APP_ID={BOT_ID}\nMICROSOFT_APP_PASSWORD=secret\n"),
        );
        workspace.write_file(
            ".yo-rc.json",
            "{\n  \"generator-teams\": {\n    \"version\": \"2.16.0\",\n    \"botidEnv\": \"MICROSOFT_APP_ID\"\n  }\n}\n",
        );
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parsed manifest
    pub fn manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("src/manifest/manifest.json"))
            .expect("Manifest is not JSON")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command running the real hostwire binary with a clean environment
#[allow(dead_code, deprecated)]
pub fn hostwire_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("hostwire").expect("hostwire binary");
    // Ignore developer settings that would change which project or bot is used
    cmd.env_remove("HOSTWIRE_WORKSPACE");
    cmd.env_remove("MICROSOFT_APP_ID");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_teams_project_fixture() {
        let workspace = TestWorkspace::teams_project();
        assert!(workspace.file_exists("src/app/myBot/MyBot.ts"));
        assert_eq!(workspace.manifest()["$schema"], SCHEMA_V1_9);
        assert_eq!(
            workspace.manifest()["bots"][0]["botId"],
            "{{MICROSOFT_APP_ID}}"
        );
    }
}
