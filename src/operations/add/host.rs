//! Host bot selection for `add`

use std::path::PathBuf;

use crate::augment::DeclarationLocator;
use crate::error::{Result, config};
use crate::identifier::{self, EMPTY_GUID, EnvLookup, IdentifierToken};
use crate::project::component::new_bot_names;
use crate::project::{HostKind, Project};
use crate::ui::Reporter;

/// Bot class a message extension is wired into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSource {
    /// Path relative to the project root
    pub path: PathBuf,
    pub class_name: String,
}

/// The bot answering a message extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub kind: HostKind,
    /// Bot id token as written to the manifest
    pub bot_id: String,
    /// `None` for bots hosted outside the project
    pub source: Option<HostSource>,
}

/// Determine the bot for `kind`
///
/// - `new`: the bot generated for the extension title, referenced through the
///   project's bot id variable unless `bot_id` is given
/// - `existing`: the bot class whose `@BotDeclaration` id resolves to the
///   same GUID as `bot_id`
/// - `external`: no source; `bot_id` must be a literal GUID
pub fn resolve_host(
    project: &Project,
    env: &dyn EnvLookup,
    reporter: &dyn Reporter,
    kind: HostKind,
    title: &str,
    bot_id: Option<&str>,
) -> Result<HostTarget> {
    let default_token = || identifier::placeholder(&project.options.botid_env);

    match kind {
        HostKind::New => {
            let token = bot_id.map_or_else(default_token, str::to_string);
            ensure_token(&token)?;
            let (name, class_name) = new_bot_names(title);
            Ok(HostTarget {
                kind,
                bot_id: token,
                source: Some(HostSource {
                    path: PathBuf::from("src/app")
                        .join(name)
                        .join(format!("{class_name}.ts")),
                    class_name,
                }),
            })
        }
        HostKind::Existing => {
            let token = bot_id.map_or_else(default_token, str::to_string);
            let found = DeclarationLocator::new(&project.root, env).find_host(&token, reporter)?;
            reporter.detail(&format!(
                "Bot id {} belongs to {} in {}",
                found.key,
                found.class_name,
                found.path.display()
            ));
            Ok(HostTarget {
                kind,
                bot_id: token,
                source: Some(HostSource {
                    path: found.path,
                    class_name: found.class_name,
                }),
            })
        }
        HostKind::External => {
            let token = bot_id.unwrap_or(EMPTY_GUID);
            if !identifier::is_guid(token) {
                return Err(config::invalid(format!(
                    "externally hosted bots need a literal GUID as bot id, got '{token}'"
                )));
            }
            Ok(HostTarget {
                kind,
                bot_id: token.to_string(),
                source: None,
            })
        }
    }
}

fn ensure_token(token: &str) -> Result<()> {
    match IdentifierToken::parse(token) {
        Some(_) => Ok(()),
        None => Err(config::invalid(format!(
            "bot id '{token}' is not a GUID or an environment variable reference"
        ))),
    }
}
