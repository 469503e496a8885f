//! Add operation module
//!
//! This module provides AddOperation, the workflow behind `hostwire add`:
//! - Resolve the manifest version and the host bot
//! - Register the message extension command in the manifest
//! - Wire the extension into the bot class and the client script barrel
//!
//! Every file is computed in memory and staged in a [`Transaction`]; nothing
//! is written unless all steps succeeded.

pub mod display;
pub mod host;
pub mod version;

use std::path::{Path, PathBuf};

use crate::augment::{self, AugmentOutcome, ExportPlan, ReapplyPolicy, SourceAugmentationPlan};
use crate::cli::AddArgs;
use crate::common::fs::{read_text, read_text_if_exists, to_forward_slashes};
use crate::error::{Result, fs::not_found};
use crate::identifier::EnvLookup;
use crate::manifest::{ManifestDocument, versions};
use crate::project::component::{
    ActionContext, ActionInput, ActionResponse, ActionSettings, ExtensionType,
};
use crate::project::{CLIENT_SCRIPT_PATH, ComponentDescriptor, HostKind, MANIFEST_PATH, Project};
use crate::transaction::Transaction;
use crate::ui::Reporter;

pub use host::{HostSource, HostTarget, resolve_host};
pub use version::resolve_manifest_version;

/// Configuration options for add
#[derive(Debug, Clone)]
pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub host: HostKind,
    pub bot_id: Option<String>,
    pub extension_type: ExtensionType,
    pub action_contexts: Vec<ActionContext>,
    pub action_input: ActionInput,
    pub action_response: ActionResponse,
    /// Display value such as `1.9`
    pub manifest_version: Option<String>,
    pub dry_run: bool,
    pub policy: ReapplyPolicy,
}

impl AddOptions {
    /// Query extension on an existing bot with every other option defaulted
    #[cfg(test)]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            host: HostKind::Existing,
            bot_id: None,
            extension_type: ExtensionType::Query,
            action_contexts: Vec::new(),
            action_input: ActionInput::default(),
            action_response: ActionResponse::default(),
            manifest_version: None,
            dry_run: false,
            policy: ReapplyPolicy::Guarded,
        }
    }

    fn action_settings(&self) -> Option<ActionSettings> {
        if self.extension_type != ExtensionType::Action {
            return None;
        }
        let mut settings = ActionSettings {
            input: self.action_input,
            response: self.action_response,
            ..ActionSettings::default()
        };
        if !self.action_contexts.is_empty() {
            settings.contexts = self.action_contexts.clone();
        }
        Some(settings)
    }
}

impl From<&AddArgs> for AddOptions {
    fn from(args: &AddArgs) -> Self {
        Self {
            title: args.name.clone(),
            description: args.description.clone(),
            host: args.host,
            bot_id: args.bot_id.clone(),
            extension_type: args.extension_type,
            action_contexts: args.action_contexts.clone(),
            action_input: args.action_input,
            action_response: args.action_response,
            manifest_version: args.manifest_version.clone(),
            dry_run: args.dry_run,
            policy: if args.repeat {
                ReapplyPolicy::Repeat
            } else {
                ReapplyPolicy::Guarded
            },
        }
    }
}

/// Edits made to one file
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Path relative to the project root
    pub path: PathBuf,
    pub changes: Vec<String>,
}

/// What an add run did, or would do with `--dry-run`
#[derive(Debug)]
pub struct AddReport {
    pub component: ComponentDescriptor,
    /// Manifest version token used for the manifest update
    pub manifest_version: &'static str,
    pub host: HostTarget,
    pub files: Vec<FileChange>,
    /// Non-fatal problems reported during the run
    pub warnings: usize,
    /// Whether the files were written
    pub committed: bool,
}

/// High-level add operation
pub struct AddOperation<'a> {
    project: &'a Project,
    env: &'a dyn EnvLookup,
    reporter: &'a dyn Reporter,
}

impl<'a> AddOperation<'a> {
    pub fn new(project: &'a Project, env: &'a dyn EnvLookup, reporter: &'a dyn Reporter) -> Self {
        Self {
            project,
            env,
            reporter,
        }
    }

    /// Execute add operation
    pub fn execute(&self, options: &AddOptions) -> Result<AddReport> {
        let mut manifest = ManifestDocument::load(&self.project.manifest_path())?;
        manifest.ensure_schema_recognized()?;
        let version = resolve_manifest_version(
            options.manifest_version.as_deref(),
            &self.project.options,
            &manifest,
        )?;
        self.reporter
            .detail(&format!("Using manifest version {version}"));

        let host = resolve_host(
            self.project,
            self.env,
            self.reporter,
            options.host,
            &options.title,
            options.bot_id.as_deref(),
        )?;

        let mut component = ComponentDescriptor::new(
            &options.title,
            options.description.as_deref(),
            options.host,
            host.bot_id.clone(),
        )?;
        if let Some(settings) = options.action_settings() {
            component = component.with_action(settings);
        }

        let mut transaction = Transaction::new();
        let mut files = Vec::new();
        let mut warnings = 0;

        versions::create_mutator(version)?
            .update_message_extension(&mut manifest.value, &component)?;
        transaction.stage(
            manifest.path.clone(),
            manifest.to_text()?,
            format!("register {}", component.name),
        );
        files.push(FileChange {
            path: PathBuf::from(MANIFEST_PATH),
            changes: vec![format!(
                "command {} for bot {}",
                component.name, component.bot_id
            )],
        });

        if let Some(source) = &host.source {
            let outcome = self.augment_host(&component, source, options.policy)?;
            warnings += self.report_warnings(&outcome);
            self.stage_outcome(&mut transaction, &mut files, &source.path, outcome);

            match self.augment_client_script(&component)? {
                Some(outcome) => {
                    self.stage_outcome(
                        &mut transaction,
                        &mut files,
                        Path::new(CLIENT_SCRIPT_PATH),
                        outcome,
                    );
                }
                None => {
                    self.reporter.warn(&format!(
                        "{CLIENT_SCRIPT_PATH} not found, the client modules of {} are not exported",
                        component.name
                    ));
                    warnings += 1;
                }
            }

            if !self.project.path(component.source_path()).exists() {
                self.reporter.warn(&format!(
                    "{} does not exist yet, render the message extension templates before building",
                    to_forward_slashes(&component.source_path())
                ));
                warnings += 1;
            }
        }

        for write in transaction.staged() {
            self.reporter.detail(&format!("Staged: {}", write.description));
        }

        let committed = if options.dry_run {
            false
        } else {
            transaction.commit()?;
            true
        };

        let report = AddReport {
            component,
            manifest_version: version,
            host,
            files,
            warnings,
            committed,
        };
        display::print_add_summary(self.reporter, &report);
        Ok(report)
    }

    fn augment_host(
        &self,
        component: &ComponentDescriptor,
        source: &HostSource,
        policy: ReapplyPolicy,
    ) -> Result<AugmentOutcome> {
        let path = self.project.path(&source.path);
        if !path.is_file() {
            return Err(not_found(to_forward_slashes(&source.path)));
        }
        let text = read_text(&path)?;
        let plan = SourceAugmentationPlan::for_component(component, Some(&source.class_name))
            .with_policy(policy);
        augment::apply(&to_forward_slashes(&source.path), &text, &plan)
    }

    /// `None` when the project has no client script barrel
    fn augment_client_script(
        &self,
        component: &ComponentDescriptor,
    ) -> Result<Option<AugmentOutcome>> {
        let Some(text) = read_text_if_exists(&self.project.client_script_path())? else {
            return Ok(None);
        };
        let plan = ExportPlan::for_component(component);
        augment::apply_export(CLIENT_SCRIPT_PATH, &text, &plan).map(Some)
    }

    fn report_warnings(&self, outcome: &AugmentOutcome) -> usize {
        for warning in &outcome.warnings {
            self.reporter.warn_diagnostic(warning);
        }
        outcome.warnings.len()
    }

    fn stage_outcome(
        &self,
        transaction: &mut Transaction,
        files: &mut Vec<FileChange>,
        relative: &Path,
        outcome: AugmentOutcome,
    ) {
        if outcome.is_unchanged() {
            self.reporter.detail(&format!(
                "{} already up to date",
                to_forward_slashes(relative)
            ));
            return;
        }
        transaction.stage(
            self.project.path(relative),
            outcome.text,
            format!("update {}", to_forward_slashes(relative)),
        );
        files.push(FileChange {
            path: relative.to_path_buf(),
            changes: outcome.changes,
        });
    }
}
