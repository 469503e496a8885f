//! Hosts operation module
//!
//! Lists every class carrying `@BotDeclaration` together with its resolved
//! bot id, and the classes left out because their id cannot be resolved.

use console::Style;
use serde_json::json;

use crate::augment::{DeclarationLocator, LocatorScan};
use crate::cli::HostsArgs;
use crate::common::fs::to_forward_slashes;
use crate::error::{Result, config};
use crate::identifier::EnvLookup;
use crate::project::Project;
use crate::ui::Reporter;

/// Configuration options for hosts
#[derive(Debug, Clone, Default)]
pub struct HostsOptions {
    /// Glob overriding the default app sources
    pub pattern: Option<String>,
    pub json: bool,
}

impl From<&HostsArgs> for HostsOptions {
    fn from(args: &HostsArgs) -> Self {
        Self {
            pattern: args.pattern.clone(),
            json: args.json,
        }
    }
}

/// High-level hosts operation
pub struct HostsOperation<'a> {
    project: &'a Project,
    env: &'a dyn EnvLookup,
}

impl<'a> HostsOperation<'a> {
    pub fn new(project: &'a Project, env: &'a dyn EnvLookup) -> Self {
        Self { project, env }
    }

    /// Scan the project without printing anything
    pub fn scan(&self, options: &HostsOptions) -> Result<LocatorScan> {
        let mut locator = DeclarationLocator::new(&self.project.root, self.env);
        if let Some(pattern) = &options.pattern {
            locator = locator.with_pattern(pattern.clone());
        }
        locator.scan()
    }

    /// Execute hosts operation
    pub fn execute(&self, options: &HostsOptions, reporter: &dyn Reporter) -> Result<LocatorScan> {
        let scan = self.scan(options)?;
        if options.json {
            print_json(&scan)?;
        } else {
            print_scan(&scan, reporter);
        }
        Ok(scan)
    }
}

fn print_json(scan: &LocatorScan) -> Result<()> {
    let document = json!({
        "pattern": scan.pattern,
        "hosts": scan.candidates,
        "excluded": scan.exclusions,
    });
    let text = serde_json::to_string_pretty(&document)
        .map_err(|e| config::invalid(format!("failed to serialize hosts: {e}")))?;
    println!("{text}");
    Ok(())
}

fn print_scan(scan: &LocatorScan, reporter: &dyn Reporter) {
    for warning in &scan.parse_warnings {
        reporter.warn_diagnostic(warning);
    }

    if scan.candidates.is_empty() && scan.exclusions.is_empty() {
        reporter.info(&format!("No bots found in {}.", scan.pattern));
        return;
    }

    if !scan.candidates.is_empty() {
        reporter.info(&format!("Bots ({}):", scan.candidates.len()));
        for host in &scan.candidates {
            reporter.info(&format!(
                "  {}  {}  {}",
                Style::new().cyan().bold().apply_to(&host.class_name),
                host.key,
                Style::new().dim().apply_to(to_forward_slashes(&host.path))
            ));
        }
    }

    if !scan.exclusions.is_empty() {
        reporter.warn(&format!(
            "{} bot(s) skipped, their id cannot be resolved:",
            scan.exclusions.len()
        ));
        for exclusion in &scan.exclusions {
            reporter.warn(&format!(
                "  {} ({}): {}",
                exclusion.class_name,
                to_forward_slashes(&exclusion.path),
                exclusion.reason
            ));
        }
    }
}
