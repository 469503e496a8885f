//! Add command CLI wrapper
//!
//! This module provides the CLI interface for the add workflow,
//! delegating all business logic to operations/add.

use std::path::PathBuf;

use crate::cli::AddArgs;
use crate::error::Result;
use crate::identifier::ProjectEnv;
use crate::operations::{AddOperation, AddOptions};
use crate::project::Project;
use crate::ui::ConsoleReporter;

/// Run add command
///
/// This is a thin CLI wrapper that opens the project and its environment
/// and delegates to AddOperation.
pub fn run(workspace: Option<PathBuf>, verbose: bool, args: AddArgs) -> Result<()> {
    let project = Project::open(workspace)?;
    let env = ProjectEnv::load(&project.root)?;
    let reporter = ConsoleReporter::new(verbose);

    let options = AddOptions::from(&args);
    AddOperation::new(&project, &env, &reporter).execute(&options)?;

    Ok(())
}
