//! Hosts command CLI wrapper

use std::path::PathBuf;

use crate::cli::HostsArgs;
use crate::error::Result;
use crate::identifier::ProjectEnv;
use crate::operations::{HostsOperation, HostsOptions};
use crate::project::Project;
use crate::ui::ConsoleReporter;

/// Run hosts command
pub fn run(workspace: Option<PathBuf>, verbose: bool, args: HostsArgs) -> Result<()> {
    let project = Project::open(workspace)?;
    let env = ProjectEnv::load(&project.root)?;
    let reporter = ConsoleReporter::new(verbose);

    HostsOperation::new(&project, &env).execute(&HostsOptions::from(&args), &reporter)?;

    Ok(())
}
