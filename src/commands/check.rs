//! Check command CLI wrapper

use std::path::PathBuf;

use crate::error::Result;
use crate::operations::CheckOperation;
use crate::project::Project;
use crate::ui::ConsoleReporter;

/// Run check command
pub fn run(workspace: Option<PathBuf>, verbose: bool) -> Result<()> {
    let project = Project::open(workspace)?;
    let reporter = ConsoleReporter::new(verbose);

    CheckOperation::new(&project).execute(&reporter)?;

    Ok(())
}
