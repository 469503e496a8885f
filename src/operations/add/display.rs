//! Display and output functions for add operation

use crate::common::fs::to_forward_slashes;
use crate::ui::Reporter;

use super::AddReport;

/// Print what was changed, or what would be with `--dry-run`
pub fn print_add_summary(reporter: &dyn Reporter, report: &AddReport) {
    let component = &report.component;
    let target = match &report.host.source {
        Some(source) => format!("bot {}", source.class_name),
        None => format!("external bot {}", report.host.bot_id),
    };

    if report.committed {
        reporter.success(&format!(
            "Added {} to {} ({} file(s), manifest {})",
            component.name,
            target,
            report.files.len(),
            report.manifest_version
        ));
    } else {
        reporter.info(&format!(
            "[DRY RUN] Would add {} to {}, updating {} file(s) (manifest {})",
            component.name,
            target,
            report.files.len(),
            report.manifest_version
        ));
    }

    for file in &report.files {
        reporter.info(&format!("  {}", to_forward_slashes(&file.path)));
        for change in &file.changes {
            if report.committed {
                reporter.detail(&format!("    + {change}"));
            } else {
                reporter.info(&format!("    + {change}"));
            }
        }
    }

    if report.warnings > 0 {
        reporter.warn(&format!(
            "Finished with {} warning(s), review them before building",
            report.warnings
        ));
    }
}
