//! Versions command implementation
//!
//! Prints the manifest versions `add --manifest-version` accepts.

use console::Style;

use crate::error::Result;
use crate::manifest::versions::visible_versions;

/// Run versions command
pub fn run(verbose: bool) -> Result<()> {
    println!("Supported manifest versions:");
    for entry in visible_versions() {
        let marker = if entry.default { " (default)" } else { "" };
        println!(
            "  {}{}",
            Style::new().cyan().bold().apply_to(entry.display_value),
            marker
        );
        if verbose {
            println!("    {}", Style::new().dim().apply_to(entry.schema_url));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_runs() {
        assert!(run(false).is_ok());
        assert!(run(true).is_ok());
    }
}
