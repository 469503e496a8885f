use clap::Parser;

/// Arguments for the hosts command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the bots of the project:\n    hostwire hosts\n\n\
                  Search another source folder:\n    hostwire hosts --pattern \"src/server/**/*.ts\"\n\n\
                  Print the result as JSON:\n    hostwire hosts --json")]
pub struct HostsArgs {
    /// Glob selecting the TypeScript files to scan
    #[arg(long, short = 'p')]
    pub pattern: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
