use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    hostwire completions bash > ~/.bash_completion.d/hostwire\n\n\
                  Generate zsh completions:\n    hostwire completions zsh > ~/.zfunc/_hostwire\n\n\
                  Generate fish completions:\n    hostwire completions fish > ~/.config/fish/completions/hostwire.fish\n\n\
                  Generate PowerShell completions:\n    hostwire completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
