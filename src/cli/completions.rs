//! Completions command arguments

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pagesmith completions bash > ~/.bash_completion.d/pagesmith\n\n\
                  Generate zsh completions:\n    pagesmith completions zsh > ~/.zfunc/_pagesmith\n\n\
                  Generate fish completions:\n    pagesmith completions fish > ~/.config/fish/completions/pagesmith.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
