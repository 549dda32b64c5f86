use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    binmirror completions bash > ~/.bash_completion.d/binmirror\n\n\
                  Generate zsh completions:\n    binmirror completions zsh > ~/.zfunc/_binmirror\n\n\
                  Generate fish completions:\n    binmirror completions fish > ~/.config/fish/completions/binmirror.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
