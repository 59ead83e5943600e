//! Shell completion generation for the redbead CLI.
//!
//! ```bash
//! redbead completions bash > ~/.local/share/bash-completion/completions/redbead
//! redbead completions zsh > ~/.zfunc/_redbead
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions and write to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "redbead", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
