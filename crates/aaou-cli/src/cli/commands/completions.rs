//! `aaou completions` – shell completion scripts on stdout.

use clap::Command;
use clap_complete::{generate, Shell};

pub fn run_completions(cmd: &mut Command, shell: Shell) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut std::io::stdout());
}
