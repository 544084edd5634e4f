mod shell_completions;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Work with GitHub from the command line
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The action to execute
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate shell completion scripts
    #[command(
        override_usage = "octo completion -s <shell>",
        long_about = shell_completions::LONG_ABOUT
    )]
    Completion {
        /// Shell type: {bash|zsh|fish|powershell}
        #[arg(short = 's', long)]
        shell: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.action {
        Action::Completion { shell } => {
            shell_completions::command(shell.as_deref().unwrap_or_default())
        }
    }
}
