//! Generate shell completions.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::aot::{generate, Shell};
use thiserror::Error;

use super::Args;

/// Manual installation notes, shown by `completion --help`.
pub const LONG_ABOUT: &str = "\
Generate shell completion scripts for octo commands.

The script is written to standard output; installing it is a manual
step. The exact config file locations might vary based on your system.
Make sure to restart your shell before testing whether completions are
working.

bash:

  First, ensure that you install `bash-completion` using your package
  manager. After, add this to your `~/.bash_profile`:

      eval \"$(octo completion -s bash)\"

zsh:

  Generate an `_octo` completion script and put it somewhere in your
  `$fpath`:

      octo completion -s zsh > /usr/local/share/zsh/site-functions/_octo

  Ensure that the following is present in your `~/.zshrc`:

      autoload -U compinit
      compinit -i

fish:

  Generate an `octo.fish` completion script:

      octo completion -s fish > ~/.config/fish/completions/octo.fish

powershell:

  Open your profile script and add the line:

      Invoke-Expression -Command $(octo completion -s powershell | Out-String)";

/// Shells we can emit a completion script for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShellKind {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Error returned when the requested shell is not a kind we recognize.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported shell type {0:?}")]
pub struct UnsupportedShellError(String);

impl FromStr for ShellKind {
    type Err = UnsupportedShellError;

    // Exact matches only: no aliases, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" => Ok(Self::PowerShell),
            other => Err(UnsupportedShellError(other.to_owned())),
        }
    }
}

impl From<ShellKind> for Shell {
    fn from(kind: ShellKind) -> Self {
        match kind {
            ShellKind::Bash => Shell::Bash,
            ShellKind::Zsh => Shell::Zsh,
            ShellKind::Fish => Shell::Fish,
            ShellKind::PowerShell => Shell::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to `out`.
///
/// The script is rendered from the given command tree, under the
/// invocation name the tree carries. Nothing is written to `out`
/// unless `shell` names a supported kind: the script is rendered in
/// memory first, so the sink sees the whole script or none of it.
pub fn write_script(shell: &str, cmd: &mut clap::Command, out: &mut dyn Write) -> Result<()> {
    let kind: ShellKind = shell.parse()?;
    let bin_name = cmd.get_name().to_owned();

    let mut script = Vec::new();
    generate(Shell::from(kind), cmd, bin_name, &mut script);

    out.write_all(&script)?;
    Ok(())
}

/// Execute the `completion` command.
pub fn command(shell: &str) -> Result<()> {
    write_script(shell, &mut Args::command(), &mut io::stdout())
}
