use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Generates deeply nested JSON fixtures for recursion-limit testing.
#[derive(Parser, Debug)]
#[command(name = "gen-fixtures", version, about = "Generate JSON parser stress fixtures")]
pub struct Cli {
    /// Directory to write fixtures into (defaults to the executable's directory).
    #[arg(short = 'o', long = "out-dir", global = true)]
    pub out_dir: Option<PathBuf>,
    /// Report what would be written without touching the filesystem.
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Singly nested `{"next":...}` chains, one file per depth tier (default).
    Recursion,
    /// Flat arrays of records sized in megabytes.
    Sizes(SizesArgs),
    /// Recursion fixtures followed by size fixtures.
    All(SizesArgs),
}

#[derive(Args, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SizesArgs {
    /// Overwrite size fixtures that already exist.
    #[arg(long)]
    pub force: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_selects_default_run() {
        let cli = Cli::try_parse_from(["gen-fixtures"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.out_dir.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["gen-fixtures", "sizes", "--force", "-o", "out", "-vv"]).unwrap();
        assert_eq!(cli.command, Some(Command::Sizes(SizesArgs { force: true })));
        assert_eq!(cli.out_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gen-fixtures", "recursion", "extra"]).is_err());
    }
}
