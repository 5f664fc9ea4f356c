use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iss-tracker", version, about = "Status answers about the International Space Station")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Answer one request envelope read from FILE, or from stdin if omitted.
    Handle { file: Option<PathBuf> },
    /// Replace the stored element set with the provider's current one.
    Refresh,
}

impl Cli {
    /// The selected subcommand. Without one, a request is handled from stdin.
    pub fn command(self) -> Commands { self.command.unwrap_or(Commands::Handle { file: None }) }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_handle_from_stdin() {
        let cli = Cli::try_parse_from(["iss-tracker"]).unwrap();
        assert_eq!(cli.command(), Commands::Handle { file: None });
    }

    #[test]
    fn test_handle_with_file_and_refresh() {
        let cli = Cli::try_parse_from(["iss-tracker", "handle", "request.json"]).unwrap();
        assert_eq!(cli.command(), Commands::Handle { file: Some(PathBuf::from("request.json")) });
        let cli = Cli::try_parse_from(["iss-tracker", "refresh"]).unwrap();
        assert_eq!(cli.command(), Commands::Refresh);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = Cli::try_parse_from(["iss-tracker", "refrsh"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
        assert!(Cli::try_parse_from(["iss-tracker", "refresh", "extra"]).is_err());
    }
}
