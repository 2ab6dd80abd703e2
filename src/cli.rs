//! Clap adapter: the thin presentation layer over the core operations.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Everything
//! with state or invariants lives in [`ops`](crate::ops) and below; this
//! module parses arguments, prints, and maps outcomes to exit codes:
//!
//! - bare `dbswitch` prints help and exits 0
//! - an unknown subcommand is a clap parse error (non-zero exit)
//! - `current` with no active connection exits 1
//! - every other success exits 0

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::DbswitchError;
use crate::ops;

#[derive(Debug, Parser)]
#[command(
    name = "dbswitch",
    version,
    about = "Switch between database connections kept in a .dbconfig file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Show all configured connections.
    List,
    /// Show the active connection.
    Current,
    /// Mark a connection as active.
    Use {
        /// Client key from the config file.
        key: String,
    },
}

/// Parse process arguments, execute, and return the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, DbswitchError::ConfigNotFound { .. }) {
                eprintln!("Create one, e.g. .dbconfig.json with a \"clients\" mapping.");
            }
            1
        }
    }
}

fn execute(cli: Cli) -> Result<i32, DbswitchError> {
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return Ok(0);
    };

    match command {
        Command::List => {
            for conn in ops::list_connections()? {
                let marker = if conn.active { "*" } else { " " };
                println!("{marker} {}\t{}", conn.key, conn.connection_string);
            }
            Ok(0)
        }
        Command::Current => match ops::get_active_connection()? {
            Some(conn) => {
                println!("{}\t{}", conn.key, conn.connection_string);
                Ok(0)
            }
            None => {
                eprintln!("No active connection. Pick one with: dbswitch use <key>");
                Ok(1)
            }
        },
        Command::Use { key } => {
            ops::set_active_connection(&key)?;
            println!("Active connection set to '{key}'");
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn parse_list() {
        let cli = parse(&["dbswitch", "list"]);
        assert_eq!(cli.command, Some(Command::List));
    }

    #[test]
    fn parse_current() {
        let cli = parse(&["dbswitch", "current"]);
        assert_eq!(cli.command, Some(Command::Current));
    }

    #[test]
    fn parse_use_with_key() {
        let cli = parse(&["dbswitch", "use", "staging"]);
        assert_eq!(
            cli.command,
            Some(Command::Use {
                key: "staging".into()
            })
        );
    }

    #[test]
    fn parse_bare_invocation_is_no_command() {
        let cli = parse(&["dbswitch"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn use_requires_a_key() {
        assert!(Cli::try_parse_from(["dbswitch", "use"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_a_parse_error() {
        assert!(Cli::try_parse_from(["dbswitch", "frobnicate"]).is_err());
    }

    #[test]
    fn help_flag_parses_as_clap_exit() {
        // clap models --help as an "error" carrying the rendered help.
        let err = Cli::try_parse_from(["dbswitch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
