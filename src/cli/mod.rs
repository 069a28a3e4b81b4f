//! CLI module for the demo key server
//!
//! - `serve`: run the HTTP server (default when no subcommand is given)

pub mod serve;

use clap::{Parser, Subcommand};

/// Demo key server - issues throttled demo API keys by email
#[derive(Parser)]
#[command(name = "demo-key-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::parse_from(["demo-key-server"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Serve(args) if args.port.is_none()));
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::parse_from(["demo-key-server", "serve", "--port", "4000"]);
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(4000)),
            None => panic!("expected serve"),
        }
    }
}
