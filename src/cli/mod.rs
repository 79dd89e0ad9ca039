//! CLI module for the centroid cache server

pub mod serve;

use clap::{Parser, Subcommand};

/// Semantic result cache over a layered centroid index
#[derive(Parser)]
#[command(name = "centroid-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["centroid-cache", "serve", "--host", "127.0.0.1", "--port", "9000"])
            .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["centroid-cache", "serve"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }
}
