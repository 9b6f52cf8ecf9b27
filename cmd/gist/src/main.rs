//! Gist API CLI - A command line interface for GitHub Gists.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, CreateCommand, EditCommand, GistCommand, ListCommand};

/// Gist API CLI - A command line interface for GitHub Gists.
///
/// This tool allows you to:
///   - Print the first file of a gist
///   - List a user's gists
///   - Create a gist from local files
///   - Edit a gist from local files
///
/// Configuration is stored in ~/.gistkit/gist-api/ and supports multiple contexts,
/// similar to kubectl's context management. Without a context, the token is
/// read from ./TOKEN.
#[derive(Parser)]
#[command(name = "gist-api")]
#[command(about = "Github Gists CLI")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.gistkit/gist-api/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// File holding the access token for create and edit
    #[arg(long, global = true)]
    pub token_file: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the content of a gist's first file
    Gist(GistCommand),
    /// List a user's gists
    List(ListCommand),
    /// Create a gist from local files
    Create(CreateCommand),
    /// Edit a gist from local files
    Edit(EditCommand),
    /// Manage CLI configuration
    Config(ConfigCommand),
}

/// Rewrites the single-dash `-id` spelling to `--id` so clap does not read
/// it as the clustered short flags `-i -d`. Arguments after `--` are left
/// alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some("-id") => Some(OsString::from("--id")),
            Some(s) if s.starts_with("-id=") => Some(OsString::from(format!("-{}", s))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Gist(cmd) => cmd.run(&cli).await,
        Commands::List(cmd) => cmd.run(&cli).await,
        Commands::Create(cmd) => cmd.run(&cli).await,
        Commands::Edit(cmd) => cmd.run(&cli).await,
        Commands::Config(cmd) => cmd.run(&cli).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_normalize_legacy_id_flag() {
        let args = normalize_args(
            ["gist-api", "edit", "-id", "abc", "-id=def", "--", "-id"]
                .iter()
                .map(OsString::from),
        );
        let args: Vec<_> = args.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(
            args,
            vec!["gist-api", "edit", "--id", "abc", "--id=def", "--", "-id"]
        );
    }

    #[test]
    fn test_parse_gist() {
        let cli = parse(&["gist-api", "gist", "0ba2b2a3"]).unwrap();
        assert!(matches!(cli.command, Commands::Gist(_)));
    }

    #[test]
    fn test_parse_create() {
        let cli = parse(&[
            "gist-api", "create", "-f", "a.txt", "b.txt", "-d", "scratch", "-p", "NO",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(cmd) => {
                assert_eq!(cmd.files.len(), 2);
                assert_eq!(cmd.description, "scratch");
                assert_eq!(cmd.public, gistkit_gist::Visibility::Private);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_parse_create_defaults_public() {
        let cli = parse(&["gist-api", "create", "-f", "a.txt"]).unwrap();
        match cli.command {
            Commands::Create(cmd) => {
                assert_eq!(cmd.description, "");
                assert_eq!(cmd.public, gistkit_gist::Visibility::Public);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_parse_create_rejects_bad_visibility() {
        let err = parse(&["gist-api", "create", "-f", "a.txt", "-p", "maybe"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_create_requires_files() {
        assert!(parse(&["gist-api", "create", "-d", "x"]).is_err());
    }

    #[test]
    fn test_parse_edit_with_legacy_id() {
        let cli = parse(&["gist-api", "edit", "-id", "abc", "-f", "a.txt"]).unwrap();
        match cli.command {
            Commands::Edit(cmd) => {
                assert_eq!(cmd.id, "abc");
                assert_eq!(cmd.description, None);
                assert!(!cmd.keep_existing);
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_unknown_subcommand() {
        let err = parse(&["gist-api", "fork", "abc"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
        assert!(err.to_string().contains("fork"));
    }
}
