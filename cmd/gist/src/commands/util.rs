//! Utility functions for CLI commands.

use std::path::Path;
use std::time::Duration;

use gistkit_cli::config::{load_config, Config, Context};
use gistkit_cli::token::{load_token_file, DEFAULT_TOKEN_FILE};
use gistkit_gist::{Client, Credential, Visibility};

use crate::Cli;

pub const APP_NAME: &str = "gist-api";

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Gets the context to use, if any.
///
/// Read-only commands work without one, so only an explicitly named but
/// unknown context is an error.
pub fn get_context(cli: &Cli) -> anyhow::Result<Option<Context>> {
    let cfg = get_config(cli)?;

    match cfg.resolve_context(cli.context.as_deref()) {
        Some(ctx) => Ok(Some(ctx.clone())),
        None => match cli.context.as_deref() {
            Some(name) if !name.is_empty() => anyhow::bail!("context '{}' not found", name),
            _ => Ok(None),
        },
    }
}

/// Creates a Gists API client from context configuration.
pub fn create_client(ctx: Option<&Context>) -> anyhow::Result<Client> {
    let mut builder = Client::builder();

    if let Some(ctx) = ctx {
        if !ctx.base_url.is_empty() {
            builder = builder.base_url(&ctx.base_url);
        }
        if ctx.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(ctx.timeout));
        }
    }

    Ok(builder.build()?)
}

/// Loads the credential for write commands.
///
/// Lookup order: `--token-file`, the context's token, the context's token
/// file, then `./TOKEN`.
pub fn load_credential(cli: &Cli, ctx: Option<&Context>) -> anyhow::Result<Credential> {
    if let Some(path) = cli.token_file.as_deref() {
        print_verbose(cli, &format!("Reading token from {}", path));
        return Ok(Credential::new(load_token_file(path)?)?);
    }

    if let Some(ctx) = ctx {
        if !ctx.token.is_empty() {
            print_verbose(cli, &format!("Using token from context: {}", ctx.name));
            return Ok(Credential::new(&ctx.token)?);
        }
        if !ctx.token_file.is_empty() {
            print_verbose(cli, &format!("Reading token from {}", ctx.token_file));
            return Ok(Credential::new(load_token_file(&ctx.token_file)?)?);
        }
    }

    if Path::new(DEFAULT_TOKEN_FILE).is_file() {
        print_verbose(cli, &format!("Reading token from ./{}", DEFAULT_TOKEN_FILE));
        return Ok(Credential::new(load_token_file(DEFAULT_TOKEN_FILE)?)?);
    }

    anyhow::bail!(
        "no access token found. Use --token-file, add a context with 'gist-api config add-context', or create ./{}",
        DEFAULT_TOKEN_FILE
    )
}

/// Parses a visibility flag value.
pub fn parse_visibility(s: &str) -> Result<Visibility, String> {
    s.parse::<Visibility>().map_err(|e| e.to_string())
}

/// Converts an SDK error from a write command into a user-facing error.
pub fn write_failure(action: &str, err: gistkit_gist::Error) -> anyhow::Error {
    if err.is_unauthorized() {
        anyhow::anyhow!("{} failed: the access token was rejected ({})", action, err)
    } else if err.is_transport() {
        anyhow::anyhow!("{} failed: could not reach the API ({})", action, err)
    } else {
        anyhow::anyhow!("{} failed: {}", action, err)
    }
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Prints error message.
pub fn print_error(msg: &str) {
    eprintln!("\x1b[31m✗\x1b[0m {}", msg);
}

/// Prints info message.
pub fn print_info(msg: &str) {
    eprintln!("\x1b[34mℹ\x1b[0m {}", msg);
}

/// Writes a config whose current context points at `base_url`.
#[cfg(test)]
pub(crate) fn write_test_config(
    dir: &std::path::Path,
    base_url: &str,
    token: Option<&str>,
) -> std::path::PathBuf {
    let mut cfg = load_config(APP_NAME, dir.join("config.yaml").to_str()).unwrap();
    let ctx = Context {
        token: token.unwrap_or_default().to_string(),
        base_url: base_url.to_string(),
        ..Default::default()
    };
    cfg.add_context("test", ctx).unwrap();
    cfg.use_context("test").unwrap();
    cfg.path().to_path_buf()
}
