//! Single gist command.

use std::io::Write;

use clap::Args;

use gistkit_gist::Client;

use super::{create_client, get_context, print_error, print_verbose};
use crate::Cli;

/// Print the content of a gist's first file.
#[derive(Args)]
pub struct GistCommand {
    /// Gist ID
    pub id: String,
}

impl GistCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;
        if let Some(ctx) = &ctx {
            print_verbose(cli, &format!("Using context: {}", ctx.name));
        }
        print_verbose(cli, &format!("Gist ID: {}", self.id));

        let client = create_client(ctx.as_ref())?;
        fetch(&client, &self.id, &mut std::io::stdout()).await
    }
}

/// Writes the first file of a gist to `out`.
///
/// An unknown or malformed id is reported and treated as a normal outcome.
pub(crate) async fn fetch<W: Write>(client: &Client, id: &str, out: &mut W) -> anyhow::Result<()> {
    match client.gists().primary_content(id).await {
        Ok(content) => {
            out.write_all(&content)?;
            if content.last() != Some(&b'\n') {
                writeln!(out)?;
            }
            out.flush()?;
            Ok(())
        }
        Err(e) if e.is_bad_reference() => {
            print_error(&format!("gist id '{}' is bad ({})", id, e));
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("failed to fetch gist {}: {}", id, e)),
    }
}
