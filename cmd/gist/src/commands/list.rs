//! User gist listing command.

use std::io::Write;

use clap::Args;

use gistkit_gist::{Client, Gist};

use super::{create_client, get_context, print_error, print_info, print_verbose};
use crate::Cli;

/// List a user's gists.
///
/// Gists are shown in the order the API returns them, newest first.
#[derive(Args)]
pub struct ListCommand {
    /// Owner of the gists
    pub username: String,
}

impl ListCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;
        if let Some(ctx) = &ctx {
            print_verbose(cli, &format!("Using context: {}", ctx.name));
        }
        print_verbose(cli, &format!("Username: {}", self.username));

        let client = create_client(ctx.as_ref())?;
        list(&client, &self.username, &mut std::io::stdout()).await
    }
}

/// Writes one block per gist of `username` to `out`.
pub(crate) async fn list<W: Write>(
    client: &Client,
    username: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let gists = match client.gists().list_for_user(username).await {
        Ok(gists) => gists,
        Err(e) if e.is_bad_reference() => {
            print_error(&format!("username '{}' is bad ({})", username, e));
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("failed to list gists of {}: {}", username, e)),
    };

    if gists.is_empty() {
        print_info(&format!("{} has no public gists", username));
        return Ok(());
    }

    let total = gists.len();
    for (i, gist) in gists.iter().enumerate() {
        write_entry(out, i + 1, total, gist)?;
    }
    out.flush()?;

    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    position: usize,
    total: usize,
    gist: &Gist,
) -> std::io::Result<()> {
    let name = gist.files.first().map(|(name, _)| name).unwrap_or("(no files)");

    writeln!(out, "=== {} of {} ===", position, total)?;
    writeln!(out, "Name:        {}", name)?;
    writeln!(out, "Description: {}", gist.description_or_empty())?;
    writeln!(out, "URL:         {}", gist.html_url)?;
    writeln!(out, "ID:          {}", gist.id)
}
