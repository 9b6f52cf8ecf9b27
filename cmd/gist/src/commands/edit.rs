//! Gist edit command.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use gistkit_gist::{Client, Credential, EditGistRequest, LocalFiles};

use super::{
    create_client, get_context, load_credential, print_info, print_success, print_verbose,
    write_failure,
};
use crate::Cli;

/// Edit a gist from local files.
///
/// By default the gist ends up holding exactly the given files; files it
/// already had that are not listed are deleted. Pass --keep-existing to
/// only add or update the listed files.
#[derive(Args)]
pub struct EditCommand {
    /// Gist ID
    #[arg(long = "id", visible_alias = "gist-id", alias = "gist_id")]
    pub id: String,

    /// Path to files
    #[arg(short = 'f', long = "files", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// New description (left unchanged when omitted)
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Keep files of the gist that are not listed
    #[arg(long)]
    pub keep_existing: bool,
}

impl EditCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let files = LocalFiles::collect(&self.files)?;
        let ctx = get_context(cli)?;
        let credential = load_credential(cli, ctx.as_ref())?;

        if let Some(ctx) = &ctx {
            print_verbose(cli, &format!("Using context: {}", ctx.name));
        }
        print_verbose(cli, &format!("Gist ID: {}", self.id));
        print_verbose(cli, &format!("Files: {}", files.names().collect::<Vec<_>>().join(", ")));

        let client = create_client(ctx.as_ref())?;
        let options = EditOptions {
            description: self.description.clone(),
            keep_existing: self.keep_existing,
        };
        edit(&client, &credential, &self.id, files, options, &mut std::io::stdout()).await
    }
}

pub(crate) struct EditOptions {
    pub description: Option<String>,
    pub keep_existing: bool,
}

/// Edits the gist and writes its URL to `out`.
pub(crate) async fn edit<W: Write>(
    client: &Client,
    credential: &Credential,
    id: &str,
    files: LocalFiles,
    options: EditOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let gists = client.gists();

    let req = if options.keep_existing {
        EditGistRequest::merging(files.into_contents(), options.description)
    } else {
        let existing = gists.get(id).await.map_err(|e| write_failure("edit", e))?;
        EditGistRequest::replacing(&existing, files.into_contents(), options.description)
    };

    let deleted: Vec<&str> = req.deleted().collect();
    if !deleted.is_empty() {
        print_info(&format!("Removing: {}", deleted.join(", ")));
    }

    let gist = gists
        .edit(credential, id, &req)
        .await
        .map_err(|e| write_failure("edit", e))?;

    print_success(&format!("Gist edited! ({})", gist.id));
    writeln!(out, "{}", gist.html_url)?;
    Ok(())
}
