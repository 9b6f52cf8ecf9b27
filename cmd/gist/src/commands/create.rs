//! Gist creation command.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use gistkit_gist::{Client, CreateGistRequest, Credential, LocalFiles, Visibility};

use super::{
    create_client, get_context, load_credential, parse_visibility, print_success, print_verbose,
    write_failure,
};
use crate::Cli;

/// Create a gist from local files.
///
/// Files are named after their base name, so every path must have a
/// distinct one.
#[derive(Args)]
pub struct CreateCommand {
    /// Path to files
    #[arg(short = 'f', long = "files", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// A descriptive name for this gist
    #[arg(short = 'd', long, default_value = "")]
    pub description: String,

    /// Gist status (yes/no, true/false, ...). Default is public
    #[arg(short = 'p', long, default_value = "yes", value_parser = parse_visibility)]
    pub public: Visibility,
}

impl CreateCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let files = LocalFiles::collect(&self.files)?;
        let ctx = get_context(cli)?;
        let credential = load_credential(cli, ctx.as_ref())?;

        if let Some(ctx) = &ctx {
            print_verbose(cli, &format!("Using context: {}", ctx.name));
        }
        print_verbose(cli, &format!("Files: {}", files.names().collect::<Vec<_>>().join(", ")));
        print_verbose(cli, &format!("Visibility: {}", self.public));

        let client = create_client(ctx.as_ref())?;
        create(
            &client,
            &credential,
            files,
            &self.description,
            self.public,
            &mut std::io::stdout(),
        )
        .await
    }
}

/// Creates the gist and writes its URL to `out`.
pub(crate) async fn create<W: Write>(
    client: &Client,
    credential: &Credential,
    files: LocalFiles,
    description: &str,
    visibility: Visibility,
    out: &mut W,
) -> anyhow::Result<()> {
    let req = CreateGistRequest::new(files.into_contents(), description, visibility);
    let gist = client
        .gists()
        .create(credential, &req)
        .await
        .map_err(|e| write_failure("create", e))?;

    print_success(&format!("Gist created! ({}, {})", visibility, gist.id));
    writeln!(out, "{}", gist.html_url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::write_test_config;
    use clap::Parser;
    use mockito::{Matcher, Mock, Server};
    use serde_json::json;
    use std::path::Path;

    async fn run_cli(config: &Path, files: &[&Path]) -> anyhow::Result<()> {
        let mut args = vec![
            "gist-api".to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "create".to_string(),
            "-f".to_string(),
        ];
        args.extend(files.iter().map(|f| f.display().to_string()));
        args.extend(["-d".to_string(), "scratch".to_string()]);

        let cli = Cli::try_parse_from(args).unwrap();
        match &cli.command {
            crate::Commands::Create(cmd) => cmd.run(&cli).await,
            _ => panic!("expected create"),
        }
    }

    async fn no_requests(server: &mut Server) -> Vec<Mock> {
        let mut mocks = Vec::new();
        for method in ["GET", "POST", "PATCH"] {
            let mock = server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await;
            mocks.push(mock);
        }
        mocks
    }

    #[tokio::test]
    async fn test_run_missing_file_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("notes.txt");
        std::fs::write(&good, "hello").unwrap();
        let missing = dir.path().join("missing.txt");

        let mut server = Server::new_async().await;
        let mocks = no_requests(&mut server).await;
        let config = write_test_config(dir.path(), &server.url(), Some("ghp_test"));

        let err = run_cli(&config, &[&good, &missing]).await.unwrap_err();

        match err.downcast_ref::<gistkit_gist::Error>() {
            Some(gistkit_gist::Error::FileNotFound(path)) => assert_eq!(path, &missing),
            other => panic!("unexpected error: {other:?}"),
        }
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_run_without_credential_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("notes.txt");
        std::fs::write(&good, "hello").unwrap();

        let mut server = Server::new_async().await;
        let mocks = no_requests(&mut server).await;
        let config = write_test_config(dir.path(), &server.url(), None);

        let err = run_cli(&config, &[&good]).await.unwrap_err();

        assert!(err.to_string().contains("no access token found"), "got {err}");
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    fn client_for(server: &Server) -> Client {
        Client::builder().base_url(server.url()).build().unwrap()
    }

    #[tokio::test]
    async fn test_create_private_gist() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "hello").unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .match_header("authorization", "Bearer ghp_test")
            .match_body(Matcher::Json(json!({
                "files": {"notes.txt": {"content": "hello"}},
                "description": "scratch",
                "public": false
            })))
            .with_status(201)
            .with_body(
                json!({
                    "id": "c0ffee",
                    "html_url": "https://gist.github.com/c0ffee",
                    "description": "scratch",
                    "public": false,
                    "files": {"notes.txt": {"filename": "notes.txt", "raw_url": "", "content": "hello"}}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let credential = Credential::new("ghp_test").unwrap();
        let files = LocalFiles::collect([&notes]).unwrap();
        let mut out = Vec::new();
        create(
            &client_for(&server),
            &credential,
            files,
            "scratch",
            Visibility::Private,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "https://gist.github.com/c0ffee\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_rejected_token() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "hello").unwrap();

        let mut server = Server::new_async().await;
        server
            .mock("POST", "/gists")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let credential = Credential::new("ghp_expired").unwrap();
        let files = LocalFiles::collect([&notes]).unwrap();
        let mut out = Vec::new();
        let err = create(
            &client_for(&server),
            &credential,
            files,
            "",
            Visibility::Public,
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().starts_with("create failed: the access token was rejected"));
        assert!(out.is_empty());
    }
}
