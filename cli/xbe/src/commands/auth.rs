//! Authentication commands.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::client::ApiClient;
use crate::config::StoredCredential;
use crate::error::CliError;
use crate::output::{mask_token, print_info, print_json, print_success};

use super::{CommandContext, TokenSource};

const CURRENT_USER_PATH: &str = "/v1/users/me";

/// Authentication commands.
#[derive(Debug, Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Save a token for the current base URL (from --token, XBE_TOKEN, or stdin).
    Login,

    /// Forget the stored token for the current base URL.
    Logout,

    /// Show whether a token is available and where it comes from.
    Status,

    /// Show who the token belongs to.
    Whoami,
}

/// The user a token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    fn describe(&self) -> String {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => format!("{name} <{email}>"),
            (Some(name), None) => name.clone(),
            (None, Some(email)) => email.clone(),
            (None, None) => format!("user {}", self.id),
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusReport {
    base_url: String,
    authenticated: bool,
    source: Option<&'static str>,
    token: Option<String>,
}

impl AuthCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            AuthSubcommand::Login => login(ctx).await,
            AuthSubcommand::Logout => logout(ctx),
            AuthSubcommand::Status => status(ctx),
            AuthSubcommand::Whoami => whoami(ctx).await,
        }
    }
}

/// Fetch the user behind the client's token.
pub async fn current_user(client: &ApiClient) -> Result<CurrentUser, CliError> {
    let doc = client.get(CURRENT_USER_PATH, &[]).await?;
    let user = doc.single()?;
    Ok(CurrentUser {
        id: user.id.clone(),
        name: user.attr_text("name"),
        email: user.attr_text("email-address"),
    })
}

/// First non-blank line of `reader`, trimmed.
fn read_token(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read token from stdin")?;
    let token = line.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

/// Log in: validate the token, then store it for the base URL.
async fn login(mut ctx: CommandContext) -> Result<()> {
    let explicit = ctx
        .token
        .as_ref()
        .filter(|token| token.source != TokenSource::Store)
        .map(|token| token.value.clone());

    let token = match explicit {
        Some(token) => token,
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprint!("Paste API token for {}: ", ctx.base_url);
                std::io::stderr().flush()?;
            }
            read_token(&mut stdin.lock())?
                .ok_or_else(|| CliError::validation("no token given"))?
        }
    };

    let client = ApiClient::new(&ctx.base_url, Some(&token), crate::config::http_timeout())?;
    let user = current_user(&client).await?;
    debug!(user_id = %user.id, base_url = %ctx.base_url, "token validated");

    let mut credential = StoredCredential::new(token);
    credential.user_id = Some(user.id.clone());
    credential.email = user.email.clone();
    credential.name = user.name.clone();
    ctx.credentials.insert(&ctx.base_url, credential);
    ctx.credentials.save()?;

    if ctx.is_json() {
        print_json(&user)?;
    } else {
        print_success(&format!("Logged in as {}.", user.describe()));
    }
    Ok(())
}

/// Remove the stored token; nothing stored is not an error.
fn logout(mut ctx: CommandContext) -> Result<()> {
    if ctx.credentials.remove(&ctx.base_url) {
        ctx.credentials.save()?;
        print_success(&format!("Logged out of {}.", ctx.base_url));
    } else {
        print_info(&format!("No stored token for {}.", ctx.base_url));
    }
    Ok(())
}

fn status_report(ctx: &CommandContext) -> StatusReport {
    StatusReport {
        base_url: ctx.base_url.clone(),
        authenticated: ctx.token.is_some(),
        source: ctx.token.as_ref().map(|token| token.source.as_str()),
        token: ctx.token.as_ref().map(|token| mask_token(&token.value)),
    }
}

fn status(ctx: CommandContext) -> Result<()> {
    let report = status_report(&ctx);
    if ctx.is_json() {
        return print_json(&report);
    }

    println!("  Base URL: {}", report.base_url);
    match (report.source, report.token) {
        (Some(source), Some(token)) => {
            println!("{} Token available", "Status:".green().bold());
            println!("  Source: {source}");
            println!("  Token: {token}");
        }
        _ => {
            println!("{} Not authenticated", "Status:".red().bold());
            println!("\nRun {} to log in.", "xbe auth login".cyan());
        }
    }
    Ok(())
}

async fn whoami(ctx: CommandContext) -> Result<()> {
    let client = ctx.authed_client()?;
    let user = current_user(&client).await?;

    if ctx.is_json() {
        print_json(&user)?;
    } else {
        println!("ID: {}", user.id);
        if let Some(name) = &user.name {
            println!("Name: {name}");
        }
        if let Some(email) = &user.email {
            println!("Email: {email}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::commands::ResolvedToken;
    use crate::config::{Config, CredentialStore};
    use crate::output::OutputFormat;

    #[test]
    fn token_comes_from_first_line() {
        let mut input = Cursor::new("  abc123  \nignored\n");
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("abc123"));

        let mut blank = Cursor::new("\n");
        assert_eq!(read_token(&mut blank).unwrap(), None);
    }

    #[tokio::test]
    async fn current_user_reads_me_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CURRENT_USER_PATH))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": "42",
                    "type": "users",
                    "attributes": { "name": "Ann Ops", "email-address": "ann@example.com" }
                }
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), Some("secret"), Duration::from_secs(5)).unwrap();
        let user = current_user(&client).await.unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.describe(), "Ann Ops <ann@example.com>");
    }

    #[test]
    fn status_masks_the_token() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext {
            config: Config::default(),
            credentials: CredentialStore::open_in(dir.path()).unwrap(),
            base_url: "https://server.x-b-e.com".to_string(),
            token: Some(ResolvedToken {
                value: "abcd-efgh-ijkl".to_string(),
                source: TokenSource::Env,
            }),
            no_auth: false,
            format: OutputFormat::Json,
        };
        let report = serde_json::to_value(status_report(&ctx)).unwrap();
        assert_eq!(report["authenticated"], json!(true));
        assert_eq!(report["source"], json!("env"));
        assert_eq!(report["token"], json!("abcd..."));
    }
}
