//! CLI commands.

mod auth;
mod config;
mod dynamic;
mod mutate;
mod resources;
mod summarize;
mod view;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::client::ApiClient;
use crate::config::{http_timeout, Config, CredentialStore};
use crate::error::CliError;
use crate::output::OutputFormat;

/// xbe - Browse and manage XBE platform data from the command line.
#[derive(Debug, Parser)]
#[command(name = "xbe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// API base URL.
    #[arg(long, global = true, env = "XBE_BASE_URL")]
    base_url: Option<String>,

    /// API token (overrides XBE_TOKEN, XBE_API_TOKEN and the stored token).
    #[arg(long, global = true)]
    token: Option<String>,

    /// Never send a token.
    #[arg(long, global = true)]
    no_auth: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in, log out, and inspect the current token.
    Auth(auth::AuthCommand),

    /// Read resources (list, show).
    View(view::ViewCommand),

    /// Change resources (create, update, delete).
    Do(mutate::DoCommand),

    /// Run server-side summaries.
    Summarize(summarize::SummarizeCommand),

    /// List the resources this CLI knows about.
    Resources(resources::ResourcesCommand),

    /// Show or change saved configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let credentials = CredentialStore::open()?;
        let base_url = config.resolve_base_url(self.base_url.as_deref());

        let token = if self.no_auth {
            None
        } else {
            resolve_token(
                self.token,
                env_token("XBE_TOKEN"),
                env_token("XBE_API_TOKEN"),
                &credentials,
                &base_url,
            )
        };
        match &token {
            Some(token) => debug!(source = token.source.as_str(), %base_url, "resolved token"),
            None => debug!(%base_url, no_auth = self.no_auth, "no token"),
        }

        let ctx = CommandContext {
            config,
            credentials,
            base_url,
            token,
            no_auth: self.no_auth,
            format: OutputFormat::from_json_flag(self.json),
        };

        match self.command {
            Commands::Auth(cmd) => cmd.run(ctx).await,
            Commands::View(cmd) => cmd.run(ctx).await,
            Commands::Do(cmd) => cmd.run(ctx).await,
            Commands::Summarize(cmd) => cmd.run(ctx).await,
            Commands::Resources(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("xbe {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn env_token(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Where the active token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Env,
    Store,
}

impl TokenSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenSource::Flag => "flag",
            TokenSource::Env => "env",
            TokenSource::Store => "store",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub value: String,
    pub source: TokenSource,
}

/// Token precedence: `--token`, `XBE_TOKEN`, `XBE_API_TOKEN`, then the token
/// stored for `base_url`. Blank values are skipped.
fn resolve_token(
    flag: Option<String>,
    xbe_token: Option<String>,
    api_token: Option<String>,
    store: &CredentialStore,
    base_url: &str,
) -> Option<ResolvedToken> {
    let explicit = [
        (flag, TokenSource::Flag),
        (xbe_token, TokenSource::Env),
        (api_token, TokenSource::Env),
    ];
    explicit
        .into_iter()
        .find_map(|(value, source)| {
            value
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| ResolvedToken { value, source })
        })
        .or_else(|| {
            store
                .get(base_url)
                .map(|stored| stored.token.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| ResolvedToken {
                    value,
                    source: TokenSource::Store,
                })
        })
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub credentials: CredentialStore,
    pub base_url: String,
    pub token: Option<ResolvedToken>,
    /// `--no-auth` was given; reads go out without a token.
    pub no_auth: bool,
    pub format: OutputFormat,
}

impl CommandContext {
    fn client(&self) -> Result<ApiClient> {
        ApiClient::new(
            &self.base_url,
            self.token.as_ref().map(|token| token.value.as_str()),
            http_timeout(),
        )
    }

    /// API client for reads. A token is required unless `--no-auth` was given.
    pub fn read_client(&self) -> Result<ApiClient> {
        if self.no_auth {
            return self.client();
        }
        self.authed_client()
    }

    /// API client for commands that must be authenticated.
    pub fn authed_client(&self) -> Result<ApiClient> {
        if self.token.is_none() {
            return Err(CliError::AuthRequired.into());
        }
        self.client()
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::catalog::Verb;
    use crate::config::StoredCredential;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn token_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open_in(dir.path()).unwrap();
        store.insert("https://a.example", StoredCredential::new("stored"));

        let resolve = |flag: Option<&str>, xbe: Option<&str>, api: Option<&str>| {
            resolve_token(
                flag.map(str::to_string),
                xbe.map(str::to_string),
                api.map(str::to_string),
                &store,
                "https://a.example",
            )
            .map(|token| (token.value, token.source))
        };

        assert_eq!(
            resolve(Some("f"), Some("x"), Some("a")),
            Some(("f".to_string(), TokenSource::Flag))
        );
        assert_eq!(
            resolve(Some("  "), Some("x"), Some("a")),
            Some(("x".to_string(), TokenSource::Env))
        );
        assert_eq!(
            resolve(None, None, Some("a")),
            Some(("a".to_string(), TokenSource::Env))
        );
        assert_eq!(
            resolve(None, None, None),
            Some(("stored".to_string(), TokenSource::Store))
        );

        let other = resolve_token(None, None, None, &store, "https://b.example");
        assert!(other.is_none());
    }

    fn context(token: Option<&str>, no_auth: bool) -> (tempfile::TempDir, CommandContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext {
            config: Config::default(),
            credentials: CredentialStore::open_in(dir.path()).unwrap(),
            base_url: "https://server.x-b-e.com".to_string(),
            token: token.map(|value| ResolvedToken {
                value: value.to_string(),
                source: TokenSource::Flag,
            }),
            no_auth,
            format: OutputFormat::Table,
        };
        (dir, ctx)
    }

    #[test]
    fn reads_need_a_token_unless_no_auth() {
        let (_dir, anonymous) = context(None, false);
        let err = anonymous.read_client().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::AuthRequired)
        ));

        let (_dir, opted_out) = context(None, true);
        assert!(opted_out.read_client().is_ok());
        assert!(opted_out.authed_client().is_err());

        let (_dir, signed_in) = context(Some("tok"), false);
        assert!(signed_in.read_client().is_ok());
    }

    #[test]
    fn view_parses_catalog_flags() {
        let cli = Cli::try_parse_from([
            "xbe", "view", "truckers", "list", "--broker", "7", "--active", "--limit", "10",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);

        let Commands::View(view) = cli.command else {
            panic!("expected view");
        };
        let invocation = view.invocation();
        assert_eq!(invocation.spec.name, "truckers");
        assert_eq!(invocation.verb, Verb::List);
        assert_eq!(
            dynamic::text(&invocation.matches, "broker").as_deref(),
            Some("7")
        );
        assert!(dynamic::switch(&invocation.matches, "active"));
        assert_eq!(dynamic::number(&invocation.matches, "limit"), 10);
    }

    #[test]
    fn write_verbs_live_under_do() {
        assert!(Cli::try_parse_from(["xbe", "view", "tractors", "create", "--number", "1"]).is_err());
        assert!(Cli::try_parse_from(["xbe", "do", "tractors", "list"]).is_err());
        assert!(Cli::try_parse_from(["xbe", "do", "brokers", "delete", "1"]).is_err());
        assert!(Cli::try_parse_from(["xbe", "view", "spaceships", "list"]).is_err());

        let cli = Cli::try_parse_from([
            "xbe", "do", "tractors", "update", "42", "--status", "active",
        ])
        .unwrap();
        let Commands::Do(cmd) = cli.command else {
            panic!("expected do");
        };
        let invocation = cmd.invocation();
        assert_eq!(invocation.verb, Verb::Update);
        assert_eq!(dynamic::text(&invocation.matches, "id").as_deref(), Some("42"));
    }

    #[test]
    fn summarize_parses_summary_flags() {
        let cli = Cli::try_parse_from([
            "xbe",
            "summarize",
            "shift-summary",
            "create",
            "--start-on",
            "2025-01-01",
            "--end-on",
            "2025-01-31",
            "--group-by",
            "trucker,driver",
            "--metric",
            "tons_sum",
            "--filter",
            "broker=1",
        ])
        .unwrap();
        let Commands::Summarize(cmd) = cli.command else {
            panic!("expected summarize");
        };
        let (spec, summarize::SummaryFlags::Matrix(flags)) = cmd.target() else {
            panic!("expected matrix flags");
        };
        assert_eq!(spec.name, "shift-summary");
        assert_eq!(flags.dates.start_on.as_deref(), Some("2025-01-01"));
        assert_eq!(flags.args.group_by.as_deref(), Some("trucker,driver"));
        assert_eq!(flags.args.metric, vec!["tons_sum"]);
        assert_eq!(flags.args.filter, vec!["broker=1"]);
    }

    #[test]
    fn summary_flags_follow_the_summary() {
        assert!(Cli::try_parse_from([
            "xbe", "summarize", "lane-summary", "create", "--start-on", "2025-01-01",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "xbe",
            "summarize",
            "lane-summary",
            "create",
            "--min-transactions",
            "25",
            "--use-driver-day-trip-lead-minutes",
            "--optional-feature",
            "beta_x",
        ])
        .unwrap();
        let Commands::Summarize(cmd) = cli.command else {
            panic!("expected summarize");
        };
        let (_, summarize::SummaryFlags::Matrix(flags)) = cmd.target() else {
            panic!("expected matrix flags");
        };
        assert_eq!(flags.minimum, 25);
        assert_eq!(
            flags.features,
            vec!["beta_x", "cycle_summary_use_driver_day_trip_lead_minutes"]
        );

        assert!(Cli::try_parse_from(["xbe", "summarize", "transport-summary", "create"]).is_err());
        let cli = Cli::try_parse_from([
            "xbe",
            "summarize",
            "transport-summary",
            "create",
            "--entity-type",
            "live_loads",
            "--filter",
            "broker=1",
        ])
        .unwrap();
        let Commands::Summarize(cmd) = cli.command else {
            panic!("expected summarize");
        };
        let (_, summarize::SummaryFlags::Status(args)) = cmd.target() else {
            panic!("expected status flags");
        };
        assert_eq!(args.entity_type, "live_loads");
        assert_eq!(args.filter, vec!["broker=1"]);
    }
}
