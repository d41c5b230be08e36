//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use xbe_jsonapi::JsonApiError;

/// Exit code for usage and validation failures (matches clap).
pub const EXIT_USAGE: i32 = 2;

/// Exit code for everything else.
pub const EXIT_FAILURE: i32 = 1;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Authentication required. Run 'xbe auth login' first.")]
    AuthRequired,

    #[error("Not authenticated: the API rejected the token.")]
    NotAuthenticated,

    #[error("API error ({status}): {summary}")]
    Api {
        status: u16,
        summary: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] JsonApiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Error for a required flag that was not given.
    pub fn missing_flag(flag: &str) -> Self {
        Self::Validation(format!("--{flag} is required"))
    }

    /// Turn a 404 from the API into `NotFound` for the given subject.
    pub fn or_not_found(self, subject: impl FnOnce() -> String) -> Self {
        match self {
            CliError::Api { status: 404, .. } => CliError::NotFound(subject()),
            other => other,
        }
    }
}

/// Process exit code for an error returned from a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Validation(_)) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };
    match cli_err {
        CliError::AuthRequired | CliError::NotAuthenticated => {
            eprintln!(
                "\n{}",
                "Hint: Run `xbe auth login`, or pass --token / set XBE_TOKEN.".yellow()
            );
        }
        CliError::Api { status: 403, .. } => {
            eprintln!(
                "\n{}",
                "Hint: You may not have permission for this operation.".yellow()
            );
        }
        CliError::Api { summary, body, .. } => {
            let body = body.trim();
            if !body.is_empty() && body != summary.trim() {
                eprintln!("\n{}\n{}", "Response body:".dimmed(), body);
            }
        }
        CliError::Network(_) => {
            eprintln!(
                "\n{}",
                "Hint: Check your network connection and --base-url.".yellow()
            );
        }
        _ => {}
    }
}
