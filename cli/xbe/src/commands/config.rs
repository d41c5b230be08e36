//! Config commands (saved base URL).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{config_dir, normalize_base_url, Config, DEFAULT_BASE_URL};
use crate::error::CliError;
use crate::output::{print_json, print_success};

use super::CommandContext;

/// Show or change saved configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Save the default API base URL.
    SetBaseUrl {
        /// Base URL, e.g. https://server.x-b-e.com
        url: String,
    },

    /// Forget saved configuration (stored tokens are kept).
    Reset,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    base_url: String,
    saved_base_url: Option<String>,
    default_base_url: &'static str,
    config_dir: String,
    credentials_file: String,
    logged_in: Vec<String>,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetBaseUrl { url } => set_base_url(ctx, &url),
            ConfigSubcommand::Reset => reset(ctx),
        }
    }
}

/// Accept only absolute http(s) URLs; returns the normalized form.
fn validate_base_url(raw: &str) -> Result<String, CliError> {
    let url = normalize_base_url(raw);
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(url),
        _ => Err(CliError::validation(format!(
            "base URL must start with http:// or https://, got '{}'",
            raw.trim()
        ))),
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        base_url: ctx.base_url.clone(),
        saved_base_url: ctx.config.base_url.clone(),
        default_base_url: DEFAULT_BASE_URL,
        config_dir: config_dir()?.display().to_string(),
        credentials_file: ctx.credentials.path().display().to_string(),
        logged_in: ctx.credentials.base_urls().map(str::to_string).collect(),
    };

    if ctx.is_json() {
        return print_json(&view);
    }

    println!("base_url: {}", view.base_url);
    println!(
        "saved_base_url: {}",
        view.saved_base_url.as_deref().unwrap_or("-")
    );
    println!("config_dir: {}", view.config_dir);
    println!("credentials_file: {}", view.credentials_file);
    if view.logged_in.is_empty() {
        println!("logged_in: -");
    } else {
        println!("logged_in: {}", view.logged_in.join(", "));
    }
    Ok(())
}

fn set_base_url(mut ctx: CommandContext, raw: &str) -> Result<()> {
    let url = validate_base_url(raw)?;
    ctx.config.base_url = Some(url.clone());
    ctx.config.save()?;

    if ctx.is_json() {
        print_json(&serde_json::json!({ "base_url": url }))
    } else {
        print_success(&format!("Saved base URL {url}"));
        Ok(())
    }
}

fn reset(ctx: CommandContext) -> Result<()> {
    Config::default().save()?;

    if ctx.is_json() {
        print_json(&serde_json::json!({ "ok": true }))
    } else {
        print_success(&format!("Reset configuration (base URL is now {DEFAULT_BASE_URL})"));
        Ok(())
    }
}
