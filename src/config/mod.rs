//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge with the following precedence (lowest to highest):
//!
//! 1. **Defaults** – built-in application defaults
//! 2. **Configuration file** – `.slashbot.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `SLASHBOT_*`
//! 4. **Command-line arguments** – `--token`/`-t`, `--event-name`/`-e`,
//!    `--event-path`/`-p` and friends
//!
//! When a value is still missing after merging, the resolver methods fall
//! back to the workflow's `token` input, to the variables the GitHub Actions
//! runner exports (`GITHUB_TOKEN`, `GITHUB_EVENT_NAME`, `GITHUB_EVENT_PATH`,
//! `GITHUB_API_URL`) and to `DINGTALK_TOKEN`.
//!
//! ```toml
//! token = "ghp_example"
//! api_url = "https://api.github.com"
//! dingtalk_token = "robot-token"
//! notify_timeout_seconds = 10
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::BotError;
use crate::notify::{DEFAULT_DINGTALK_ENDPOINT, DingTalkConfig};

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_NOTIFY_TIMEOUT_SECONDS: u64 = 10;

/// Bot configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use slashbot::SlashbotConfig;
///
/// let config = SlashbotConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SLASHBOT",
    discovery(
        dotfile_name = ".slashbot.toml",
        config_file_name = "slashbot.toml",
        app_name = "slashbot"
    )
)]
pub struct SlashbotConfig {
    /// Token used to authenticate against the GitHub API.
    ///
    /// Falls back to the `token` variable, then to `GITHUB_TOKEN`.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Name of the webhook event being handled (e.g. `issue_comment`).
    ///
    /// Falls back to `GITHUB_EVENT_NAME`.
    #[ortho_config(cli_short = 'e')]
    pub event_name: Option<String>,

    /// Path of the JSON file holding the webhook payload.
    ///
    /// Falls back to `GITHUB_EVENT_PATH`.
    #[ortho_config(cli_short = 'p')]
    pub event_path: Option<String>,

    /// Base URL of the GitHub REST API.
    ///
    /// Falls back to `GITHUB_API_URL`, then to [`DEFAULT_API_URL`].
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Access token of the DingTalk group robot used by `/sync`.
    ///
    /// Falls back to `DINGTALK_TOKEN`. Absence only matters when a sync
    /// command actually runs.
    #[ortho_config()]
    pub dingtalk_token: Option<String>,

    /// DingTalk robot webhook URL.
    #[ortho_config()]
    pub dingtalk_endpoint: String,

    /// Timeout for chat notification requests, in seconds.
    #[ortho_config()]
    pub notify_timeout_seconds: u64,
}

impl Default for SlashbotConfig {
    fn default() -> Self {
        Self {
            token: None,
            event_name: None,
            event_path: None,
            api_url: None,
            dingtalk_token: None,
            dingtalk_endpoint: DEFAULT_DINGTALK_ENDPOINT.to_owned(),
            notify_timeout_seconds: DEFAULT_NOTIFY_TIMEOUT_SECONDS,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|candidate| !candidate.trim().is_empty())
}

fn configured_or_env(value: Option<&str>, variable: &str) -> Option<String> {
    configured_or_first_env(value, &[variable])
}

fn configured_or_first_env(value: Option<&str>, variables: &[&str]) -> Option<String> {
    non_blank(value.map(str::to_owned)).or_else(|| {
        variables
            .iter()
            .find_map(|variable| non_blank(env::var(variable).ok()))
    })
}

impl SlashbotConfig {
    /// Resolves the GitHub token, falling back to the workflow's `token`
    /// input and then to `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingToken`] when no source provides a value.
    pub fn resolve_token(&self) -> Result<String, BotError> {
        configured_or_first_env(self.token.as_deref(), &["token", "GITHUB_TOKEN"])
            .ok_or(BotError::MissingToken)
    }

    /// Resolves the event name, falling back to `GITHUB_EVENT_NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingEventName`] when no source provides a value.
    pub fn resolve_event_name(&self) -> Result<String, BotError> {
        configured_or_env(self.event_name.as_deref(), "GITHUB_EVENT_NAME")
            .ok_or(BotError::MissingEventName)
    }

    /// Resolves the payload path, falling back to `GITHUB_EVENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingEventPath`] when no source provides a value.
    pub fn resolve_event_path(&self) -> Result<Utf8PathBuf, BotError> {
        configured_or_env(self.event_path.as_deref(), "GITHUB_EVENT_PATH")
            .map(Utf8PathBuf::from)
            .ok_or(BotError::MissingEventPath)
    }

    /// Resolves the GitHub API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::InvalidUrl`] when the configured value does not
    /// parse as a URL.
    pub fn resolve_api_url(&self) -> Result<Url, BotError> {
        let raw = configured_or_env(self.api_url.as_deref(), "GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Url::parse(raw.trim()).map_err(|error| BotError::InvalidUrl(format!("{raw}: {error}")))
    }

    /// Resolves the DingTalk robot token, falling back to `DINGTALK_TOKEN`.
    #[must_use]
    pub fn resolve_dingtalk_token(&self) -> Option<String> {
        configured_or_env(self.dingtalk_token.as_deref(), "DINGTALK_TOKEN")
    }

    /// Builds the chat notifier configuration.
    #[must_use]
    pub fn dingtalk_config(&self) -> DingTalkConfig {
        DingTalkConfig {
            endpoint: self.dingtalk_endpoint.clone(),
            access_token: self.resolve_dingtalk_token(),
            timeout: Duration::from_secs(self.notify_timeout_seconds),
        }
    }
}
