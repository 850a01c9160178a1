//! DingTalk group robot implementation of [`ChatNotifier`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::BotError;

use super::ChatNotifier;

/// Robot webhook used when no endpoint is configured.
pub const DEFAULT_DINGTALK_ENDPOINT: &str = "https://oapi.dingtalk.com/robot/send";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`DingTalkNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DingTalkConfig {
    /// Robot webhook URL without the `access_token` query parameter.
    pub endpoint: String,
    /// Robot access token; delivery fails when absent.
    pub access_token: Option<String>,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for DingTalkConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DINGTALK_ENDPOINT.to_owned(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Posts markdown messages to a DingTalk group robot.
#[derive(Debug, Clone, Default)]
pub struct DingTalkNotifier {
    config: DingTalkConfig,
}

impl DingTalkNotifier {
    /// Creates a notifier from explicit configuration.
    #[must_use]
    pub const fn new(config: DingTalkConfig) -> Self {
        Self { config }
    }

    fn access_token(&self) -> Result<&str, BotError> {
        self.config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| BotError::Notification {
                message: "DingTalk access token cannot be empty".to_owned(),
            })
    }

    fn robot_url(&self, access_token: &str) -> Result<Url, BotError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|error| BotError::InvalidUrl(format!("{}: {error}", self.config.endpoint)))?;
        url.query_pairs_mut()
            .append_pair("access_token", access_token);
        Ok(url)
    }

    fn create_http_client(&self) -> Result<Client, BotError> {
        Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|error| BotError::Configuration {
                message: format!("failed to configure DingTalk HTTP client: {error}"),
            })
    }
}

#[async_trait]
impl ChatNotifier for DingTalkNotifier {
    async fn send_message(&self, issue_number: u64, content: &str) -> Result<(), BotError> {
        let access_token = self.access_token()?;
        if issue_number == 0 {
            return Err(BotError::Notification {
                message: "issue number cannot be zero".to_owned(),
            });
        }

        let title = format!("Issue #{issue_number}");
        let payload = MarkdownMessage {
            msgtype: "markdown",
            markdown: MarkdownContent {
                title: title.as_str(),
                text: content,
            },
        };
        let url = self.robot_url(access_token)?;
        let client = self.create_http_client()?;

        let response = client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|error| BotError::Network {
                message: format!("DingTalk request transport failed: {error}"),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::Notification {
                message: format!("DingTalk responded with status {}", status.as_u16()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| BotError::Notification {
                message: format!("failed to read DingTalk response body: {error}"),
            })?;
        tracing::debug!("DingTalk response: {body}");

        let reply: RobotReply =
            serde_json::from_str(&body).map_err(|error| BotError::Notification {
                message: format!("DingTalk response was not JSON: {error}"),
            })?;
        match reply.errcode {
            None | Some(0) => Ok(()),
            Some(code) => Err(BotError::Notification {
                message: format!(
                    "DingTalk rejected the message ({code}): {}",
                    reply.errmsg.unwrap_or_default()
                ),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct MarkdownMessage<'a> {
    msgtype: &'static str,
    markdown: MarkdownContent<'a>,
}

#[derive(Debug, Serialize)]
struct MarkdownContent<'a> {
    title: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RobotReply {
    #[serde(default)]
    errcode: Option<i64>,
    #[serde(default)]
    errmsg: Option<String>,
}
