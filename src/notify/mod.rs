//! Outbound chat notifications.
//!
//! Actors forward issue summaries to a maintainers' chat group through the
//! [`ChatNotifier`] trait; [`DingTalkNotifier`] delivers them to a DingTalk
//! group robot.

mod dingtalk;

pub use dingtalk::{DEFAULT_DINGTALK_ENDPOINT, DingTalkConfig, DingTalkNotifier};

use async_trait::async_trait;

use crate::error::BotError;

/// Sends markdown messages about an issue to a chat channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Delivers `content` as a message about `issue_number`.
    async fn send_message(&self, issue_number: u64, content: &str) -> Result<(), BotError>;
}
