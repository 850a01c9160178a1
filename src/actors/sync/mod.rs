//! `/sync`: forward an issue to the maintainers' chat group once.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::eligibility::{Target, eligible_comment};
use super::{Actor, ActorContext, SYNC_LABEL, issue_locator, not_claimed};
use crate::error::BotError;
use crate::event::{GenericEvent, IssueCommentEvent};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static SYNC_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/sync[\t\n\f\r ]*$").expect("sync pattern should compile"));

/// Posts an issue summary to the chat group and marks the issue as synced.
#[derive(Debug)]
pub struct SyncActor {
    context: ActorContext,
    claimed: Option<IssueCommentEvent>,
}

impl SyncActor {
    /// Creates an actor that has not claimed anything yet.
    #[must_use]
    pub const fn new(context: ActorContext) -> Self {
        Self {
            context,
            claimed: None,
        }
    }

    async fn sync(&self, event: &IssueCommentEvent) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;

        let labels = gateway.list_issue_labels(&issue).await?;
        if labels.iter().any(|label| label == SYNC_LABEL) {
            tracing::info!(
                "issue #{} already carries '{SYNC_LABEL}', skipping notification",
                event.issue.number
            );
            return Ok(());
        }

        let summary = summary_message(event, &labels);
        self.context
            .notifier()
            .send_message(event.issue.number, &summary)
            .await?;
        tracing::info!("sent issue #{} to the chat group", event.issue.number);

        gateway.add_labels(&issue, &[SYNC_LABEL.to_owned()]).await
    }
}

/// Markdown summary of an issue for the chat group.
fn summary_message(event: &IssueCommentEvent, labels: &[String]) -> String {
    let number = event.issue.number;
    let url = event.issue.html_url.clone().unwrap_or_else(|| {
        format!(
            "https://github.com/{}/issues/{number}",
            event.repository.full_name
        )
    });
    let label_list = if labels.is_empty() {
        "none".to_owned()
    } else {
        labels.join(", ")
    };
    format!(
        "### Issue: [#{number}]({url})\n\n##### Title: {}\n\n##### Labels: {label_list}\n\nPlease pay attention to. 👀",
        event.issue.title
    )
}

#[async_trait]
impl Actor for SyncActor {
    fn name(&self) -> &'static str {
        "SyncActor"
    }

    fn claim(&mut self, event: GenericEvent) -> bool {
        let Some(comment) = eligible_comment(event, Target::Issues) else {
            return false;
        };
        if !SYNC_COMMAND.is_match(comment.body()) {
            return false;
        }
        self.claimed = Some(comment);
        true
    }

    async fn execute(&mut self) -> Result<(), BotError> {
        let event = self.claimed.take().ok_or_else(|| not_claimed(self.name()))?;
        self.sync(&event).await
    }
}
