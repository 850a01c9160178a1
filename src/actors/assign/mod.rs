//! `/assign` and `/unassign`: let contributors take or release an issue.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::eligibility::{Target, eligible_comment};
use super::labels::remove_label_if_present;
use super::{Actor, ActorContext, HELP_WANTED_LABEL, issue_locator, not_claimed};
use crate::error::BotError;
use crate::event::{GenericEvent, IssueCommentEvent};
use crate::github::Reaction;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static ASSIGN_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(un)?assign(?-u:\b)").expect("assign pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Assign,
    Unassign,
}

#[derive(Debug)]
struct Claimed {
    event: IssueCommentEvent,
    mode: Mode,
}

/// Assigns the commenter to an issue, or releases them from it.
#[derive(Debug)]
pub struct AssignActor {
    context: ActorContext,
    claimed: Option<Claimed>,
}

impl AssignActor {
    /// Creates an actor that has not claimed anything yet.
    #[must_use]
    pub const fn new(context: ActorContext) -> Self {
        Self {
            context,
            claimed: None,
        }
    }

    async fn assign(&self, event: &IssueCommentEvent) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;
        let commenter = &event.comment.user;

        if event.issue.is_assigned_to(commenter) {
            tracing::info!(
                "{} is already assigned to issue #{}",
                commenter.login,
                event.issue.number
            );
            let rebuff = format!(
                "@{} The issue has been assigned to you. Please do not attempt to assign it",
                commenter.login
            );
            return gateway.add_comment(&issue, &rebuff).await;
        }

        gateway
            .add_assignees(&issue, &[commenter.login.clone()])
            .await?;
        tracing::info!(
            "assigned issue #{} to {}",
            event.issue.number,
            commenter.login
        );
        gateway
            .add_reaction(issue.repository(), event.comment.id, Reaction::PlusOne)
            .await?;
        if remove_label_if_present(gateway.as_ref(), &issue, HELP_WANTED_LABEL).await? {
            tracing::info!(
                "removed '{HELP_WANTED_LABEL}' from issue #{}",
                event.issue.number
            );
        }
        Ok(())
    }

    async fn unassign(&self, event: &IssueCommentEvent) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;
        let commenter = &event.comment.user;

        if !event.issue.is_assigned_to(commenter) {
            tracing::info!(
                "{} is not assigned to issue #{}",
                commenter.login,
                event.issue.number
            );
            let rebuff = format!(
                "@{} This issue is not assigned to you. Please do not try to unassign it again",
                commenter.login
            );
            return gateway.add_comment(&issue, &rebuff).await;
        }

        // "help wanted" stays off; maintainers re-add it by hand.
        gateway
            .remove_assignees(&issue, &[commenter.login.clone()])
            .await?;
        tracing::info!(
            "unassigned {} from issue #{}",
            commenter.login,
            event.issue.number
        );
        Ok(())
    }
}

#[async_trait]
impl Actor for AssignActor {
    fn name(&self) -> &'static str {
        "AssignActor"
    }

    fn claim(&mut self, event: GenericEvent) -> bool {
        let Some(comment) = eligible_comment(event, Target::Issues) else {
            return false;
        };
        let Some(captures) = ASSIGN_COMMAND.captures(comment.body()) else {
            return false;
        };
        let mode = if captures.get(1).is_some() {
            Mode::Unassign
        } else {
            Mode::Assign
        };
        self.claimed = Some(Claimed {
            event: comment,
            mode,
        });
        true
    }

    async fn execute(&mut self) -> Result<(), BotError> {
        let claimed = self.claimed.take().ok_or_else(|| not_claimed(self.name()))?;
        match claimed.mode {
            Mode::Assign => self.assign(&claimed.event).await,
            Mode::Unassign => self.unassign(&claimed.event).await,
        }
    }
}
