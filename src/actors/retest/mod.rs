//! `/retest`: rerun the failed check jobs of a pull request.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::eligibility::{Target, eligible_comment};
use super::{Actor, ActorContext, issue_locator, not_claimed};
use crate::error::BotError;
use crate::event::{GenericEvent, IssueCommentEvent};
use crate::github::{CheckRun, Reaction};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static RETEST_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/retest[\t\n\f\r ]*$").expect("retest pattern should compile")
});

/// Reruns every failed check job on the pull request's head commit.
#[derive(Debug)]
pub struct RetestActor {
    context: ActorContext,
    claimed: Option<IssueCommentEvent>,
}

impl RetestActor {
    /// Creates an actor that has not claimed anything yet.
    #[must_use]
    pub const fn new(context: ActorContext) -> Self {
        Self {
            context,
            claimed: None,
        }
    }

    async fn retest(&self, event: &IssueCommentEvent) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;
        let repository = issue.repository();

        let head = gateway.pull_request(&issue).await?;
        let runs = gateway.list_check_runs(repository, &head.head_sha).await?;
        let failed: Vec<&CheckRun> = runs.iter().filter(|run| run.is_failure()).collect();

        if failed.is_empty() {
            tracing::info!(
                "no failed check runs on pull request #{} ({})",
                head.number,
                head.head_sha
            );
            let notice = format!(
                "@{} The current checks run has all been run successfully and there is no need to rerun it again",
                event.comment.user.login
            );
            return gateway.add_comment(&issue, &notice).await;
        }

        if let Err(error) = gateway
            .add_reaction(repository, event.comment.id, Reaction::Rocket)
            .await
        {
            tracing::warn!(
                "failed to react to comment {} on pull request #{}: {error}",
                event.comment.id,
                head.number
            );
        }

        let mut failures = Vec::new();
        for run in failed {
            match gateway.rerun_job(repository, run.id).await {
                Ok(()) => tracing::info!("rerunning failed job '{}' ({})", run.name, run.id),
                Err(error) => {
                    tracing::error!("failed to rerun job '{}' ({}): {error}", run.name, run.id);
                    failures.push(format!("{} ({}): {error}", run.name, run.id));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(BotError::JobRerun { failures })
        }
    }
}

#[async_trait]
impl Actor for RetestActor {
    fn name(&self) -> &'static str {
        "RetestActor"
    }

    fn claim(&mut self, event: GenericEvent) -> bool {
        let Some(comment) = eligible_comment(event, Target::PullRequests) else {
            return false;
        };
        if !RETEST_COMMAND.is_match(comment.body()) {
            return false;
        }
        self.claimed = Some(comment);
        true
    }

    async fn execute(&mut self) -> Result<(), BotError> {
        let event = self.claimed.take().ok_or_else(|| not_claimed(self.name()))?;
        self.retest(&event).await
    }
}
