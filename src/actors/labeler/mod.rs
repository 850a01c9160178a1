//! `/kind`, `/area` and their `/un` forms: namespaced label management.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::eligibility::{Target, eligible_comment};
use super::labels::remove_label_if_present;
use super::{Actor, ActorContext, issue_locator, not_claimed};
use crate::error::BotError;
use crate::event::{GenericEvent, IssueCommentEvent};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static LABEL_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(un)?(kind|area)[\t\n\f\r ]+(.+)$").expect("label pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Add,
    Remove,
}

#[derive(Debug)]
struct Claimed {
    event: IssueCommentEvent,
    direction: Direction,
    labels: Vec<String>,
}

/// Adds or removes `kind/*` and `area/*` labels named in a comment.
#[derive(Debug)]
pub struct LabelerActor {
    context: ActorContext,
    claimed: Option<Claimed>,
}

impl LabelerActor {
    /// Creates an actor that has not claimed anything yet.
    #[must_use]
    pub const fn new(context: ActorContext) -> Self {
        Self {
            context,
            claimed: None,
        }
    }

    #[cfg(test)]
    fn claimed_labels(&self) -> &[String] {
        self.claimed
            .as_ref()
            .map_or(&[], |claimed| claimed.labels.as_slice())
    }

    async fn add(&self, event: &IssueCommentEvent, labels: &[String]) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;
        let known = gateway.list_repository_labels(issue.repository()).await?;

        for label in labels {
            if !known.contains(label) {
                tracing::warn!(
                    "label '{label}' does not exist in {}",
                    issue.repository().full_name()
                );
                return Err(BotError::LabelNotFound {
                    label: label.clone(),
                });
            }
            gateway
                .add_labels(&issue, std::slice::from_ref(label))
                .await?;
            tracing::info!("added '{label}' to issue #{}", event.issue.number);
        }
        Ok(())
    }

    async fn remove(&self, event: &IssueCommentEvent, labels: &[String]) -> Result<(), BotError> {
        let gateway = self.context.gateway();
        let issue = issue_locator(event)?;

        for label in labels {
            if remove_label_if_present(gateway.as_ref(), &issue, label).await? {
                tracing::info!("removed '{label}' from issue #{}", event.issue.number);
            }
        }
        Ok(())
    }
}

fn parse_command(body: &str) -> Option<(Direction, Vec<String>)> {
    let captures = LABEL_COMMAND.captures(body)?;
    let direction = if captures.get(1).is_some() {
        Direction::Remove
    } else {
        Direction::Add
    };
    let namespace = captures.get(2)?.as_str();
    let labels = captures
        .get(3)?
        .as_str()
        .split_whitespace()
        .map(|token| format!("{namespace}/{token}"))
        .collect::<Vec<_>>();
    Some((direction, labels))
}

#[async_trait]
impl Actor for LabelerActor {
    fn name(&self) -> &'static str {
        "LabelerActor"
    }

    fn claim(&mut self, event: GenericEvent) -> bool {
        let Some(comment) = eligible_comment(event, Target::Issues) else {
            return false;
        };
        let Some((direction, labels)) = parse_command(comment.body()) else {
            return false;
        };
        if labels.is_empty() {
            return false;
        }
        self.claimed = Some(Claimed {
            event: comment,
            direction,
            labels,
        });
        true
    }

    async fn execute(&mut self) -> Result<(), BotError> {
        let claimed = self.claimed.take().ok_or_else(|| not_claimed(self.name()))?;
        match claimed.direction {
            Direction::Add => self.add(&claimed.event, &claimed.labels).await,
            Direction::Remove => self.remove(&claimed.event, &claimed.labels).await,
        }
    }
}

#[cfg(test)]
mod tests;
