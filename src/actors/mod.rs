//! Slash-command actors.
//!
//! Each actor owns one comment command. The dispatcher hands every actor its
//! own copy of the incoming event; [`Actor::claim`] decides whether the
//! comment is addressed to that actor and captures what it needs, and
//! [`Actor::execute`] performs the side effects using only that captured
//! state.

mod assign;
mod eligibility;
mod labeler;
mod labels;
mod retest;
mod sync;

pub use assign::AssignActor;
pub use labeler::LabelerActor;
pub use retest::RetestActor;
pub use sync::SyncActor;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BotError;
use crate::event::{GenericEvent, IssueCommentEvent};
use crate::github::{IssueGateway, IssueLocator};
use crate::notify::ChatNotifier;

/// Label that advertises an issue as open for contributors.
pub const HELP_WANTED_LABEL: &str = "help wanted";

/// Label that marks an issue as already forwarded to the chat group.
pub const SYNC_LABEL: &str = "sync";

/// A slash-command handler.
#[async_trait]
pub trait Actor: Send {
    /// Stable name used in logs and dispatch reports.
    fn name(&self) -> &'static str;

    /// Inspects `event` and keeps it when the comment is addressed to this
    /// actor.
    ///
    /// Returns `false` for events of another shape, ineligible issues, and
    /// comments that do not match the command. Once an actor has returned
    /// `true` the dispatcher always calls [`Actor::execute`].
    fn claim(&mut self, event: GenericEvent) -> bool;

    /// Runs the command captured by a successful [`Actor::claim`].
    ///
    /// # Errors
    ///
    /// Returns [`BotError::ActorNotClaimed`] when nothing was claimed, or the
    /// gateway or notifier error that stopped the command.
    async fn execute(&mut self) -> Result<(), BotError>;
}

/// Dependencies shared by every actor built for one dispatch.
#[derive(Clone)]
pub struct ActorContext {
    gateway: Arc<dyn IssueGateway>,
    notifier: Arc<dyn ChatNotifier>,
}

impl ActorContext {
    /// Bundles the GitHub gateway and chat notifier.
    #[must_use]
    pub fn new(gateway: Arc<dyn IssueGateway>, notifier: Arc<dyn ChatNotifier>) -> Self {
        Self { gateway, notifier }
    }

    /// GitHub operations.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn IssueGateway> {
        Arc::clone(&self.gateway)
    }

    /// Chat notifications.
    #[must_use]
    pub fn notifier(&self) -> Arc<dyn ChatNotifier> {
        Arc::clone(&self.notifier)
    }
}

impl std::fmt::Debug for ActorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorContext").finish_non_exhaustive()
    }
}

fn issue_locator(event: &IssueCommentEvent) -> Result<IssueLocator, BotError> {
    IssueLocator::from_parts(&event.repository.full_name, event.issue.number)
}

fn not_claimed(actor: &str) -> BotError {
    BotError::ActorNotClaimed {
        actor: actor.to_owned(),
    }
}

#[cfg(test)]
pub(crate) mod test_support;
