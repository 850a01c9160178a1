//! GitHub capability layer used by the command actors.
//!
//! This module wraps Octocrab behind the [`IssueGateway`] trait so actors
//! depend only on the handful of issue, label, reaction, and check-run
//! operations they need. Errors are mapped into [`BotError`] variants so
//! callers never see Octocrab internals.
//!
//! [`BotError`]: crate::error::BotError

pub mod gateway;
pub mod locator;
pub mod models;

pub use gateway::{IssueGateway, OctocrabIssueGateway};
pub use locator::{IssueLocator, IssueNumber, PersonalAccessToken, RepositorySlug};
pub use models::{CheckRun, PullRequestHead, Reaction};

#[cfg(test)]
pub use gateway::MockIssueGateway;

#[cfg(test)]
mod tests;
