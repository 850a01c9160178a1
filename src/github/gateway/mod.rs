//! Gateway for the issue, label, reaction, and check operations the actors
//! perform.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod issues;

pub use issues::OctocrabIssueGateway;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::BotError;
use crate::github::locator::{IssueLocator, RepositorySlug};
use crate::github::models::{CheckRun, PullRequestHead, Reaction};

/// Host-platform operations available to command actors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Adds users as assignees of the issue.
    async fn add_assignees(&self, issue: &IssueLocator, logins: &[String])
    -> Result<(), BotError>;

    /// Removes users from the assignees of the issue.
    async fn remove_assignees(
        &self,
        issue: &IssueLocator,
        logins: &[String],
    ) -> Result<(), BotError>;

    /// Attaches labels to the issue.
    async fn add_labels(&self, issue: &IssueLocator, labels: &[String]) -> Result<(), BotError>;

    /// Detaches one label from the issue. A label that is not attached is
    /// not an error.
    async fn remove_label(&self, issue: &IssueLocator, label: &str) -> Result<(), BotError>;

    /// Lists every label defined in the repository.
    async fn list_repository_labels(
        &self,
        repository: &RepositorySlug,
    ) -> Result<BTreeSet<String>, BotError>;

    /// Lists the labels currently attached to the issue.
    async fn list_issue_labels(&self, issue: &IssueLocator) -> Result<Vec<String>, BotError>;

    /// Posts a comment on the issue.
    async fn add_comment(&self, issue: &IssueLocator, body: &str) -> Result<(), BotError>;

    /// Reacts to an issue comment.
    async fn add_reaction(
        &self,
        repository: &RepositorySlug,
        comment_id: u64,
        reaction: Reaction,
    ) -> Result<(), BotError>;

    /// Fetches the pull request behind an issue number.
    async fn pull_request(&self, issue: &IssueLocator) -> Result<PullRequestHead, BotError>;

    /// Lists check runs recorded against a commit.
    async fn list_check_runs(
        &self,
        repository: &RepositorySlug,
        head_sha: &str,
    ) -> Result<Vec<CheckRun>, BotError>;

    /// Re-triggers a single Actions job.
    async fn rerun_job(&self, repository: &RepositorySlug, job_id: u64) -> Result<(), BotError>;
}
