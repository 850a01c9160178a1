//! Typed webhook payload for the `issue_comment` event.
//!
//! Only the fields the command actors read are modelled; everything else in
//! the webhook document is ignored during decoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An `issue_comment` webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueCommentEvent {
    /// Repository the issue belongs to.
    pub repository: Repository,
    /// Issue or pull request the comment was left on.
    pub issue: Issue,
    /// The comment that triggered the delivery.
    pub comment: Comment,
}

impl IssueCommentEvent {
    /// Returns the comment body, or an empty string when GitHub omitted it.
    #[must_use]
    pub fn body(&self) -> &str {
        self.comment.body.as_deref().unwrap_or_default()
    }
}

/// Repository identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// `owner/name` identifier.
    pub full_name: String,
}

/// Issue details carried by the payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title.
    #[serde(default)]
    pub title: String,
    /// Browser URL for the issue.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Users currently assigned to the issue.
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Present when the issue is a pull request.
    #[serde(default)]
    pub pull_request: Option<PullRequestLink>,
    /// When the issue was closed.
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    /// Who closed the issue.
    #[serde(default)]
    pub closed_by: Option<User>,
}

impl Issue {
    /// Pull requests are issues with a `pull_request` link.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Either a close timestamp or a closing user marks the issue closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed_at.is_some() || self.closed_by.is_some()
    }

    /// Returns true when `user` is among the assignees, compared by id.
    #[must_use]
    pub fn is_assigned_to(&self, user: &User) -> bool {
        self.assignees.iter().any(|assignee| assignee.id == user.id)
    }
}

/// Pull request linkage on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestLink {
    /// API URL of the pull request.
    #[serde(default)]
    pub url: Option<String>,
}

/// Issue comment details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,
    /// Markdown body.
    #[serde(default)]
    pub body: Option<String>,
    /// Comment author.
    pub user: User,
}

/// GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Numeric account identifier.
    pub id: u64,
    /// Login handle.
    pub login: String,
}
