//! Data models exchanged with the GitHub REST API.

use serde::{Deserialize, Serialize};

/// Reaction content accepted by the reactions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// The "+1" thumbs-up reaction.
    PlusOne,
    /// The "rocket" reaction.
    Rocket,
}

impl Reaction {
    /// Wire value for the reaction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlusOne => "+1",
            Self::Rocket => "rocket",
        }
    }
}

/// The parts of a pull request needed to locate its checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHead {
    /// Pull request number.
    pub number: u64,
    /// Commit SHA at the head of the pull request branch.
    pub head_sha: String,
}

/// A CI job result attached to a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRun {
    /// Check run identifier, which is also the Actions job identifier.
    pub id: u64,
    /// Display name of the check.
    pub name: String,
    /// Conclusion such as `success` or `failure`; absent while running.
    pub conclusion: Option<String>,
}

const FAILURE_CONCLUSION: &str = "failure";

impl CheckRun {
    /// Only a `failure` conclusion counts; cancelled or timed-out runs do not.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.conclusion.as_deref() == Some(FAILURE_CONCLUSION)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) head: ApiCommitRef,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitRef {
    pub(super) sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCheckRuns {
    #[serde(default)]
    pub(super) total_count: usize,
    #[serde(default)]
    pub(super) check_runs: Vec<ApiCheckRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCheckRun {
    pub(super) id: u64,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) conclusion: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AssigneesBody<'a> {
    pub(super) assignees: &'a [String],
}

#[derive(Debug, Serialize)]
pub(super) struct LabelsBody<'a> {
    pub(super) labels: &'a [String],
}

#[derive(Debug, Serialize)]
pub(super) struct CommentBody<'a> {
    pub(super) body: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct ReactionBody {
    pub(super) content: &'static str,
}

impl From<ApiPullRequest> for PullRequestHead {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            head_sha: value.head.sha,
        }
    }
}

impl From<ApiCheckRun> for CheckRun {
    fn from(value: ApiCheckRun) -> Self {
        Self {
            id: value.id,
            name: value.name,
            conclusion: value.conclusion,
        }
    }
}
