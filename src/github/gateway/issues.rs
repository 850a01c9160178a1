//! Octocrab implementation of the issue gateway.

use std::collections::BTreeSet;

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use serde::de::IgnoredAny;
use url::Url;

use crate::error::BotError;
use crate::github::locator::{IssueLocator, PersonalAccessToken, RepositorySlug};
use crate::github::models::{
    ApiCheckRuns, ApiLabel, ApiPullRequest, AssigneesBody, CheckRun, CommentBody, LabelsBody,
    PullRequestHead, Reaction, ReactionBody,
};

use super::IssueGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{extract_github_message, parse_route};

const PAGE_SIZE: usize = 100;
const PER_PAGE: [(&str, &str); 1] = [("per_page", "100")];

/// Query for one page of an endpoint that wraps its items in an object.
#[derive(Debug, Serialize)]
struct PageQuery {
    per_page: usize,
    page: u32,
}

/// Octocrab-backed gateway.
pub struct OctocrabIssueGateway {
    client: Octocrab,
}

impl OctocrabIssueGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base URL.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `BotError::InvalidUrl` when the base URI cannot be parsed or
    /// `BotError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, BotError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn list_labels(&self, operation: &str, route: String) -> Result<Vec<String>, BotError> {
        let page = self
            .client
            .get::<Page<ApiLabel>, _, _>(route, Some(&PER_PAGE))
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|labels| labels.into_iter().map(|label| label.name).collect())
            .map_err(|error| map_octocrab_error(operation, &error))
    }
}

fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code == StatusCode::NOT_FOUND
    )
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn add_assignees(
        &self,
        issue: &IssueLocator,
        logins: &[String],
    ) -> Result<(), BotError> {
        self.client
            .post::<_, IgnoredAny>(
                issue.assignees_path(),
                Some(&AssigneesBody { assignees: logins }),
            )
            .await
            .map(drop)
            .map_err(|error| map_octocrab_error("add assignees", &error))
    }

    async fn remove_assignees(
        &self,
        issue: &IssueLocator,
        logins: &[String],
    ) -> Result<(), BotError> {
        self.client
            .delete::<IgnoredAny, _, _>(
                issue.assignees_path(),
                Some(&AssigneesBody { assignees: logins }),
            )
            .await
            .map(drop)
            .map_err(|error| map_octocrab_error("remove assignees", &error))
    }

    async fn add_labels(&self, issue: &IssueLocator, labels: &[String]) -> Result<(), BotError> {
        self.client
            .post::<_, IgnoredAny>(issue.labels_path(), Some(&LabelsBody { labels }))
            .await
            .map(drop)
            .map_err(|error| map_octocrab_error("add labels", &error))
    }

    async fn remove_label(&self, issue: &IssueLocator, label: &str) -> Result<(), BotError> {
        let uri = parse_route(&issue.label_path(label))?;
        let response = match self.client._delete(uri, None::<&()>).await {
            Ok(response) => response,
            Err(error) if is_not_found(&error) => return Ok(()),
            Err(error) => return Err(map_octocrab_error("remove label", &error)),
        };

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => {
                tracing::debug!(
                    "label '{label}' was not attached to issue #{}",
                    issue.number().get()
                );
                Ok(())
            }
            status => {
                let body = self
                    .client
                    .body_to_string(response)
                    .await
                    .unwrap_or_else(|_| String::new());
                Err(map_http_error(
                    "remove label",
                    status,
                    extract_github_message(&body),
                ))
            }
        }
    }

    async fn list_repository_labels(
        &self,
        repository: &RepositorySlug,
    ) -> Result<BTreeSet<String>, BotError> {
        self.list_labels("repository labels", repository.labels_path())
            .await
            .map(|labels| labels.into_iter().collect())
    }

    async fn list_issue_labels(&self, issue: &IssueLocator) -> Result<Vec<String>, BotError> {
        self.list_labels("issue labels", issue.labels_path()).await
    }

    async fn add_comment(&self, issue: &IssueLocator, body: &str) -> Result<(), BotError> {
        self.client
            .post::<_, IgnoredAny>(issue.comments_path(), Some(&CommentBody { body }))
            .await
            .map(drop)
            .map_err(|error| map_octocrab_error("add comment", &error))
    }

    async fn add_reaction(
        &self,
        repository: &RepositorySlug,
        comment_id: u64,
        reaction: Reaction,
    ) -> Result<(), BotError> {
        self.client
            .post::<_, IgnoredAny>(
                repository.comment_reactions_path(comment_id),
                Some(&ReactionBody {
                    content: reaction.as_str(),
                }),
            )
            .await
            .map(drop)
            .map_err(|error| map_octocrab_error("add reaction", &error))
    }

    async fn pull_request(&self, issue: &IssueLocator) -> Result<PullRequestHead, BotError> {
        self.client
            .get::<ApiPullRequest, _, _>(issue.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_octocrab_error("pull request", &error))
    }

    async fn list_check_runs(
        &self,
        repository: &RepositorySlug,
        head_sha: &str,
    ) -> Result<Vec<CheckRun>, BotError> {
        let route = repository.check_runs_path(head_sha);
        let mut runs = Vec::new();
        let mut page = 1;
        loop {
            let query = PageQuery {
                per_page: PAGE_SIZE,
                page,
            };
            let batch = self
                .client
                .get::<ApiCheckRuns, _, _>(route.as_str(), Some(&query))
                .await
                .map_err(|error| map_octocrab_error("check runs", &error))?;

            let fetched = batch.check_runs.len();
            runs.extend(batch.check_runs.into_iter().map(CheckRun::from));
            if fetched < PAGE_SIZE || runs.len() >= batch.total_count {
                return Ok(runs);
            }
            page += 1;
        }
    }

    async fn rerun_job(&self, repository: &RepositorySlug, job_id: u64) -> Result<(), BotError> {
        let uri = parse_route(&repository.rerun_job_path(job_id))?;
        let response = self
            .client
            ._post(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("rerun job", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());
        Err(map_http_error(
            "rerun job",
            status,
            extract_github_message(&body),
        ))
    }
}
