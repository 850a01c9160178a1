//! Builders for issue comment payloads used across unit tests.

use chrono::{TimeZone, Utc};

use super::{
    Comment, EventPayload, GenericEvent, Issue, IssueCommentEvent, PullRequestLink,
    Repository, User,
};

pub(crate) const COMMENTER_ID: u64 = 7;
pub(crate) const COMMENTER_LOGIN: &str = "octocat";
pub(crate) const COMMENT_ID: u64 = 9001;
pub(crate) const ISSUE_NUMBER: u64 = 42;

pub(crate) fn user(id: u64, login: &str) -> User {
    User {
        id,
        login: login.to_owned(),
    }
}

/// Fluent builder for [`IssueCommentEvent`] fixtures.
#[derive(Debug, Clone)]
pub(crate) struct IssueCommentBuilder {
    event: IssueCommentEvent,
}

impl IssueCommentBuilder {
    /// An open issue in `owner/repo` with one comment by `octocat`.
    pub(crate) fn new(body: &str) -> Self {
        Self {
            event: IssueCommentEvent {
                repository: Repository {
                    full_name: "owner/repo".to_owned(),
                },
                issue: Issue {
                    number: ISSUE_NUMBER,
                    title: "Crash on start".to_owned(),
                    html_url: Some("https://github.com/owner/repo/issues/42".to_owned()),
                    assignees: Vec::new(),
                    pull_request: None,
                    closed_at: None,
                    closed_by: None,
                },
                comment: Comment {
                    id: COMMENT_ID,
                    body: Some(body.to_owned()),
                    user: user(COMMENTER_ID, COMMENTER_LOGIN),
                },
            },
        }
    }

    pub(crate) fn pull_request(mut self) -> Self {
        self.event.issue.pull_request = Some(PullRequestLink {
            url: Some("https://api.github.com/repos/owner/repo/pulls/42".to_owned()),
        });
        self
    }

    pub(crate) fn closed_at(mut self) -> Self {
        self.event.issue.closed_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single();
        self
    }

    pub(crate) fn closed_by(mut self, closer: User) -> Self {
        self.event.issue.closed_by = Some(closer);
        self
    }

    pub(crate) fn without_body(mut self) -> Self {
        self.event.comment.body = None;
        self
    }

    pub(crate) fn assignee(mut self, assignee: User) -> Self {
        self.event.issue.assignees.push(assignee);
        self
    }

    pub(crate) fn html_url(mut self, url: Option<&str>) -> Self {
        self.event.issue.html_url = url.map(ToOwned::to_owned);
        self
    }

    pub(crate) fn build(self) -> IssueCommentEvent {
        self.event
    }

    pub(crate) fn envelope(self) -> GenericEvent {
        GenericEvent::new(EventPayload::IssueComment(self.event))
    }
}

/// Shorthand for an envelope around an open issue with `body`.
pub(crate) fn issue_comment(body: &str) -> GenericEvent {
    IssueCommentBuilder::new(body).envelope()
}

/// Shorthand for an envelope around an open pull request with `body`.
pub(crate) fn pull_request_comment(body: &str) -> GenericEvent {
    IssueCommentBuilder::new(body).pull_request().envelope()
}
