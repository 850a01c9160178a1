//! Filters shared by every command's claim step.

use crate::event::{GenericEvent, IssueCommentEvent};

/// Which kind of conversation a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    Issues,
    PullRequests,
}

/// Returns the comment event when it targets an open conversation of the
/// accepted kind and carries a non-empty body.
pub(super) fn eligible_comment(event: GenericEvent, target: Target) -> Option<IssueCommentEvent> {
    let comment = event.into_issue_comment()?;
    let is_pull_request = comment.issue.is_pull_request();
    let kind_matches = match target {
        Target::Issues => !is_pull_request,
        Target::PullRequests => is_pull_request,
    };
    if !kind_matches || comment.issue.is_closed() || comment.body().is_empty() {
        return None;
    }
    Some(comment)
}
