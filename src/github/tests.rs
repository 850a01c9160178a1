//! Unit tests for repository and issue locators.

use rstest::rstest;

use super::{IssueLocator, IssueNumber, PersonalAccessToken, RepositorySlug};
use crate::error::BotError;

#[rstest]
fn parses_full_name() {
    let slug = RepositorySlug::parse("octo/repo").expect("full name should parse");
    assert_eq!(slug.full_name(), "octo/repo");
}

#[rstest]
#[case::no_separator("octo")]
#[case::empty_owner("/repo")]
#[case::empty_name("octo/")]
#[case::extra_segment("octo/repo/extra")]
#[case::blank("")]
fn rejects_malformed_full_name(#[case] full_name: &str) {
    assert_eq!(
        RepositorySlug::parse(full_name),
        Err(BotError::InvalidRepository {
            full_name: full_name.to_owned()
        })
    );
}

#[rstest]
fn rejects_zero_issue_number() {
    assert_eq!(IssueNumber::new(0), Err(BotError::InvalidIssueNumber));
    assert_eq!(
        IssueLocator::from_parts("octo/repo", 0),
        Err(BotError::InvalidIssueNumber)
    );
}

#[rstest]
fn builds_issue_routes() {
    let issue = IssueLocator::from_parts("octo/repo", 7).expect("locator should parse");

    assert_eq!(issue.assignees_path(), "/repos/octo/repo/issues/7/assignees");
    assert_eq!(issue.labels_path(), "/repos/octo/repo/issues/7/labels");
    assert_eq!(issue.comments_path(), "/repos/octo/repo/issues/7/comments");
    assert_eq!(issue.pull_request_path(), "/repos/octo/repo/pulls/7");
    assert_eq!(
        issue.label_path("area/docs"),
        "/repos/octo/repo/issues/7/labels/area%2Fdocs"
    );
}

#[rstest]
fn builds_repository_routes() {
    let slug = RepositorySlug::parse("octo/repo").expect("full name should parse");

    assert_eq!(slug.labels_path(), "/repos/octo/repo/labels");
    assert_eq!(
        slug.comment_reactions_path(5),
        "/repos/octo/repo/issues/comments/5/reactions"
    );
    assert_eq!(
        slug.check_runs_path("deadbeef"),
        "/repos/octo/repo/commits/deadbeef/check-runs"
    );
    assert_eq!(slug.rerun_job_path(99), "/repos/octo/repo/actions/jobs/99/rerun");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn rejects_empty_token(#[case] token: &str) {
    assert_eq!(PersonalAccessToken::new(token), Err(BotError::MissingToken));
}

#[rstest]
fn trims_token() {
    let token = PersonalAccessToken::new("  ghp_example \n").expect("token should be valid");
    assert_eq!(token.value(), "ghp_example");
}
