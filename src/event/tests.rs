//! Unit tests for event decoding and the envelope.

use std::io::Write;

use camino::Utf8Path;
use rstest::rstest;
use serde_json::json;

use super::test_support::{IssueCommentBuilder, user};
use super::{EventType, GenericEvent, read_event_payload};
use crate::error::BotError;

fn webhook_payload() -> serde_json::Value {
    json!({
        "action": "created",
        "issue": {
            "number": 12,
            "title": "Docs typo",
            "html_url": "https://github.com/octo/repo/issues/12",
            "state": "open",
            "assignees": [{ "id": 3, "login": "hubot", "type": "User" }],
            "labels": [{ "id": 1, "name": "help wanted", "color": "008672" }],
            "closed_at": null,
            "comments": 1
        },
        "comment": {
            "id": 555,
            "body": "/assign",
            "user": { "id": 7, "login": "octocat" }
        },
        "repository": {
            "id": 99,
            "name": "repo",
            "full_name": "octo/repo",
            "owner": { "id": 1, "login": "octo" }
        },
        "sender": { "id": 7, "login": "octocat" }
    })
}

#[rstest]
#[case::issue_comment("issue_comment", Ok(EventType::IssueComment))]
#[case::padded(" issue_comment\n", Ok(EventType::IssueComment))]
#[case::empty("", Err(BotError::MissingEventName))]
#[case::pull_request(
    "pull_request",
    Err(BotError::UnsupportedEvent { event: "pull_request".to_owned() })
)]
fn parses_event_names(#[case] input: &str, #[case] expected: Result<EventType, BotError>) {
    assert_eq!(input.parse::<EventType>(), expected);
}

#[test]
fn decodes_issue_comment_payload() {
    let bytes = serde_json::to_vec(&webhook_payload()).expect("payload should serialise");
    let event = GenericEvent::decode(EventType::IssueComment, &bytes).expect("payload should decode");

    assert_eq!(event.event_type(), EventType::IssueComment);
    let comment_event = event
        .into_issue_comment()
        .expect("envelope should carry an issue comment");
    assert_eq!(comment_event.repository.full_name, "octo/repo");
    assert_eq!(comment_event.issue.number, 12);
    assert_eq!(comment_event.body(), "/assign");
    assert_eq!(comment_event.comment.user.login, "octocat");
    assert!(!comment_event.issue.is_pull_request());
    assert!(!comment_event.issue.is_closed());
    assert!(comment_event.issue.is_assigned_to(&user(3, "hubot")));
    assert!(!comment_event.issue.is_assigned_to(&user(7, "octocat")));
}

#[test]
fn decodes_pull_request_linkage_and_close_metadata() {
    let mut payload = webhook_payload();
    payload["issue"]["pull_request"] = json!({ "url": "https://api.github.com/repos/octo/repo/pulls/12" });
    payload["issue"]["closed_at"] = json!("2025-02-01T10:00:00Z");
    let bytes = serde_json::to_vec(&payload).expect("payload should serialise");

    let comment_event = GenericEvent::decode(EventType::IssueComment, &bytes)
        .expect("payload should decode")
        .into_issue_comment()
        .expect("envelope should carry an issue comment");

    assert!(comment_event.issue.is_pull_request());
    assert!(comment_event.issue.is_closed());
}

#[test]
fn rejects_payload_without_comment() {
    let mut payload = webhook_payload();
    payload
        .as_object_mut()
        .expect("payload should be an object")
        .remove("comment");
    let bytes = serde_json::to_vec(&payload).expect("payload should serialise");

    let result = GenericEvent::decode(EventType::IssueComment, &bytes);
    assert!(
        matches!(result, Err(BotError::Decode { .. })),
        "expected Decode error, got {result:?}"
    );
}

#[test]
fn rejects_non_json_payload() {
    let result = GenericEvent::decode(EventType::IssueComment, b"not json");
    assert!(
        matches!(result, Err(BotError::Decode { .. })),
        "expected Decode error, got {result:?}"
    );
}

#[rstest]
#[case::open(IssueCommentBuilder::new("/assign"), false)]
#[case::closed_at(IssueCommentBuilder::new("/assign").closed_at(), true)]
#[case::closed_by(IssueCommentBuilder::new("/assign").closed_by(user(1, "maintainer")), true)]
fn either_close_marker_closes_the_issue(
    #[case] builder: IssueCommentBuilder,
    #[case] expected: bool,
) {
    assert_eq!(builder.build().issue.is_closed(), expected);
}

#[test]
fn isolated_copies_do_not_share_state() {
    let original = IssueCommentBuilder::new("/assign").envelope();
    let first = original.isolated_copy();
    let second = original.isolated_copy();

    let mut mutated = first
        .into_issue_comment()
        .expect("copy should carry an issue comment");
    mutated.comment.body = Some("/unassign".to_owned());
    mutated.issue.assignees.push(user(99, "intruder"));

    let untouched = second
        .into_issue_comment()
        .expect("copy should carry an issue comment");
    assert_eq!(untouched.body(), "/assign");
    assert!(untouched.issue.assignees.is_empty());
    assert_eq!(original, IssueCommentBuilder::new("/assign").envelope());
}

#[test]
fn reads_payload_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(br#"{"hello":"world"}"#)
        .expect("payload should be written");
    let path = Utf8Path::from_path(file.path()).expect("temp path should be UTF-8");

    let bytes = read_event_payload(path).expect("payload should be readable");
    assert_eq!(bytes, br#"{"hello":"world"}"#.to_vec());
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
fn empty_event_path_is_rejected(#[case] path: &str) {
    assert_eq!(
        read_event_payload(Utf8Path::new(path)),
        Err(BotError::MissingEventPath)
    );
}

#[test]
fn missing_payload_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let missing = dir.path().join("event.json");
    let path = Utf8Path::from_path(&missing).expect("temp path should be UTF-8");

    let result = read_event_payload(path);
    assert!(
        matches!(result, Err(BotError::Io { .. })),
        "expected Io error, got {result:?}"
    );
}
