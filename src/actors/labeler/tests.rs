//! Tests for the kind/area labeler.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use rstest::rstest;

use super::LabelerActor;
use crate::actors::Actor;
use crate::actors::test_support::{context, inert_context, logins};
use crate::error::BotError;
use crate::event::test_support::{IssueCommentBuilder, issue_comment, pull_request_comment};
use crate::github::MockIssueGateway;
use crate::notify::MockChatNotifier;

fn repository_labels(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[rstest]
#[case::single_kind("/kind bug", &["kind/bug"])]
#[case::several_kinds("/kind bug performance", &["kind/bug", "kind/performance"])]
#[case::area("/area docs", &["area/docs"])]
#[case::extra_spacing("/unarea   docs \t ci", &["area/docs", "area/ci"])]
#[case::unkind("/unkind bug", &["kind/bug"])]
#[case::tab_separator("/kind\tbug", &["kind/bug"])]
fn captures_namespaced_labels(#[case] body: &str, #[case] expected: &[&str]) {
    let mut actor = LabelerActor::new(inert_context());
    assert!(actor.claim(issue_comment(body)));
    assert_eq!(actor.claimed_labels(), logins(expected).as_slice());
}

#[rstest]
#[case::no_labels("/kind")]
#[case::only_spaces("/kind   ")]
#[case::glued("/kindbug")]
#[case::unknown_namespace("/priority high")]
#[case::multiline("/kind bug\nthanks")]
#[case::ideographic_space("/kind\u{3000}bug")]
#[case::no_break_space("/area\u{a0}docs")]
#[case::vertical_tab("/kind\u{b}bug")]
fn ignores_non_label_bodies(#[case] body: &str) {
    let mut actor = LabelerActor::new(inert_context());
    assert!(!actor.claim(issue_comment(body)));
    assert!(actor.claimed_labels().is_empty());
}

#[rstest]
fn ignores_pull_requests_and_closed_issues() {
    let mut actor = LabelerActor::new(inert_context());
    assert!(!actor.claim(pull_request_comment("/kind bug")));
    assert!(!actor.claim(IssueCommentBuilder::new("/kind bug").closed_at().envelope()));
}

#[tokio::test]
async fn adds_each_existing_label_in_order() {
    let added = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&added);
    let mut gateway = MockIssueGateway::new();
    gateway
        .expect_list_repository_labels()
        .times(1)
        .returning(|_| Ok(repository_labels(&["kind/bug", "kind/performance"])));
    gateway
        .expect_add_labels()
        .times(2)
        .returning(move |_, labels| {
            recorder
                .lock()
                .expect("recorder lock")
                .extend(labels.iter().cloned());
            Ok(())
        });

    let mut actor = LabelerActor::new(context(gateway, MockChatNotifier::new()));
    assert!(actor.claim(issue_comment("/kind bug performance")));

    assert_eq!(actor.execute().await, Ok(()));
    assert_eq!(
        *added.lock().expect("recorder lock"),
        logins(&["kind/bug", "kind/performance"])
    );
}

#[tokio::test]
async fn stops_at_first_unknown_label_without_commenting() {
    let mut gateway = MockIssueGateway::new();
    gateway
        .expect_list_repository_labels()
        .returning(|_| Ok(repository_labels(&["kind/bug", "kind/cleanup"])));
    gateway
        .expect_add_labels()
        .withf(|_, labels| labels == logins(&["kind/bug"]))
        .times(1)
        .returning(|_, _| Ok(()));
    gateway.expect_add_comment().never();

    let mut actor = LabelerActor::new(context(gateway, MockChatNotifier::new()));
    assert!(actor.claim(issue_comment("/kind bug performance cleanup")));

    assert_eq!(
        actor.execute().await,
        Err(BotError::LabelNotFound {
            label: "kind/performance".to_owned()
        })
    );
}

#[tokio::test]
async fn removes_only_attached_labels() {
    let mut gateway = MockIssueGateway::new();
    gateway
        .expect_list_issue_labels()
        .times(2)
        .returning(|_| Ok(logins(&["area/docs", "kind/bug"])));
    gateway
        .expect_remove_label()
        .withf(|_, label| label == "area/docs")
        .times(1)
        .returning(|_, _| Ok(()));

    let mut actor = LabelerActor::new(context(gateway, MockChatNotifier::new()));
    assert!(actor.claim(issue_comment("/unarea docs ci")));

    assert_eq!(actor.execute().await, Ok(()));
}

#[tokio::test]
async fn label_listing_failure_is_fatal() {
    let mut gateway = MockIssueGateway::new();
    gateway.expect_list_repository_labels().returning(|_| {
        Err(BotError::Network {
            message: "connection reset".to_owned(),
        })
    });
    gateway.expect_add_labels().never();

    let mut actor = LabelerActor::new(context(gateway, MockChatNotifier::new()));
    assert!(actor.claim(issue_comment("/area docs")));

    assert!(matches!(
        actor.execute().await,
        Err(BotError::Network { .. })
    ));
}
