//! Mock wiring for actor unit tests.

use std::sync::Arc;

use super::ActorContext;
use crate::event::test_support::ISSUE_NUMBER;
use crate::github::{IssueLocator, MockIssueGateway};
use crate::notify::MockChatNotifier;

/// Context backed by the given mocks.
pub(crate) fn context(gateway: MockIssueGateway, notifier: MockChatNotifier) -> ActorContext {
    ActorContext::new(Arc::new(gateway), Arc::new(notifier))
}

/// Context whose gateway and notifier reject every call.
pub(crate) fn inert_context() -> ActorContext {
    context(MockIssueGateway::new(), MockChatNotifier::new())
}

/// Locator matching the default comment fixture.
pub(crate) fn fixture_issue() -> IssueLocator {
    IssueLocator::from_parts("owner/repo", ISSUE_NUMBER).expect("fixture locator should parse")
}

pub(crate) fn logins(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}
