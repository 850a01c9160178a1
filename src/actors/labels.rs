//! Label helpers shared by actors.

use crate::error::BotError;
use crate::github::{IssueGateway, IssueLocator};

/// Detaches `label` only when the issue currently carries it.
///
/// Returns whether a removal request was sent.
pub(super) async fn remove_label_if_present(
    gateway: &dyn IssueGateway,
    issue: &IssueLocator,
    label: &str,
) -> Result<bool, BotError> {
    let attached = gateway.list_issue_labels(issue).await?;
    if !attached.iter().any(|name| name == label) {
        tracing::debug!(
            "label '{label}' is not on issue #{}, nothing to remove",
            issue.number().get()
        );
        return Ok(false);
    }
    gateway.remove_label(issue, label).await?;
    Ok(true)
}
