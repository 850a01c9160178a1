//! Webhook event envelope handed to command actors.
//!
//! The dispatcher decodes the raw payload once into a [`GenericEvent`] and
//! hands every actor its own [`GenericEvent::isolated_copy`], so nothing an
//! actor captures or mutates can leak into another actor's view of the
//! event.

use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

mod model;
mod source;

#[cfg(test)]
pub(crate) mod test_support;

pub use model::{Comment, Issue, IssueCommentEvent, PullRequestLink, Repository, User};
pub use source::read_event_payload;

/// Webhook event types the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventType {
    /// A comment was created or edited on an issue or pull request.
    IssueComment,
}

impl EventType {
    /// Name used by GitHub for the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = BotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(BotError::MissingEventName),
            "issue_comment" => Ok(Self::IssueComment),
            other => Err(BotError::UnsupportedEvent {
                event: other.to_owned(),
            }),
        }
    }
}

/// Decoded payload, one variant per supported [`EventType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// Payload of an `issue_comment` delivery.
    IssueComment(IssueCommentEvent),
}

impl EventPayload {
    /// The event type this payload was decoded as.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::IssueComment(_) => EventType::IssueComment,
        }
    }
}

/// Envelope around a decoded webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericEvent {
    payload: EventPayload,
}

impl GenericEvent {
    /// Wraps an already decoded payload.
    #[must_use]
    pub const fn new(payload: EventPayload) -> Self {
        Self { payload }
    }

    /// Decodes raw webhook JSON as the given event type.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Decode`] when the bytes are not a valid payload for
    /// `event_type`.
    pub fn decode(event_type: EventType, bytes: &[u8]) -> Result<Self, BotError> {
        let payload = match event_type {
            EventType::IssueComment => serde_json::from_slice::<IssueCommentEvent>(bytes)
                .map(EventPayload::IssueComment)
                .map_err(|error| BotError::Decode {
                    message: format!("'{event_type}' payload: {error}"),
                })?,
        };
        Ok(Self::new(payload))
    }

    /// Deep copy handed to a single actor.
    #[must_use]
    pub fn isolated_copy(&self) -> Self {
        self.clone()
    }

    /// The event type of the wrapped payload.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        self.payload.event_type()
    }

    /// Unwraps the payload as an issue comment event, or `None` when the
    /// envelope carries a different event type.
    #[must_use]
    pub fn into_issue_comment(self) -> Option<IssueCommentEvent> {
        match self.payload {
            EventPayload::IssueComment(event) => Some(event),
        }
    }
}

#[cfg(test)]
mod tests;
