//! Error types shared by configuration, event decoding, the GitHub gateway,
//! chat notification, and actor dispatch.

use thiserror::Error;

/// Errors surfaced while loading an event or acting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BotError {
    /// The authentication token was missing.
    #[error("GitHub token is required")]
    MissingToken,

    /// No event name was configured.
    #[error("GitHub event name is required")]
    MissingEventName,

    /// No event payload path was configured.
    #[error("GitHub event payload path is required")]
    MissingEventPath,

    /// The event name has no typed model.
    #[error("unsupported GitHub event: {event}")]
    UnsupportedEvent {
        /// Event name as delivered by the host.
        event: String,
    },

    /// The payload could not be parsed as the expected event shape.
    #[error("failed to decode event payload: {message}")]
    Decode {
        /// Parser error detail.
        message: String,
    },

    /// A repository full name was not of the form `owner/name`.
    #[error("repository must be of the form owner/name: {full_name}")]
    InvalidRepository {
        /// The rejected full name.
        full_name: String,
    },

    /// An issue number was zero.
    #[error("issue number must be a positive integer")]
    InvalidIssueNumber,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling a remote service.
    #[error("network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A namespace label requested by a command is not defined in the
    /// repository.
    #[error("label '{label}' does not exist")]
    LabelNotFound {
        /// Fully prefixed label name.
        label: String,
    },

    /// The chat notification could not be delivered.
    #[error("chat notification failed: {message}")]
    Notification {
        /// Details about the delivery failure.
        message: String,
    },

    /// One or more failed jobs could not be re-triggered.
    #[error("failed to rerun jobs: {}", failures.join("; "))]
    JobRerun {
        /// One message per job that failed to restart.
        failures: Vec<String>,
    },

    /// An actor was asked to execute without having claimed an event.
    #[error("actor {actor} executed without a claimed event")]
    ActorNotClaimed {
        /// Actor name.
        actor: String,
    },

    /// An actor failed while executing a claimed command.
    #[error("actor {actor} failed: {source}")]
    ActorFailed {
        /// Actor name.
        actor: String,
        /// The failure reported by the actor.
        source: Box<BotError>,
    },
}
