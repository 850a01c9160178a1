//! Slashbot library crate: GitHub slash-command handling.
//!
//! A single `issue_comment` webhook delivery is decoded once and offered to
//! each registered command actor. Actors claim comments such as `/assign`,
//! `/kind bug`, `/retest`, or `/sync` and act on them through the GitHub
//! REST API and a DingTalk group robot.

pub mod actors;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod github;
pub mod notify;
pub mod registry;
pub mod telemetry;

pub use actors::{Actor, ActorContext, AssignActor, LabelerActor, RetestActor, SyncActor};
pub use config::SlashbotConfig;
pub use dispatch::{DispatchReport, Dispatcher};
pub use error::BotError;
pub use event::{EventType, GenericEvent, read_event_payload};
pub use github::{IssueGateway, OctocrabIssueGateway, PersonalAccessToken};
pub use notify::{ChatNotifier, DingTalkNotifier};
pub use registry::{ActorFactory, ActorRegistry};
