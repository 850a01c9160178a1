//! Registration of actors per event type.
//!
//! The registry is built once at start-up and only read afterwards. Actors
//! run in registration order, so earlier entries see an event first.

use std::collections::BTreeMap;

use crate::actors::{Actor, ActorContext, AssignActor, LabelerActor, RetestActor, SyncActor};
use crate::event::EventType;

/// Builds a fresh, unclaimed actor for one dispatch.
pub type ActorFactory = fn(ActorContext) -> Box<dyn Actor>;

/// Ordered actor factories keyed by event type.
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    entries: BTreeMap<EventType, Vec<ActorFactory>>,
}

impl ActorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry used by the bot: assign, retest, sync, and labeler for
    /// issue comments.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .register(EventType::IssueComment, assign_actor)
            .register(EventType::IssueComment, retest_actor)
            .register(EventType::IssueComment, sync_actor)
            .register(EventType::IssueComment, labeler_actor)
    }

    /// Appends `factory` to the actors for `event_type`.
    #[must_use]
    pub fn register(mut self, event_type: EventType, factory: ActorFactory) -> Self {
        self.entries.entry(event_type).or_default().push(factory);
        self
    }

    /// Factories registered for `event_type`, in registration order.
    #[must_use]
    pub fn actors_for(&self, event_type: EventType) -> &[ActorFactory] {
        self.entries
            .get(&event_type)
            .map_or(&[], Vec::as_slice)
    }
}

fn assign_actor(context: ActorContext) -> Box<dyn Actor> {
    Box::new(AssignActor::new(context))
}

fn retest_actor(context: ActorContext) -> Box<dyn Actor> {
    Box::new(RetestActor::new(context))
}

fn sync_actor(context: ActorContext) -> Box<dyn Actor> {
    Box::new(SyncActor::new(context))
}

fn labeler_actor(context: ActorContext) -> Box<dyn Actor> {
    Box::new(LabelerActor::new(context))
}
