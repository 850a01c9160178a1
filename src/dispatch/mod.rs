//! Runs one webhook event through the registered actors.
//!
//! The payload is decoded once. Every registered actor is built fresh and
//! receives its own copy of the event, claims it or passes, and executes
//! immediately when it claimed. The first failing actor ends the dispatch;
//! actors registered after it do not run.

use crate::actors::ActorContext;
use crate::error::BotError;
use crate::event::{EventType, GenericEvent};
use crate::registry::ActorRegistry;

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Type of the dispatched event.
    pub event_type: EventType,
    /// Names of the actors that claimed and handled the event, in order.
    pub handled_by: Vec<&'static str>,
}

impl DispatchReport {
    /// Whether no actor claimed the event.
    #[must_use]
    pub fn is_unclaimed(&self) -> bool {
        self.handled_by.is_empty()
    }
}

/// Owns the registry and the dependencies handed to each actor.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: ActorRegistry,
    context: ActorContext,
}

impl Dispatcher {
    /// Creates a dispatcher over `registry`.
    #[must_use]
    pub const fn new(registry: ActorRegistry, context: ActorContext) -> Self {
        Self { registry, context }
    }

    /// Decodes `payload` as an `event_name` event and runs it through the
    /// registered actors.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::UnsupportedEvent`] or [`BotError::MissingEventName`]
    /// for an unusable event name, [`BotError::Decode`] when the payload does
    /// not match the event shape, and [`BotError::ActorFailed`] wrapping the
    /// first actor error.
    pub async fn dispatch(
        &self,
        event_name: &str,
        payload: &[u8],
    ) -> Result<DispatchReport, BotError> {
        let event_type: EventType = event_name.parse()?;
        let event = GenericEvent::decode(event_type, payload)?;
        self.dispatch_event(&event).await
    }

    /// Runs an already decoded event through the registered actors.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::ActorFailed`] wrapping the first actor error.
    pub async fn dispatch_event(&self, event: &GenericEvent) -> Result<DispatchReport, BotError> {
        let event_type = event.event_type();
        let factories = self.registry.actors_for(event_type);
        tracing::debug!(
            "dispatching {event_type} event to {} actor(s)",
            factories.len()
        );

        let mut handled_by = Vec::new();
        for factory in factories {
            let mut actor = factory(self.context.clone());
            let name = actor.name();
            if !actor.claim(event.isolated_copy()) {
                tracing::debug!("{name} did not claim the {event_type} event");
                continue;
            }

            tracing::info!("{name} claimed the {event_type} event");
            if let Err(error) = actor.execute().await {
                tracing::error!("{name} failed: {error}");
                return Err(BotError::ActorFailed {
                    actor: name.to_owned(),
                    source: Box::new(error),
                });
            }
            tracing::info!("{name} finished");
            handled_by.push(name);
        }

        if handled_by.is_empty() {
            tracing::info!("no actor claimed the {event_type} event");
        }
        Ok(DispatchReport {
            event_type,
            handled_by,
        })
    }
}
