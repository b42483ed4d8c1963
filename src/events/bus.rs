//! Event delivery.
//!
//! `EventBus` hands each published event to every subscribed listener,
//! in subscription order, and also keeps it in a log the caller can drain.
//! Presentation code can therefore either subscribe or poll.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use shotgun_roulette::events::{EventBus, GameEvent};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(event.clone()));
//! bus.publish(GameEvent::RoundStarted { round: 2 });
//!
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! assert_eq!(bus.drain_events(), vec![GameEvent::RoundStarted { round: 2 }]);
//! ```

use tracing::{info, trace};

use super::event::GameEvent;

/// Receives game events as they are published.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Synchronous event dispatcher with a drainable log.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn EventListener>>,
    log: Vec<GameEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every future event.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver an event to all listeners and record it.
    pub fn publish(&mut self, event: GameEvent) {
        match &event {
            GameEvent::ItemUsed { .. } | GameEvent::ShotFired { .. } | GameEvent::TurnPassed { .. } => {
                trace!(%event, "event")
            }
            _ => info!(%event, "event"),
        }
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.log.push(event);
    }

    /// Publish a batch of events in order.
    pub fn publish_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.publish(event);
        }
    }

    /// Events published since the last drain.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.log
    }

    /// Take all events published since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.log)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("log", &self.log)
            .finish()
    }
}
