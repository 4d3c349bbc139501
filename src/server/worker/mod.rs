//! In-process event queue for derived record generation.
//!
//! Services publish a [`RecordEvent`] on the [`EventQueue`] after their transaction commits.
//! A single [`EventWorker`] task consumes the queue in publication order and hands each event
//! to the [`RecordEventHandler`].

pub mod handler;

#[cfg(test)]
mod tests;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::server::{error::Error, model::event::RecordEvent};

pub use handler::RecordEventHandler;

/// Sending half of the event queue.
///
/// Cheap to clone, every clone feeds the same worker.
#[derive(Clone)]
pub struct EventQueue {
    sender: UnboundedSender<RecordEvent>,
}

impl EventQueue {
    /// Creates a queue and the receiver to hand to an [`EventWorker`].
    pub fn new() -> (Self, UnboundedReceiver<RecordEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }

    /// Publishes an event.
    ///
    /// # Returns
    /// - `Ok(())` - Event queued
    /// - `Err(Error::InternalError)` - The worker has stopped, the event can't be processed
    pub fn publish(&self, event: RecordEvent) -> Result<(), Error> {
        tracing::debug!("Publishing event: {}", event);

        self.sender.send(event).map_err(|e| {
            Error::InternalError(format!(
                "Event queue closed, unable to publish event: {}",
                e.0
            ))
        })
    }
}

/// Consumer of the event queue.
pub struct EventWorker {
    receiver: UnboundedReceiver<RecordEvent>,
    handler: RecordEventHandler,
}

impl EventWorker {
    pub fn new(receiver: UnboundedReceiver<RecordEvent>, handler: RecordEventHandler) -> Self {
        Self { receiver, handler }
    }

    /// Spawns [`EventWorker::run`] on the tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Handles events until every [`EventQueue`] clone has been dropped.
    ///
    /// A failed event is logged and the worker moves on to the next one.
    pub async fn run(mut self) {
        tracing::info!("Event worker started");

        while let Some(event) = self.receiver.recv().await {
            if let Err(e) = self.handler.handle(&event).await {
                tracing::error!("Failed to handle event {}: {}", event, e);
            }
        }

        tracing::info!("Event worker stopped");
    }
}
