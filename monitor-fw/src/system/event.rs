//! System Events
//!
//! Defines events and channels for inter-task communication. The monitor
//! tasks produce sampled signal levels; the orchestrator is the single
//! consumer and the only writer of the power state.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Multi-producer, single-consumer event channel with capacity of 10
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Events, 10> = Channel::new();

/// Sends an event to the system channel
pub async fn send(event: Events) {
    EVENT_CHANNEL.sender().send(event).await;
}

/// Receives the next event from the system channel
pub async fn wait() -> Events {
    EVENT_CHANNEL.receiver().receive().await
}

/// System-wide events
#[derive(Debug, Clone, Copy)]
pub enum Events {
    /// Power-good line sampled (true = host DC power present)
    PowerGoodSampled(bool),
    /// Power-good has held high for the settle interval
    PowerOnSettled,
    /// Power-good has held low for the settle interval
    PowerOffSettled,
    /// POST-complete line sampled (raw level; the line is active-low)
    PostSampled(bool),
}
