//! Snoop task control
//!
//! Signals that arm and abort the postcode snoop tasks, plus the channel
//! carrying captured postcodes from the listener to the sender.

use defmt::Format;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use power_core::SnoopControl;

/// Arms the snoop listener task
static START_LISTENER: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Arms the postcode sender task
static START_SENDER: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Stops the snoop listener task
static ABORT_LISTENER: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Captured postcodes, listener to sender
pub static POSTCODE_CHANNEL: Channel<CriticalSectionRawMutex, u8, 64> = Channel::new();

/// Waits for the next listener start command
pub async fn wait_start_listener() {
    START_LISTENER.wait().await
}

/// Waits for the next sender start command
pub async fn wait_start_sender() {
    START_SENDER.wait().await
}

/// Waits for the next listener abort command
pub async fn wait_abort() {
    ABORT_LISTENER.wait().await
}

/// Arming state of the snoop tasks
#[derive(Debug, Clone, Copy, PartialEq, Format)]
pub enum ArmState {
    /// Snoop tasks have been started for the current power cycle
    Armed,
    /// No start issued, or the listener has since been aborted
    Disarmed,
}

/// Issues start/abort commands to the snoop tasks.
///
/// Carries an explicit armed state so a repeated start request while already
/// armed is a no-op; the power-state tracker itself keeps no started-flag.
pub struct SnoopCommander {
    state: ArmState,
}

impl SnoopCommander {
    pub const fn new() -> Self {
        Self {
            state: ArmState::Disarmed,
        }
    }

    /// Current arming state
    pub fn arm_state(&self) -> ArmState {
        self.state
    }

    /// Re-enables arming without signaling the listener. Called on a settled
    /// power-off so the next power cycle may arm again.
    pub fn disarm(&mut self) {
        self.state = ArmState::Disarmed;
    }
}

impl SnoopControl for SnoopCommander {
    fn start_listener(&mut self) {
        if self.state == ArmState::Armed {
            return;
        }
        self.state = ArmState::Armed;
        // A latched abort from the previous cycle must not kill the new arm.
        // Commands only originate here, so resetting before signaling is
        // race-free.
        ABORT_LISTENER.reset();
        START_LISTENER.signal(());
    }

    fn start_postcode_sender(&mut self) {
        // Latching signal; redundant once the sender is running.
        START_SENDER.signal(());
    }

    fn abort_listener(&mut self) {
        self.state = ArmState::Disarmed;
        // Duplicate aborts collapse into the latched signal.
        ABORT_LISTENER.signal(());
    }
}
