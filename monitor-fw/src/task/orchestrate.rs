//! Orchestrator Module
//!
//! Central coordinator: the single consumer of system events and the only
//! writer of the power state. Applies sampled signal levels to the tracker
//! and gates the postcode snoop tasks.

use defmt::info;

use crate::system::event::{self, Events};
use crate::system::snoop::SnoopCommander;
use crate::system::state::POWER_STATE;

/// Main orchestrator task
#[embassy_executor::task]
pub async fn orchestrate() {
    info!("orchestrator started");
    let mut snoop = SnoopCommander::new();

    loop {
        let event = event::wait().await;
        handle_event(event, &mut snoop).await;
    }
}

/// Applies one event to the power state and issues any snoop commands
async fn handle_event(event: Events, snoop: &mut SnoopCommander) {
    let mut state = POWER_STATE.lock().await;

    match event {
        Events::PowerGoodSampled(dc_on) => {
            state.sample_dc_power(dc_on);
        }
        Events::PowerOnSettled => {
            state.latch_dc_on_delayed();
            info!("power on settled: {}", *state);
            // The only arming site. The tracker checks powered-with-POST-
            // pending; the commander's armed latch absorbs repeats.
            state.maybe_start_snoop(snoop);
            info!("snoop arm state: {}", snoop.arm_state());
        }
        Events::PowerOffSettled => {
            state.latch_dc_off_delayed();
            info!("power off settled: {}", *state);
            // Re-enable arming for the next power cycle. post_complete is
            // deliberately left as-is until the next POST sample.
            snoop.disarm();
        }
        Events::PostSampled(raw) => {
            // Active-low conversion and the abort-on-complete side effect
            // happen inside the tracker.
            state.sample_post(raw, snoop);
        }
    }
}
