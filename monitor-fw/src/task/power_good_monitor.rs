//! DC power-good monitoring
//!
//! Samples the host's power-good line and reports two kinds of events:
//! - `PowerGoodSampled` for the initial level and after every debounced edge
//! - `PowerOnSettled` / `PowerOffSettled` once a level has held for the
//!   settle interval, which drives the delayed latches and the snoop arming
//!
//! # Sensor Operation
//! - Digital input with edge detection
//! - Debounce delay filters contact glitches
//! - The settle interval implements the platform's "power on/off delayed"
//!   semantic; the state tracker itself enforces no timing

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};

use crate::system::{
    event::{send, Events},
    resources::{DcPowerResources, POWER_GOOD_GPIO},
};

/// Edge debounce delay
const DEBOUNCE_DELAY: Duration = Duration::from_millis(30);

/// Hold time before a power change counts as settled
const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Power-good monitoring task
#[embassy_executor::task]
pub async fn power_good_monitor(r: DcPowerResources) {
    // Pull-down so a disconnected host reads as powered off.
    let mut power_good = Input::new(r.power_good_pin, Pull::Down);
    info!("power good monitor started");

    loop {
        let dc_on = power_good.is_high();
        info!(
            "sample dc power: gpio({}) state({})",
            POWER_GOOD_GPIO, dc_on
        );
        send(Events::PowerGoodSampled(dc_on)).await;

        match select(Timer::after(SETTLE_DELAY), power_good.wait_for_any_edge()).await {
            Either::First(()) => {
                // Level held for the whole interval.
                send(if dc_on {
                    Events::PowerOnSettled
                } else {
                    Events::PowerOffSettled
                })
                .await;
                power_good.wait_for_any_edge().await;
                Timer::after(DEBOUNCE_DELAY).await;
            }
            Either::Second(()) => {
                // Level changed before settling; resample.
                Timer::after(DEBOUNCE_DELAY).await;
            }
        }
    }
}
