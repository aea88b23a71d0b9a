//! POST-complete monitoring
//!
//! Samples the host's POST-complete line. The line is active-low: a low
//! level means host firmware has finished its power-on self test.
//!
//! Every debounced sample is reported, unchanged levels included: the
//! abort side effect downstream is level-triggered, so samples must not be
//! change-filtered here.

use defmt::info;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};

use crate::system::{
    event::{send, Events},
    resources::{PostSignalResources, POST_COMPLETE_GPIO},
};

/// Edge debounce delay
const DEBOUNCE_DELAY: Duration = Duration::from_millis(30);

/// POST-complete monitoring task
#[embassy_executor::task]
pub async fn post_monitor(r: PostSignalResources) {
    // Pull-up matches the line idling deasserted (POST in progress) while
    // the host is off.
    let mut post_n = Input::new(r.post_complete_pin, Pull::Up);

    // Let the line settle before the initial sample.
    Timer::after(DEBOUNCE_DELAY).await;

    loop {
        let raw = post_n.is_high();
        info!(
            "sample post: gpio({}) state({})",
            POST_COMPLETE_GPIO, !raw
        );
        send(Events::PostSampled(raw)).await;

        post_n.wait_for_any_edge().await;
        Timer::after(DEBOUNCE_DELAY).await;
    }
}
