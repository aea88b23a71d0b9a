//! Postcode snoop listener
//!
//! Captures host POST codes from the snoop port while armed: each rising
//! strobe edge latches the eight data lines into one postcode byte and
//! queues it for the sender. Parked until the orchestrator arms it; an
//! abort parks it again until the next power cycle.

use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Pull};

use crate::system::resources::{SnoopPortResources, SNOOP_STROBE_GPIO};
use crate::system::snoop;

/// Snoop listener task
#[embassy_executor::task]
pub async fn snoop_listen(r: SnoopPortResources) {
    let mut strobe = Input::new(r.strobe_pin, Pull::Down);
    let data = [
        Input::new(r.d0_pin, Pull::Down),
        Input::new(r.d1_pin, Pull::Down),
        Input::new(r.d2_pin, Pull::Down),
        Input::new(r.d3_pin, Pull::Down),
        Input::new(r.d4_pin, Pull::Down),
        Input::new(r.d5_pin, Pull::Down),
        Input::new(r.d6_pin, Pull::Down),
        Input::new(r.d7_pin, Pull::Down),
    ];

    loop {
        snoop::wait_start_listener().await;
        info!("snoop listener armed: strobe gpio({})", SNOOP_STROBE_GPIO);

        loop {
            match select(snoop::wait_abort(), strobe.wait_for_rising_edge()).await {
                Either::First(()) => {
                    info!("snoop listener aborted");
                    break;
                }
                Either::Second(()) => {
                    let code = read_port(&data);
                    // Drop rather than stall the capture loop when the
                    // sender falls behind.
                    if snoop::POSTCODE_CHANNEL.try_send(code).is_err() {
                        warn!("postcode queue full, dropping {=u8:#x}", code);
                    }
                }
            }
        }
    }
}

/// Latches the eight data lines into one byte, d0 as LSB
fn read_port(data: &[Input<'static>; 8]) -> u8 {
    let mut code = 0u8;
    for (bit, line) in data.iter().enumerate() {
        if line.is_high() {
            code |= 1 << bit;
        }
    }
    code
}
