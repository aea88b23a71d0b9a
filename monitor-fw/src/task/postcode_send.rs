//! Postcode forwarding
//!
//! Drains captured postcodes and reports them. Stands in for the
//! management-controller transport, which lives outside this firmware.

use defmt::info;

use crate::system::snoop;

/// Postcode sender task
#[embassy_executor::task]
pub async fn postcode_send() {
    snoop::wait_start_sender().await;
    info!("postcode sender started");

    loop {
        let code = snoop::POSTCODE_CHANNEL.receive().await;
        info!("postcode: {=u8:#x}", code);
    }
}
