//! Hardware Resource Management
//!
//! Assigns the monitored host signals and the snoop port pins to their
//! owning tasks. Each input line has exactly one owner:
//! - DC power-good: power-good monitor task
//! - POST-complete (active-low): POST monitor task
//! - Snoop port (strobe + 8 data lines): snoop listener task

use assign_resources::assign_resources;
use embassy_rp::peripherals;

/// GPIO number of the power-good line, for sampling diagnostics
pub const POWER_GOOD_GPIO: u8 = 26;
/// GPIO number of the POST-complete line, for sampling diagnostics
pub const POST_COMPLETE_GPIO: u8 = 27;
/// GPIO number of the snoop strobe line, for capture diagnostics
pub const SNOOP_STROBE_GPIO: u8 = 8;

assign_resources! {
    /// Host DC power-good input
    dc_power: DcPowerResources {
        power_good_pin: PIN_26,
    },
    /// Host POST-complete input (active-low)
    post_signal: PostSignalResources {
        post_complete_pin: PIN_27,
    },
    /// Postcode snoop port: strobe plus eight data lines, d0 is LSB
    snoop_port: SnoopPortResources {
        strobe_pin: PIN_8,
        d0_pin: PIN_0,
        d1_pin: PIN_1,
        d2_pin: PIN_2,
        d3_pin: PIN_3,
        d4_pin: PIN_4,
        d5_pin: PIN_5,
        d6_pin: PIN_6,
        d7_pin: PIN_7,
    },
}
