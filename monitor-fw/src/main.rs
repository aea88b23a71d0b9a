//! Host power monitor entry point
//!
//! Initializes the system and spawns the monitoring tasks.

#![no_std]
#![no_main]

use crate::task::{
    orchestrate::orchestrate, post_monitor::post_monitor, postcode_send::postcode_send,
    power_good_monitor::power_good_monitor, snoop_listen::snoop_listen,
};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{
    AssignedResources, DcPowerResources, PostSignalResources, SnoopPortResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups, one per owning task.
    let r = split_resources!(p);

    // Orchestrator first so no sampled event is ever dropped.
    spawner.spawn(orchestrate()).unwrap();
    // Snoop tasks park until the orchestrator arms them.
    spawner.spawn(snoop_listen(r.snoop_port)).unwrap();
    spawner.spawn(postcode_send()).unwrap();
    // Monitors last; their initial samples find everything else running.
    spawner.spawn(power_good_monitor(r.dc_power)).unwrap();
    spawner.spawn(post_monitor(r.post_signal)).unwrap();
}
