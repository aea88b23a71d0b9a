pub mod orchestrate;
pub mod post_monitor;
pub mod postcode_send;
pub mod power_good_monitor;
pub mod snoop_listen;
