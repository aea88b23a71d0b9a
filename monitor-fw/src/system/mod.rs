//! Core system components for the power monitor
pub mod event;
pub mod resources;
pub mod snoop;
pub mod state;
