//! System State Management
//!
//! Holds the global host power state behind a mutex. All mutations funnel
//! through the orchestrator task, which preserves the tracker's
//! single-writer-per-field contract; other tasks may take the lock for
//! read-only access.
//!
//! # State Access Pattern
//! ```ignore
//! let state = POWER_STATE.lock().await;
//! // Read or modify state here
//! // Lock automatically released when state goes out of scope
//! ```

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use power_core::PowerState;

/// Global host power state protected by a mutex
///
/// Initialized with every signal deasserted: host off, no delayed latches
/// taken, POST not complete.
pub static POWER_STATE: Mutex<CriticalSectionRawMutex, PowerState> =
    Mutex::new(PowerState::new());
