//! Host power-state tracking
//!
//! Tracks the managed host's power signals as debounced boolean state:
//! - DC power-good, as most recently sampled
//! - delayed-latch snapshots of power on/off, taken by the caller once a
//!   level has held for its settle interval
//! - POST completion (the hardware line is active-low)
//!
//! The tracker owns no hardware and no timing. The integrator samples the
//! GPIO lines, decides when a level counts as settled, and feeds the results
//! in; the tracker turns them into state and into start/abort commands for
//! the postcode snoop tasks via [`SnoopControl`].
//!
//! All operations are total and synchronous, and the design assumes a single
//! caller context mutating the state serially (in the firmware, the
//! orchestrator task behind a mutex).

#![cfg_attr(not(test), no_std)]

/// Commands to the postcode snoop tasks.
///
/// All three are fire-and-forget and must not block; the implementor owns
/// the tasks' actual lifecycle, the tracker only issues requests.
pub trait SnoopControl {
    /// Start capturing postcodes from the snoop port.
    fn start_listener(&mut self);
    /// Start forwarding captured postcodes.
    fn start_postcode_sender(&mut self);
    /// Stop capturing postcodes.
    fn abort_listener(&mut self);
}

/// Power-signal state of the managed host.
///
/// Each field has exactly one writer operation; everything else is a pure
/// read. The delayed latches are independent snapshots of `dc_on` taken at
/// latch time and may be stale relative to the current sample; that
/// staleness is the debounce semantic, so the two latches are not guaranteed
/// to be complements of each other at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    dc_on: bool,
    dc_on_delayed: bool,
    dc_off_delayed: bool,
    post_complete: bool,
}

impl PowerState {
    /// All signals deasserted: host off, POST not complete.
    pub const fn new() -> Self {
        Self {
            dc_on: false,
            dc_on_delayed: false,
            dc_off_delayed: false,
            post_complete: false,
        }
    }

    /// Records the latest power-good sample.
    pub fn sample_dc_power(&mut self, level: bool) {
        self.dc_on = level;
    }

    /// Power-good as of the most recent sample.
    pub fn dc_power(&self) -> bool {
        self.dc_on
    }

    /// Snapshots `dc_on` into the on-delayed latch. Call once the on level
    /// has held for the settle interval; the tracker enforces no timing.
    pub fn latch_dc_on_delayed(&mut self) {
        self.dc_on_delayed = self.dc_on;
    }

    /// Power-good as of the last on-delayed latch.
    pub fn dc_on_delayed(&self) -> bool {
        self.dc_on_delayed
    }

    /// Snapshots `!dc_on` into the off-delayed latch. Caller-timed, like
    /// [`latch_dc_on_delayed`](Self::latch_dc_on_delayed).
    pub fn latch_dc_off_delayed(&mut self) {
        self.dc_off_delayed = !self.dc_on;
    }

    /// Power-absent as of the last off-delayed latch.
    pub fn dc_off_delayed(&self) -> bool {
        self.dc_off_delayed
    }

    /// Records the latest POST-complete sample. The line is active-low, so a
    /// low `level` means POST has finished.
    ///
    /// Whenever the sample reads complete, one abort is issued before this
    /// returns. Level-triggered, not edge-triggered: repeated complete
    /// samples re-issue the abort, matching the original platform behavior.
    pub fn sample_post(&mut self, level: bool, snoop: &mut impl SnoopControl) {
        self.post_complete = !level;

        if self.post_complete {
            snoop.abort_listener();
        }
    }

    /// POST completion as of the most recent sample.
    ///
    /// Not reset when DC power drops; a stale `true` persists into the next
    /// power cycle until `sample_post` runs again.
    pub fn post_complete(&self) -> bool {
        self.post_complete
    }

    /// Starts the snoop listener and postcode sender iff the host is powered
    /// and POST has not completed; otherwise does nothing.
    ///
    /// The tracker keeps no started-flag. Callers that may re-enter this
    /// while already armed need an idempotent [`SnoopControl`] (the firmware
    /// commander tracks an explicit armed state for that).
    pub fn maybe_start_snoop(&self, snoop: &mut impl SnoopControl) {
        if self.dc_on && !self.post_complete {
            snoop.start_listener();
            snoop.start_postcode_sender();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts commands instead of running tasks.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct RecordingSnoop {
        listener_starts: usize,
        sender_starts: usize,
        aborts: usize,
    }

    impl SnoopControl for RecordingSnoop {
        fn start_listener(&mut self) {
            self.listener_starts += 1;
        }

        fn start_postcode_sender(&mut self) {
            self.sender_starts += 1;
        }

        fn abort_listener(&mut self) {
            self.aborts += 1;
        }
    }

    #[test]
    fn dc_power_tracks_latest_sample() {
        let mut state = PowerState::new();
        assert!(!state.dc_power());

        state.sample_dc_power(true);
        assert!(state.dc_power());

        state.sample_dc_power(true);
        assert!(state.dc_power());

        state.sample_dc_power(false);
        assert!(!state.dc_power());
    }

    #[test]
    fn on_delayed_latch_snapshots_at_latch_time() {
        let mut state = PowerState::new();

        state.sample_dc_power(true);
        state.latch_dc_on_delayed();
        assert!(state.dc_on_delayed());

        // Later samples must not disturb the latch.
        state.sample_dc_power(false);
        assert!(state.dc_on_delayed());
        assert!(!state.dc_power());

        state.latch_dc_on_delayed();
        assert!(!state.dc_on_delayed());
    }

    #[test]
    fn off_delayed_latch_is_negation_at_latch_time() {
        let mut state = PowerState::new();

        state.latch_dc_off_delayed();
        assert!(state.dc_off_delayed());

        state.sample_dc_power(true);
        // Stale until re-latched.
        assert!(state.dc_off_delayed());

        state.latch_dc_off_delayed();
        assert!(!state.dc_off_delayed());
    }

    #[test]
    fn latches_are_independent_snapshots() {
        let mut state = PowerState::new();

        state.sample_dc_power(true);
        state.latch_dc_on_delayed();
        state.sample_dc_power(false);
        state.latch_dc_off_delayed();

        // Both latches read true here; they are snapshots from different
        // instants, not complements.
        assert!(state.dc_on_delayed());
        assert!(state.dc_off_delayed());
    }

    #[test]
    fn post_complete_sample_aborts_exactly_once() {
        let mut state = PowerState::new();
        let mut snoop = RecordingSnoop::default();

        // Active-low: low level means POST finished.
        state.sample_post(false, &mut snoop);
        assert!(state.post_complete());
        assert_eq!(snoop.aborts, 1);
        assert_eq!(snoop.listener_starts, 0);
        assert_eq!(snoop.sender_starts, 0);
    }

    #[test]
    fn post_in_progress_sample_never_aborts() {
        let mut state = PowerState::new();
        let mut snoop = RecordingSnoop::default();

        state.sample_post(true, &mut snoop);
        assert!(!state.post_complete());
        assert_eq!(snoop.aborts, 0);
    }

    #[test]
    fn repeated_complete_samples_abort_each_time() {
        let mut state = PowerState::new();
        let mut snoop = RecordingSnoop::default();

        state.sample_post(false, &mut snoop);
        state.sample_post(false, &mut snoop);

        // Level-triggered: the duplicate abort is intended behavior.
        assert!(state.post_complete());
        assert_eq!(snoop.aborts, 2);
    }

    #[test]
    fn start_requires_power_on_and_post_pending() {
        for (dc_on, post_level, expect_start) in [
            (false, true, false),
            (false, false, false),
            (true, false, false),
            (true, true, true),
        ] {
            let mut state = PowerState::new();
            let mut snoop = RecordingSnoop::default();
            state.sample_dc_power(dc_on);
            state.sample_post(post_level, &mut snoop);

            let mut snoop = RecordingSnoop::default();
            state.maybe_start_snoop(&mut snoop);

            let expected = usize::from(expect_start);
            assert_eq!(snoop.listener_starts, expected);
            assert_eq!(snoop.sender_starts, expected);
        }
    }

    #[test]
    fn full_power_cycle_scenario() {
        let mut state = PowerState::new();
        let mut snoop = RecordingSnoop::default();

        // Host powers on; monitoring arms.
        state.sample_dc_power(true);
        state.maybe_start_snoop(&mut snoop);
        assert_eq!(snoop.listener_starts, 1);
        assert_eq!(snoop.sender_starts, 1);

        // POST still in progress: no abort.
        state.sample_post(true, &mut snoop);
        assert!(!state.post_complete());
        assert_eq!(snoop.aborts, 0);

        // POST finishes: exactly one abort.
        state.sample_post(false, &mut snoop);
        assert!(state.post_complete());
        assert_eq!(snoop.aborts, 1);

        // Power drops; post_complete holds its stale value until the next
        // POST sample.
        state.sample_dc_power(false);
        assert!(!state.dc_power());
        assert!(state.post_complete());

        // The stale value also blocks re-arming on the next power-on until
        // POST is sampled again.
        state.sample_dc_power(true);
        state.maybe_start_snoop(&mut snoop);
        assert_eq!(snoop.listener_starts, 1);

        state.sample_post(true, &mut snoop);
        state.maybe_start_snoop(&mut snoop);
        assert_eq!(snoop.listener_starts, 2);
        assert_eq!(snoop.sender_starts, 2);
    }
}
