/// Accumulates simulated time from per-frame wall-clock timestamps.
///
/// The timestamp comes from the host's frame scheduler
/// (`FrameInput::accumulated_time`) and is expected to be monotonic.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimClock {
    sim_time_ms: f64,
    last_timestamp_ms: Option<f64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one frame timestamp into the clock and returns the measured
    /// frame delta in milliseconds.
    ///
    /// The first call only records a baseline and returns zero. Simulated
    /// time advances only while not paused, but the baseline is updated on
    /// every call, so un-pausing never replays the paused interval as one
    /// large delta.
    pub fn advance(&mut self, timestamp_ms: f64, paused: bool) -> f64 {
        let delta = match self.last_timestamp_ms {
            // Out of contract, but don't let a backwards timestamp
            // rewind simulated time.
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };

        if !paused {
            self.sim_time_ms += delta;
        }
        self.last_timestamp_ms = Some(timestamp_ms);

        delta
    }

    #[inline]
    pub fn sim_time_ms(&self) -> f64 {
        self.sim_time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_baseline_only() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(1234.0, false), 0.0);
        assert_eq!(clock.sim_time_ms(), 0.0);
    }

    #[test]
    fn accumulates_while_running() {
        let mut clock = SimClock::new();
        clock.advance(0.0, false);
        assert_eq!(clock.advance(16.0, false), 16.0);
        assert_eq!(clock.advance(48.0, false), 32.0);
        assert_eq!(clock.sim_time_ms(), 48.0);
    }

    #[test]
    fn paused_frames_leave_sim_time_untouched() {
        let mut clock = SimClock::new();
        clock.advance(0.0, false);
        clock.advance(16.0, false);
        let frozen = clock.sim_time_ms();

        clock.advance(32.0, true);
        clock.advance(480.0, true);
        assert_eq!(clock.sim_time_ms(), frozen);
    }

    #[test]
    fn resume_does_not_replay_paused_interval() {
        let mut clock = SimClock::new();
        clock.advance(0.0, false);
        clock.advance(16.0, false);

        // A long pause, with frames still arriving.
        clock.advance(32.0, true);
        clock.advance(5000.0, true);

        // The first unpaused frame contributes only its own delta.
        let delta = clock.advance(5016.0, false);
        assert_eq!(delta, 16.0);
        assert_eq!(clock.sim_time_ms(), 32.0);
    }

    #[test]
    fn backwards_timestamp_clamps_to_zero() {
        let mut clock = SimClock::new();
        clock.advance(100.0, false);
        assert_eq!(clock.advance(50.0, false), 0.0);
        assert_eq!(clock.sim_time_ms(), 0.0);
    }
}
