// Fixed-rate tick scheduling
//
// Animation speeds and movement steps are expressed per tick, so the
// simulation advances at a constant tick rate no matter how fast frames are
// presented. `TickClock` turns elapsed wall-clock time into whole ticks.

use std::time::{Duration, Instant};

/// Simulation ticks per second
pub const TICK_RATE: u32 = 60;
const TICK_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks to run per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Tick scheduling state
#[derive(Debug)]
pub struct TickClock {
    /// Wall-clock time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.ticks_for(frame_time)
    }

    /// Account for `elapsed` wall-clock time and return the ticks it buys
    fn ticks_for(&mut self, elapsed: Duration) -> u32 {
        // If paused, don't accumulate time for ticks
        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop time we refused to simulate instead of replaying it later
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::debug!("Dropping {:?} of backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator and frame time to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = TickClock::new();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_one_tick_per_tick_duration() {
        let mut clock = TickClock::new();
        assert_eq!(clock.ticks_for(TICK_DURATION), 1);
        assert_eq!(clock.ticks_for(TICK_DURATION * 3), 3);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let mut clock = TickClock::new();
        assert_eq!(clock.ticks_for(TICK_DURATION / 2), 0);
        assert_eq!(clock.ticks_for(TICK_DURATION / 2 + Duration::from_micros(1)), 1);
    }

    #[test]
    fn test_max_ticks_per_frame_limit() {
        let mut clock = TickClock::new();
        // 300ms would allow 18 ticks
        assert_eq!(clock.ticks_for(Duration::from_millis(300)), MAX_TICKS_PER_FRAME);
        // The backlog was dropped
        assert_eq!(clock.ticks_for(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut clock = TickClock::new();
        clock.pause();
        assert_eq!(clock.ticks_for(Duration::from_millis(50)), 0);
        // Time spent paused is not replayed after resuming
        clock.resume();
        assert_eq!(clock.ticks_for(Duration::ZERO), 0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = TickClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());

        clock.toggle_pause();
        assert!(!clock.is_paused());
    }
}
