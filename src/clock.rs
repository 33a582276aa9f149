use hifitime::{Duration, Epoch};

/// Clock collaborator driving the animation. One [SimulationClock::tick]
/// per frame; every satellite in that frame is propagated at the
/// returned instant.
pub trait SimulationClock {
    /// Advances the clock and returns the simulated time of the frame.
    fn tick(&mut self) -> Epoch;
}

/// Wall clock (UTC).
pub struct SystemClock {
    last: Epoch,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Epoch::now().unwrap_or_else(|_| Epoch::from_gregorian_utc_at_midnight(2000, 1, 1)),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock for SystemClock {
    fn tick(&mut self) -> Epoch {
        // system time may be unavailable in exotic setups: repeat the
        // previous reading rather than jump around
        if let Ok(now) = Epoch::now() {
            self.last = now;
        }
        self.last
    }
}

/// Deterministic clock: starts at a fixed instant and advances by a
/// fixed step on every tick. The first tick returns the start instant.
pub struct SteppedClock {
    now: Epoch,
    step: Duration,
}

impl SteppedClock {
    pub fn new(start: Epoch, step: Duration) -> Self {
        Self { now: start, step }
    }
}

impl SimulationClock for SteppedClock {
    fn tick(&mut self) -> Epoch {
        let t = self.now;
        self.now = t + self.step;
        t
    }
}

#[cfg(test)]
mod test {
    use super::{SimulationClock, SteppedClock, SystemClock};
    use hifitime::{Epoch, Unit};

    #[test]
    fn stepped_clock_is_deterministic() {
        let start = Epoch::from_gregorian_utc_at_midnight(2008, 9, 20);
        let mut clock = SteppedClock::new(start, Unit::Second * 30);
        assert_eq!(clock.tick(), start);
        assert_eq!(clock.tick(), start + Unit::Second * 30);
        assert_eq!(clock.tick(), start + Unit::Minute * 1);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let mut clock = SystemClock::new();
        let t0 = clock.tick();
        let t1 = clock.tick();
        assert!(t1 >= t0);
    }
}
