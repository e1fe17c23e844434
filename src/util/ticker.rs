use std::time::{Duration, Instant};

/// Periodic timer polled from the frame loop.
///
/// Each call to [`Ticker::poll`] reports how many whole periods have passed since the last fired
/// period. Partial periods carry over to the next poll.
pub(crate) struct Ticker {
    period: Duration,
    last_fire: Option<Instant>,
}

impl Ticker {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub(crate) fn new(period: Duration) -> Ticker {
        assert!(!period.is_zero());
        Ticker {
            period,
            last_fire: None,
        }
    }

    pub(crate) fn start(&mut self, now: Instant) {
        if self.last_fire.is_none() {
            self.last_fire = Some(now);
        }
    }

    pub(crate) fn stop(&mut self) {
        self.last_fire = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.last_fire.is_some()
    }

    pub(crate) fn poll(&mut self, now: Instant) -> u32 {
        let last_fire = match self.last_fire {
            Some(v) => v,
            None => return 0,
        };

        let elapsed = now.saturating_duration_since(last_fire);
        let fired = elapsed.as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(fired).unwrap_or(u32::MAX);

        self.last_fire = Some(last_fire + self.period * fired);
        fired
    }

    pub(crate) fn time_until_next(&self, now: Instant) -> Option<Duration> {
        let next_fire = self.last_fire? + self.period;
        Some(next_fire.saturating_duration_since(now))
    }
}
