use std::{fmt, time::Duration};

/// Amount of time added to the stopwatch for every timer firing
pub const QUANTUM: Duration = Duration::from_millis(10);

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    #[default]
    Idle,
    Running,
}

/// Wall-clock breakdown of an accumulated stopwatch value.
///
/// Hours wrap at 24, centiseconds are truncated rather than rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub centiseconds: u64,
}

impl StopwatchTime {
    pub fn from_millis(t: u64) -> StopwatchTime {
        StopwatchTime {
            hours: (t / MS_PER_HOUR) % 24,
            minutes: (t / MS_PER_MINUTE) % 60,
            seconds: (t / MS_PER_SECOND) % 60,
            centiseconds: (t % MS_PER_SECOND) / 10,
        }
    }
}

impl fmt::Display for StopwatchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centiseconds
        )
    }
}

pub fn format_elapsed(t: u64) -> String {
    StopwatchTime::from_millis(t).to_string()
}

pub fn toggle_label(state: StopwatchState) -> &'static str {
    match state {
        StopwatchState::Idle => "Start",
        StopwatchState::Running => "Stop",
    }
}

#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed_ms: u64,
    state: StopwatchState,
}

impl Stopwatch {
    pub fn new() -> Stopwatch {
        Default::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            StopwatchState::Idle => StopwatchState::Running,
            StopwatchState::Running => StopwatchState::Idle,
        };
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.state = StopwatchState::Idle;
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.is_running() {
            return;
        }

        let dt_ms = u64::try_from(dt.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    pub fn time(&self) -> StopwatchTime {
        StopwatchTime::from_millis(self.elapsed_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(s: &str) -> StopwatchTime {
        let (hms, centiseconds) = s.split_once('.').expect("missing centiseconds");
        let mut it = hms.split(':').map(|v| v.parse::<u64>().expect("invalid number"));
        StopwatchTime {
            hours: it.next().unwrap(),
            minutes: it.next().unwrap(),
            seconds: it.next().unwrap(),
            centiseconds: centiseconds.parse().unwrap(),
        }
    }

    #[test]
    fn test_format_matches_direct_computation() {
        let day = 24 * MS_PER_HOUR;
        let mut t = 0;
        while t < day {
            let formatted = format_elapsed(t);
            assert_eq!(formatted.len(), 11, "{}", formatted);
            let parsed = parse(&formatted);
            assert_eq!(parsed.hours, (t / 3_600_000) % 24);
            assert_eq!(parsed.minutes, (t / 60_000) % 60);
            assert_eq!(parsed.seconds, (t / 1_000) % 60);
            assert_eq!(parsed.centiseconds, (t % 1_000) / 10);
            // Odd step so that every field gets exercised
            t += 7_919;
        }
        assert_eq!(format_elapsed(day - 1), "23:59:59.99");
    }

    #[test]
    fn test_centiseconds_truncate() {
        assert_eq!(format_elapsed(9), "00:00:00.00");
        assert_eq!(format_elapsed(19), "00:00:00.01");
        assert_eq!(format_elapsed(999), "00:00:00.99");
    }

    #[test]
    fn test_hours_wrap() {
        assert_eq!(format_elapsed(24 * MS_PER_HOUR), "00:00:00.00");
        assert_eq!(format_elapsed(25 * MS_PER_HOUR + 10), "01:00:00.01");
    }

    #[test]
    fn test_three_ticks() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        for _ in 0..3 {
            stopwatch.tick(QUANTUM);
        }
        assert_eq!(stopwatch.time().to_string(), "00:00:00.03");
    }

    #[test]
    fn test_hour_minute_second_then_reset() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        stopwatch.tick(Duration::from_millis(3_723_000));
        assert_eq!(stopwatch.time().to_string(), "01:02:03.00");

        stopwatch.reset();
        assert_eq!(stopwatch.time().to_string(), "00:00:00.00");
        assert_eq!(stopwatch.state(), StopwatchState::Idle);
    }

    #[test]
    fn test_idle_ignores_ticks() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.tick(QUANTUM);
        assert_eq!(stopwatch.elapsed_ms(), 0);

        stopwatch.toggle();
        stopwatch.tick(QUANTUM);
        stopwatch.toggle();
        stopwatch.tick(QUANTUM);
        stopwatch.tick(Duration::from_secs(5));
        assert_eq!(stopwatch.elapsed_ms(), 10);
    }

    #[test]
    fn test_running_is_monotonic() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        let mut last = stopwatch.elapsed_ms();
        for i in 0..100 {
            stopwatch.tick(QUANTUM * (i % 3));
            assert!(stopwatch.elapsed_ms() >= last);
            last = stopwatch.elapsed_ms();
        }
        assert_eq!(last, 990);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert_eq!(stopwatch.state(), StopwatchState::Idle);

        stopwatch.toggle();
        stopwatch.tick(QUANTUM);
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert_eq!(stopwatch.state(), StopwatchState::Idle);

        stopwatch.toggle();
        stopwatch.tick(QUANTUM);
        stopwatch.toggle();
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert_eq!(stopwatch.state(), StopwatchState::Idle);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut stopwatch = Stopwatch::new();
        for initial in [StopwatchState::Idle, StopwatchState::Running] {
            assert_eq!(stopwatch.state(), initial);
            stopwatch.toggle();
            stopwatch.tick(QUANTUM);
            stopwatch.toggle();
            assert_eq!(stopwatch.state(), initial);
            stopwatch.toggle();
        }
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(StopwatchState::Idle), "Start");
        assert_eq!(toggle_label(StopwatchState::Running), "Stop");
    }
}
