mod clock;
mod stopwatch;

pub use clock::{ClockReadout, LocalTime, TimeSource, CLOCK_INTERVAL};
pub use stopwatch::{
    format_elapsed, toggle_label, Stopwatch, StopwatchState, StopwatchTime, QUANTUM,
};

use chrono::NaiveDateTime;
use log::debug;

use std::{fmt, time::Duration};

pub enum AppEvent {
    ClockTick(NaiveDateTime),
    StopwatchTick(Duration),
    ToggleRequested,
    ResetRequested,
}

impl fmt::Debug for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::ClockTick(_) => {
                write!(f, "ClockTick")
            }
            AppEvent::StopwatchTick(dt) => {
                write!(f, "StopwatchTick({}ms)", dt.as_millis())
            }
            AppEvent::ToggleRequested => {
                write!(f, "ToggleRequested")
            }
            AppEvent::ResetRequested => {
                write!(f, "ResetRequested")
            }
        }
    }
}

/// Everything the gui needs to draw a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub time: String,
    pub date: String,
    pub stopwatch: String,
    pub toggle_label: &'static str,
    pub running: bool,
}

pub struct App {
    clock: ClockReadout,
    stopwatch: Stopwatch,
}

impl App {
    pub fn new(now: NaiveDateTime) -> App {
        App {
            clock: ClockReadout::from_datetime(&now),
            stopwatch: Stopwatch::new(),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ClockTick(now) => {
                self.clock = ClockReadout::from_datetime(&now);
            }
            AppEvent::StopwatchTick(dt) => {
                self.stopwatch.tick(dt);
            }
            AppEvent::ToggleRequested => {
                self.stopwatch.toggle();
                debug!(
                    "Stopwatch {:?} at {}",
                    self.stopwatch.state(),
                    self.stopwatch.time()
                );
            }
            AppEvent::ResetRequested => {
                debug!("Stopwatch reset from {}", self.stopwatch.time());
                self.stopwatch.reset();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn display(&self) -> Display {
        Display {
            time: self.clock.time.clone(),
            date: self.clock.date.clone(),
            stopwatch: self.stopwatch.time().to_string(),
            toggle_label: toggle_label(self.stopwatch.state()),
            running: self.stopwatch.is_running(),
        }
    }
}
