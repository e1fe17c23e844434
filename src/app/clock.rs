use chrono::{Local, NaiveDateTime};

use std::time::Duration;

pub const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%Y/%m/%d %a";

/// Source of the current local date and time
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClockReadout {
    pub time: String,
    pub date: String,
}

impl ClockReadout {
    pub fn from_datetime(dt: &NaiveDateTime) -> ClockReadout {
        ClockReadout {
            time: dt.format(TIME_FORMAT).to_string(),
            date: dt.format(DATE_FORMAT).to_string(),
        }
    }
}
