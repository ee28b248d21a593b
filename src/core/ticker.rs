//! Deadlines for the live board.
//!
//! Two independent timers share one thread: a display tick every second and
//! a reload aligned to the next server-time hour, then hourly. The caller
//! sleeps until [`Ticker::next_due`] and fires whatever is due.

use std::time::{Duration, Instant};

pub const DISPLAY_PERIOD: Duration = Duration::from_secs(1);
pub const RELOAD_PERIOD: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Redraw the clock line only.
    Display,
    /// Re-fetch and re-resolve.
    Reload,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    next_display: Instant,
    next_reload: Instant,
}

impl Ticker {
    /// `until_next_hour` is the delay to the next server-time hour boundary.
    pub fn new(start: Instant, until_next_hour: Duration) -> Self {
        Self {
            next_display: start + DISPLAY_PERIOD,
            next_reload: start + until_next_hour,
        }
    }

    /// Earliest pending deadline. A reload wins a tie so the redraw that
    /// follows shows fresh data.
    pub fn next_due(&self) -> (Instant, Tick) {
        if self.next_reload <= self.next_display {
            (self.next_reload, Tick::Reload)
        } else {
            (self.next_display, Tick::Display)
        }
    }

    /// Mark `tick` as fired and schedule its next occurrence. Periods are
    /// added to the previous deadline, not to the firing time, so a slow
    /// redraw does not drift the hourly alignment.
    pub fn fire(&mut self, tick: Tick) {
        match tick {
            Tick::Display => self.next_display += DISPLAY_PERIOD,
            Tick::Reload => self.next_reload += RELOAD_PERIOD,
        }
    }

    /// Skip display ticks that were missed while the thread was busy.
    pub fn catch_up(&mut self, now: Instant) {
        while self.next_display + DISPLAY_PERIOD <= now {
            self.next_display += DISPLAY_PERIOD;
        }
    }
}
