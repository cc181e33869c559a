//! Clock capability.
//!
//! The shell reads the ambient date and time through this trait once per
//! frame and passes the values down, so the calendar grid and the press
//! gesture never touch the wall clock themselves.

use chrono::{Local, NaiveDate};
use std::time::Instant;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Clock {
    /// Today's date in the local timezone.
    fn today(&self) -> NaiveDate;
    /// A monotonic timestamp for gesture timing.
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
