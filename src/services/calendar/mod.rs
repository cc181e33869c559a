//! Month grid generation for the calendar screen.
//!
//! The grid is rebuilt from scratch every render: a run of empty placeholder
//! cells up to the weekday of the 1st (Sunday-based), then one cell per day
//! of the month. Today's date is injected by the caller so the generator
//! stays deterministic.

use chrono::{Datelike, NaiveDate};

use crate::utils::date::{last_day_of_month, month_name};

/// The (year, month) pair shown by the calendar screen.
///
/// This is the only navigational state the calendar keeps. No day component
/// is carried across month changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    pub year: i32,
    pub month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
        Self { year, month }
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Advance one month, rolling December into January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Retreat one month, rolling January into December of the previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid first of month")
    }

    pub fn days_in_month(self) -> u32 {
        last_day_of_month(self.year, self.month)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header text for the month navigation strip, e.g. "November 2025".
    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// One cell of the month grid, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Placeholder before day 1.
    Empty,
    Day { day: u32, is_today: bool },
}

/// Number of empty placeholder cells before day 1, equal to the
/// Sunday-based weekday index of the first of the month.
pub fn leading_offset(month: DisplayedMonth) -> u32 {
    month.first_day().weekday().num_days_from_sunday()
}

/// Build the ordered cell sequence for one month.
///
/// Produces exactly `leading_offset + days_in_month` cells. At most one cell
/// is flagged as today, and only when `today` falls inside the displayed
/// month.
pub fn month_grid(month: DisplayedMonth, today: NaiveDate) -> Vec<CalendarCell> {
    let offset = leading_offset(month);
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity((offset + days) as usize);

    for _ in 0..offset {
        cells.push(CalendarCell::Empty);
    }
    for day in 1..=days {
        let is_today = month.contains(today) && today.day() == day;
        cells.push(CalendarCell::Day { day, is_today });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn november_2025_starts_on_saturday() {
        // 2025-11-01 is a Saturday: six placeholders, then 30 days.
        let month = DisplayedMonth::new(2025, 11);
        let cells = month_grid(month, date(2025, 11, 15));

        assert_eq!(leading_offset(month), 6);
        assert_eq!(cells.len(), 36);
        assert!(cells[..6].iter().all(|c| *c == CalendarCell::Empty));
        assert_eq!(
            cells[6],
            CalendarCell::Day {
                day: 1,
                is_today: false
            }
        );
        assert_eq!(
            cells[6 + 14],
            CalendarCell::Day {
                day: 15,
                is_today: true
            }
        );
    }

    #[test]
    fn today_outside_displayed_month_is_never_flagged() {
        let cells = month_grid(DisplayedMonth::new(2025, 11), date(2025, 12, 15));
        let flagged = cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day { is_today: true, .. }))
            .count();
        assert_eq!(flagged, 0);
    }

    #[test]
    fn month_rollover_crosses_year_boundaries() {
        assert_eq!(
            DisplayedMonth::new(2025, 12).next(),
            DisplayedMonth::new(2026, 1)
        );
        assert_eq!(
            DisplayedMonth::new(2026, 1).previous(),
            DisplayedMonth::new(2025, 12)
        );
    }

    #[test]
    fn title_formats_month_and_year() {
        assert_eq!(DisplayedMonth::new(2025, 11).title(), "November 2025");
    }
}
