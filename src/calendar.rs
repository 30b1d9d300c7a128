//! Month Calendar
//!
//! Fixed six-week month grid starting on Sunday, with month navigation.

use chrono::{Datelike, Days, Months, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKS_SHOWN: usize = 6;

/// One day cell in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
    pub is_today: bool,
}

impl DayCell {
    pub fn class_name(&self) -> String {
        let mut c = String::from("calendar-day");
        if !self.in_month { c.push_str(" other-month"); }
        if self.is_today { c.push_str(" today"); }
        c
    }
}

/// The month currently shown, kept as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    #[cfg(test)]
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn next(self) -> Self {
        self.0.checked_add_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        self.0.checked_sub_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    /// Heading such as "October 2026"
    pub fn title(&self) -> String {
        self.0.format("%B %Y").to_string()
    }

    /// Six rows of seven days covering the month
    pub fn weeks(&self, today: NaiveDate) -> Vec<Vec<DayCell>> {
        let lead = u64::from(self.0.weekday().num_days_from_sunday());
        let start = self.0.checked_sub_days(Days::new(lead)).unwrap_or(self.0);
        let cells: Vec<DayCell> = start
            .iter_days()
            .take(WEEKS_SHOWN * 7)
            .map(|date| DayCell {
                date,
                in_month: date.month() == self.0.month() && date.year() == self.0.year(),
                is_today: date == today,
            })
            .collect();
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }
}
