use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "styczeń",
    "luty",
    "marzec",
    "kwiecień",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpień",
    "wrzesień",
    "październik",
    "listopad",
    "grudzień",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct InvalidMonth(pub String);

/// A calendar month, always valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first.iter_days().take_while(move |day| day.month() == month)
    }

    pub fn days_in_month(&self) -> u32 {
        self.days().count() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Blank cells before day 1 in a Monday-first week.
    pub fn leading_blanks(&self) -> usize {
        self.first.weekday().num_days_from_monday() as usize
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Header label, e.g. `PAŹDZIERNIK 2026`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.first.month0() as usize], self.year()).to_uppercase()
    }

    /// `MM_YYYY`, used in export file names.
    pub fn file_stamp(&self) -> String {
        format!("{:02}_{}", self.month(), self.year())
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "poniedziałek",
        Weekday::Tue => "wtorek",
        Weekday::Wed => "środa",
        Weekday::Thu => "czwartek",
        Weekday::Fri => "piątek",
        Weekday::Sat => "sobota",
        Weekday::Sun => "niedziela",
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = InvalidMonth;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMonth(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InvalidMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_days_including_leap_february() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2026, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn leading_blanks_follow_monday_first_weeks() {
        // 2026-06-01 is a Monday, 2026-03-01 a Sunday.
        assert_eq!(YearMonth::new(2026, 6).unwrap().leading_blanks(), 0);
        assert_eq!(YearMonth::new(2026, 3).unwrap().leading_blanks(), 6);
    }

    #[test]
    fn navigation_crosses_years() {
        let january = YearMonth::new(2027, 1).unwrap();
        assert_eq!(january.previous(), YearMonth::new(2026, 12).unwrap());
        assert_eq!(january.previous().next(), january);
    }

    #[test]
    fn labels() {
        let month = YearMonth::new(2026, 10).unwrap();
        assert_eq!(month.label(), "PAŹDZIERNIK 2026");
        assert_eq!(month.file_stamp(), "10_2026");
        assert_eq!(month.to_string(), "2026-10");
        assert_eq!("2026-10".parse::<YearMonth>().unwrap(), month);
        assert!("2026-13".parse::<YearMonth>().is_err());
    }
}
