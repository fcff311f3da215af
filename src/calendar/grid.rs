//! Month grid for one department: whole Monday-first weeks of day cells.
//!
//! The grid is rebuilt from the store on every call, so it always reflects
//! the current assignments and building it twice gives the same result.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::month::YearMonth;
use crate::{db::Database, models::Shift};

const BLANK_BACKGROUND: &str = "#141414";
const TODAY_BACKGROUND: &str = "#2D2D30";
const DAY_BACKGROUND: &str = "#1E1E1E";
const SUNDAY_DATE_COLOR: &str = "#FF5252";
const DAY_DATE_COLOR: &str = "#888";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DayCell {
    Blank,
    Day(CalendarDay),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_sunday: bool,
    pub shifts: Vec<Shift>,
}

impl CalendarDay {
    /// `dd.MM`
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m").to_string()
    }

    pub fn date_color(&self) -> &'static str {
        if self.is_sunday {
            SUNDAY_DATE_COLOR
        } else {
            DAY_DATE_COLOR
        }
    }
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(day) => Some(day.date),
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            DayCell::Blank => BLANK_BACKGROUND,
            DayCell::Day(day) if day.is_today => TODAY_BACKGROUND,
            DayCell::Day(_) => DAY_BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub month: YearMonth,
    pub department: String,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// Builds the grid for `department` in `month`. `today` only decides which
/// cell gets the today marker.
pub fn build_month_grid(db: &Database, month: YearMonth, department: &str, today: NaiveDate) -> MonthGrid {
    let leading = month.leading_blanks();
    let mut cells: Vec<DayCell> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(DayCell::Blank).take(leading));

    for date in month.days() {
        cells.push(DayCell::Day(CalendarDay {
            date,
            is_today: date == today,
            is_sunday: date.weekday() == Weekday::Sun,
            shifts: db.shifts_on(date, department).to_vec(),
        }));
    }

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat(DayCell::Blank).take(trailing));

    MonthGrid {
        month,
        department: department.to_string(),
        cells,
    }
}
