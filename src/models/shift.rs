use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::roster::{is_white, Role};

const KEY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One employee working one role for one hour range on one day.
///
/// `role_color` is copied from the role when the shift is created, so editing
/// or deleting the role later does not change how this shift is shown.
/// `hours_count` is derived from `hours` at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(alias = "Id")]
    id: Uuid,
    #[serde(alias = "EmployeeName")]
    employee_name: String,
    #[serde(alias = "RoleName")]
    role_name: String,
    #[serde(alias = "RoleColor")]
    role_color: String,
    #[serde(alias = "Hours")]
    hours: String,
    #[serde(alias = "HoursCount")]
    hours_count: f64,
}

impl Shift {
    pub fn new(employee_name: impl Into<String>, role: &Role, hours: impl Into<String>) -> Self {
        let hours = hours.into();
        Self {
            id: Uuid::new_v4(),
            employee_name: employee_name.into(),
            role_name: role.name.clone(),
            role_color: role.color.clone(),
            hours_count: hours_duration(&hours),
            hours,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn role_color(&self) -> &str {
        &self.role_color
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn hours_count(&self) -> f64 {
        self.hours_count
    }

    /// Foreground color that stays readable on the role color.
    pub fn text_color(&self) -> &'static str {
        if is_white(&self.role_color) {
            "Black"
        } else {
            "White"
        }
    }
}

/// Length of an hour range like `09-17`, wrapping past midnight (`22-06` is 8).
///
/// Anything that is not exactly two numbers around one `-` yields 0.
pub fn hours_duration(hours: &str) -> f64 {
    let mut parts = hours.split('-');
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0.0;
    };

    match (parse_hour(start), parse_hour(end)) {
        (Some(start), Some(end)) => {
            let duration = end - start;
            if duration < 0.0 {
                duration + 24.0
            } else {
                duration
            }
        }
        _ => 0.0,
    }
}

fn parse_hour(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schedule key '{0}', expected YYYY-MM-DD|department with a non-empty department")]
pub struct InvalidKey(pub String);

/// Index key for the shifts of one department on one day, written as
/// `YYYY-MM-DD|department`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleKey {
    pub date: NaiveDate,
    pub department: String,
}

impl ScheduleKey {
    pub fn new(date: NaiveDate, department: impl Into<String>) -> Self {
        Self {
            date,
            department: department.into(),
        }
    }
}

impl fmt::Display for ScheduleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.date.format(KEY_DATE_FORMAT), self.department)
    }
}

impl FromStr for ScheduleKey {
    type Err = InvalidKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (date, department) = value
            .split_once('|')
            .filter(|(_, department)| !department.trim().is_empty())
            .ok_or_else(|| InvalidKey(value.to_string()))?;
        let date = NaiveDate::parse_from_str(date, KEY_DATE_FORMAT)
            .map_err(|_| InvalidKey(value.to_string()))?;
        Ok(Self::new(date, department))
    }
}

impl TryFrom<String> for ScheduleKey {
    type Error = InvalidKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScheduleKey> for String {
    fn from(key: ScheduleKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::WHITE;

    fn role(color: &str) -> Role {
        Role {
            name: "Kucharz".into(),
            color: color.into(),
            department: "Kuchnia".into(),
        }
    }

    #[test]
    fn duration_of_day_shift() {
        assert_eq!(hours_duration("09-17"), 8.0);
    }

    #[test]
    fn duration_wraps_past_midnight() {
        assert_eq!(hours_duration("22-06"), 8.0);
    }

    #[test]
    fn malformed_hours_yield_zero() {
        assert_eq!(hours_duration("abc-def"), 0.0);
        assert_eq!(hours_duration("9"), 0.0);
        assert_eq!(hours_duration("8-12-16"), 0.0);
        assert_eq!(hours_duration(""), 0.0);
    }

    #[test]
    fn fractional_hours_accept_either_decimal_mark() {
        assert_eq!(hours_duration("9.5-17"), 7.5);
        assert_eq!(hours_duration("9,5-17"), 7.5);
    }

    #[test]
    fn shift_copies_role_and_derives_duration() {
        let shift = Shift::new("Anna", &role("#D32F2F"), "10-16");
        assert_eq!(shift.role_name(), "Kucharz");
        assert_eq!(shift.role_color(), "#D32F2F");
        assert_eq!(shift.hours_count(), 6.0);
        assert_eq!(shift.text_color(), "White");
        assert_eq!(Shift::new("Anna", &role("#ffffff"), "10-16").text_color(), "Black");
    }

    #[test]
    fn fresh_shifts_get_distinct_ids() {
        let a = Shift::new("Anna", &role(WHITE), "10-16");
        let b = Shift::new("Anna", &role(WHITE), "10-16");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn key_text_form() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let key = ScheduleKey::new(date, "Food|Truck");
        assert_eq!(key.to_string(), "2026-03-07|Food|Truck");
        assert_eq!("2026-03-07|Food|Truck".parse::<ScheduleKey>().unwrap(), key);
        assert!("2026-13-07|Sala".parse::<ScheduleKey>().is_err());
        assert!("Sala".parse::<ScheduleKey>().is_err());
    }

    #[test]
    fn key_needs_a_department() {
        assert_eq!(
            "2026-10-01|".parse::<ScheduleKey>(),
            Err(InvalidKey("2026-10-01|".into()))
        );
        assert!("2026-10-01|  ".parse::<ScheduleKey>().is_err());
    }

    #[test]
    fn reads_pascal_case_records() {
        let json = r##"{
            "Id": "7d9f1c4e-2a4b-4c1e-9a57-3f0f7f3b2c11",
            "EmployeeName": "Anna",
            "RoleName": "Kelner",
            "RoleColor": "#FFFFFF",
            "Hours": "09-17",
            "HoursCount": 8.0,
            "TextColor": "Black"
        }"##;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.employee_name(), "Anna");
        assert_eq!(shift.hours_count(), 8.0);
    }
}
