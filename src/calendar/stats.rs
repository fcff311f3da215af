use std::collections::HashMap;

use serde::Serialize;

use super::month::YearMonth;
use crate::db::Database;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    pub employee_name: String,
    pub hours: f64,
}

/// Total hours per employee in one department for one month, highest first.
/// Equal totals keep the order in which employees first appear.
pub fn monthly_hours(db: &Database, month: YearMonth, department: &str) -> Vec<EmployeeHours> {
    let mut totals: Vec<EmployeeHours> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for date in month.days() {
        for shift in db.shifts_on(date, department) {
            match positions.get(shift.employee_name()) {
                Some(&index) => totals[index].hours += shift.hours_count(),
                None => {
                    positions.insert(shift.employee_name().to_string(), totals.len());
                    totals.push(EmployeeHours {
                        employee_name: shift.employee_name().to_string(),
                        hours: shift.hours_count(),
                    });
                }
            }
        }
    }

    totals.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    totals
}
