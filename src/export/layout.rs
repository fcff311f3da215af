//! Spreadsheet matrix for one department and month, computed without
//! touching any spreadsheet API.
//!
//! Columns: employee name, then one column per day with a weekly sum column
//! after every Sunday and after the last day, then the monthly total.
//! Rows: title, day numbers, weekday names, then three rows per employee
//! (hours label, hour count, spacer).

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{
    calendar::YearMonth,
    db::{helpers::same_name, Database},
    models::roster::{is_white, parse_hex_rgb},
};

pub const NAME_COLUMN: u16 = 0;
pub const TITLE_ROW: u32 = 0;
pub const DAY_NUMBER_ROW: u32 = 1;
pub const WEEKDAY_ROW: u32 = 2;
pub const FIRST_EMPLOYEE_ROW: u32 = 3;
pub const ROWS_PER_EMPLOYEE: u32 = 3;

pub const SUM_FILL: u32 = 0xFF3333;
pub const WHITE_FILL: u32 = 0xFFFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnShade {
    Sunday,
    Saturday,
    EvenDay,
    Plain,
}

impl ColumnShade {
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => ColumnShade::Sunday,
            Weekday::Sat => ColumnShade::Saturday,
            _ if date.day() % 2 == 0 => ColumnShade::EvenDay,
            _ => ColumnShade::Plain,
        }
    }

    pub fn rgb(self) -> u32 {
        match self {
            ColumnShade::Sunday => 0xA0A0A0,
            ColumnShade::Saturday => 0xE0E0E0,
            ColumnShade::EvenDay => 0xFFF9C4,
            ColumnShade::Plain => WHITE_FILL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub column: u16,
    pub shade: ColumnShade,
    /// A weekly sum column follows this day.
    pub closes_week: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub month: YearMonth,
    pub days: Vec<DayColumn>,
    pub week_sum_columns: Vec<u16>,
    pub total_column: u16,
}

impl SheetLayout {
    /// Fill of every cell in an employee's spacer row, left to right: white
    /// under the name, the column shade under days, red under sums.
    pub fn spacer_fills(&self) -> Vec<(u16, u32)> {
        let mut fills = vec![(NAME_COLUMN, WHITE_FILL)];
        fills.extend(self.days.iter().map(|day| (day.column, day.shade.rgb())));
        fills.extend(self.week_sum_columns.iter().map(|&column| (column, SUM_FILL)));
        fills.push((self.total_column, SUM_FILL));
        fills.sort_by_key(|&(column, _)| column);
        fills
    }
}

pub fn plan_columns(month: YearMonth) -> SheetLayout {
    let last_day = month.days_in_month();
    let mut column = NAME_COLUMN + 1;
    let mut days = Vec::new();
    let mut week_sum_columns = Vec::new();

    for date in month.days() {
        let closes_week = date.weekday() == Weekday::Sun || date.day() == last_day;
        days.push(DayColumn {
            date,
            column,
            shade: ColumnShade::for_date(date),
            closes_week,
        });
        column += 1;

        if closes_week {
            week_sum_columns.push(column);
            column += 1;
        }
    }

    SheetLayout {
        month,
        days,
        week_sum_columns,
        total_column: column,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    /// Hours with `-` shown as `;`.
    pub label: String,
    pub hours: f64,
    /// Role fill; `None` for white roles and unreadable colors.
    pub fill: Option<u32>,
}

impl DayEntry {
    /// Background of both the label and the hour-count cell.
    pub fn cell_fill(&self, shade: ColumnShade) -> u32 {
        self.fill.unwrap_or(shade.rgb())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub name: String,
    pub days: Vec<Option<DayEntry>>,
    pub week_sums: Vec<f64>,
    pub month_total: f64,
}

/// Employees on the department's roster plus anyone who has a shift filed
/// under it, sorted by name ignoring case.
pub fn export_employees(db: &Database, department: &str) -> Vec<String> {
    let mut names: Vec<String> = db.employees_in(department).map(|employee| employee.name.clone()).collect();

    let scheduled = db
        .schedule()
        .iter()
        .filter(|(key, _)| key.department == department)
        .flat_map(|(_, shifts)| shifts.iter().map(|shift| shift.employee_name()));
    for name in scheduled {
        if !names.iter().any(|known| same_name(known, name)) {
            names.push(name.to_string());
        }
    }

    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    names
}

pub fn build_rows(db: &Database, layout: &SheetLayout, department: &str) -> Vec<EmployeeRow> {
    export_employees(db, department)
        .into_iter()
        .map(|name| build_row(db, layout, department, name))
        .collect()
}

fn build_row(db: &Database, layout: &SheetLayout, department: &str, name: String) -> EmployeeRow {
    let mut days = Vec::with_capacity(layout.days.len());
    let mut week_sums = Vec::with_capacity(layout.week_sum_columns.len());
    let mut week_total = 0.0;
    let mut month_total = 0.0;

    for day in &layout.days {
        let entry = db
            .shifts_on(day.date, department)
            .iter()
            .find(|shift| same_name(shift.employee_name(), &name))
            .map(|shift| {
                week_total += shift.hours_count();
                month_total += shift.hours_count();
                DayEntry {
                    label: shift.hours().replace('-', ";"),
                    hours: shift.hours_count(),
                    fill: role_fill(shift.role_color()),
                }
            });
        days.push(entry);

        if day.closes_week {
            week_sums.push(week_total);
            week_total = 0.0;
        }
    }

    EmployeeRow {
        name,
        days,
        week_sums,
        month_total,
    }
}

fn role_fill(color: &str) -> Option<u32> {
    if color.is_empty() || is_white(color) {
        None
    } else {
        parse_hex_rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn october() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn role(color: &str) -> Role {
        Role {
            name: "Kucharz".into(),
            color: color.into(),
            department: "Kuchnia".into(),
        }
    }

    #[test]
    fn week_sum_columns_follow_sundays_and_month_end() {
        // October 2026: Sundays on 4, 11, 18, 25; last day 31 is a Saturday.
        let layout = plan_columns(october());
        assert_eq!(layout.days.len(), 31);
        assert_eq!(layout.days[0].column, 1);
        assert_eq!(layout.days[3].column, 4);
        assert_eq!(layout.days[4].column, 6);
        assert_eq!(layout.days[30].column, 35);
        assert_eq!(layout.week_sum_columns, [5, 13, 21, 29, 36]);
        assert_eq!(layout.total_column, 37);
    }

    #[test]
    fn month_ending_on_sunday_gets_one_closing_column() {
        // May 2026 ends on Sunday the 31st.
        let layout = plan_columns(YearMonth::new(2026, 5).unwrap());
        assert_eq!(layout.days.iter().filter(|day| day.closes_week).count(), 5);
        assert_eq!(layout.week_sum_columns.len(), 5);
        assert_eq!(layout.total_column, 31 + 5 + 1);
    }

    #[test]
    fn spacer_row_covers_every_column() {
        let layout = plan_columns(october());
        let fills = layout.spacer_fills();

        assert_eq!(fills.len(), usize::from(layout.total_column) + 1);
        assert!(fills.iter().enumerate().all(|(index, &(column, _))| usize::from(column) == index));
        assert_eq!(fills[0], (NAME_COLUMN, WHITE_FILL));
        assert_eq!(fills[4], (4, ColumnShade::Sunday.rgb()));
        assert_eq!(fills[5], (5, SUM_FILL));
        assert_eq!(fills[6], (6, WHITE_FILL));
        assert_eq!(fills[7], (7, ColumnShade::EvenDay.rgb()));
        assert_eq!(fills[37], (37, SUM_FILL));
    }

    #[test]
    fn column_shading() {
        assert_eq!(ColumnShade::for_date(date(4)), ColumnShade::Sunday);
        assert_eq!(ColumnShade::for_date(date(3)), ColumnShade::Saturday);
        assert_eq!(ColumnShade::for_date(date(6)), ColumnShade::EvenDay);
        assert_eq!(ColumnShade::for_date(date(7)), ColumnShade::Plain);
    }

    #[test]
    fn employees_include_scheduled_names_from_other_rosters() {
        let mut db = Database::default();
        db.add_employee("piotr", "Kuchnia").unwrap();
        db.add_employee("Anna", "Kuchnia").unwrap();
        db.add_employee("Zenon", "Sala").unwrap();
        db.assign(date(1), "Kuchnia", "Borys", &role("#D32F2F"), "09-17");
        db.assign(date(2), "Kuchnia", "Anna", &role("#D32F2F"), "09-17");

        assert_eq!(export_employees(&db, "Kuchnia"), ["Anna", "Borys", "piotr"]);
        assert!(export_employees(&db, "FoodTruck").is_empty());
    }

    #[test]
    fn rows_sum_weeks_and_month() {
        let mut db = Database::default();
        db.add_employee("Anna", "Kuchnia").unwrap();
        db.assign(date(3), "Kuchnia", "Anna", &role("#D32F2F"), "09-17");
        db.assign(date(4), "Kuchnia", "Anna", &role(crate::models::roster::WHITE), "10-16");
        db.assign(date(5), "Kuchnia", "Anna", &role("#D32F2F"), "22-06");

        let layout = plan_columns(october());
        let rows = build_rows(&db, &layout, "Kuchnia");
        assert_eq!(rows.len(), 1);
        let row = &rows[0];

        assert_eq!(row.week_sums, [14.0, 8.0, 0.0, 0.0, 0.0]);
        assert_eq!(row.month_total, 22.0);

        let third = row.days[2].as_ref().unwrap();
        assert_eq!(third.label, "09;17");
        assert_eq!(third.hours, 8.0);
        assert_eq!(third.fill, Some(0xD32F2F));
        assert_eq!(third.cell_fill(layout.days[2].shade), 0xD32F2F);

        let white_sunday = row.days[3].as_ref().unwrap();
        assert_eq!(white_sunday.fill, None);
        assert_eq!(white_sunday.cell_fill(layout.days[3].shade), ColumnShade::Sunday.rgb());
        assert!(row.days[0].is_none());
    }
}
