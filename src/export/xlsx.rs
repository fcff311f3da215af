//! XLSX rendering of a department's month.
//!
//! ```text
//! | GRAFIK: KUCHNIA - PAŹDZIERNIK 2026                                   |
//! | PRACOWNIK | 1 | 2 | 3 | 4 | SUMA TYG. | 5 | ... | SUMA MIES.         |
//! |           | c | p | s | n |           | p | ... |                    |
//! | Anna      |   |   |09;17|10;16|  14   |   | ... |        22          |
//! |           |   |   | 8 | 6 |           |   | ... |                    |
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use super::layout::{
    build_rows, plan_columns, EmployeeRow, SheetLayout, DAY_NUMBER_ROW, FIRST_EMPLOYEE_ROW, NAME_COLUMN,
    ROWS_PER_EMPLOYEE, SUM_FILL, TITLE_ROW, WEEKDAY_ROW, WHITE_FILL,
};
use crate::{
    calendar::{weekday_name, YearMonth},
    db::Database,
    error::ScheduleError,
    log_info,
};

const ENABLE_LOGS: bool = true;

const SPACER_OFFSET: u32 = 2;
const SHEET_NAME_LIMIT: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// What a finished export wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub employees: usize,
    pub month_total: f64,
}

/// `Grafik_<department>_<MM>_<YYYY>.xlsx`
pub fn default_export_file_name(department: &str, month: YearMonth) -> String {
    format!("Grafik_{}_{}.xlsx", department, month.file_stamp())
}

/// Worksheet names are capped at 31 characters and may not contain
/// `[ ] : * ? / \` or start or end with an apostrophe.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(SHEET_NAME_LIMIT)
        .collect();
    let cleaned = cleaned.trim_matches(|c: char| c == '\'' || c.is_whitespace());
    if cleaned.is_empty() {
        "Grafik".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Writes the month of `department` to `path`. Fails with
/// [`ScheduleError::NothingToExport`] when the department has no employees
/// and no shifts at all.
pub fn export_month(db: &Database, month: YearMonth, department: &str, path: &Path) -> Result<ExportSummary> {
    let layout = plan_columns(month);
    let rows = build_rows(db, &layout, department);
    if rows.is_empty() {
        return Err(ScheduleError::NothingToExport(department.to_string()).into());
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(department))?;

    write_header(worksheet, &layout, department)?;
    for (index, row) in rows.iter().enumerate() {
        let top = FIRST_EMPLOYEE_ROW + index as u32 * ROWS_PER_EMPLOYEE;
        write_employee(worksheet, &layout, row, top)?;
    }
    worksheet.set_freeze_panes(FIRST_EMPLOYEE_ROW, NAME_COLUMN + 1)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    workbook
        .save(path)
        .with_context(|| format!("failed to write spreadsheet {}", path.display()))?;

    let summary = ExportSummary {
        path: path.to_path_buf(),
        employees: rows.len(),
        month_total: rows.iter().map(|row| row.month_total).sum(),
    };
    log_info!(
        "Exported {} {} to {} ({} employees)",
        department,
        month,
        path.display(),
        summary.employees
    );
    Ok(summary)
}

fn boxed(fill: u32) -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black)
        .set_font_color(Color::Black)
        .set_background_color(Color::RGB(fill))
}

fn sum_format() -> Format {
    boxed(SUM_FILL).set_bold()
}

/// Bold header text turned 90°, used for weekday names and sum titles.
fn rotated_header(fill: u32) -> Format {
    boxed(fill).set_bold().set_rotation(90)
}

fn write_header(worksheet: &mut Worksheet, layout: &SheetLayout, department: &str) -> Result<()> {
    let title = format!("GRAFIK: {} - {}", department.to_uppercase(), layout.month.label());
    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    worksheet.merge_range(TITLE_ROW, NAME_COLUMN, TITLE_ROW, layout.total_column, &title, &title_format)?;
    worksheet.set_row_height(TITLE_ROW, 25)?;

    let name_header = boxed(WHITE_FILL).set_bold();
    worksheet.merge_range(DAY_NUMBER_ROW, NAME_COLUMN, WEEKDAY_ROW, NAME_COLUMN, "PRACOWNIK", &name_header)?;
    worksheet.set_column_width(NAME_COLUMN, 18)?;

    for day in &layout.days {
        let shaded = boxed(day.shade.rgb()).set_bold();
        worksheet.write_with_format(DAY_NUMBER_ROW, day.column, day.date.day(), &shaded)?;
        let rotated = rotated_header(day.shade.rgb());
        let weekday = weekday_name(day.date.weekday()).to_uppercase();
        worksheet.write_with_format(WEEKDAY_ROW, day.column, weekday.as_str(), &rotated)?;
        worksheet.set_column_width(day.column, 6)?;
    }

    let sum_header = rotated_header(SUM_FILL);
    for &column in &layout.week_sum_columns {
        worksheet.merge_range(DAY_NUMBER_ROW, column, WEEKDAY_ROW, column, "SUMA TYG.", &sum_header)?;
        worksheet.set_column_width(column, 8)?;
    }
    worksheet.merge_range(
        DAY_NUMBER_ROW,
        layout.total_column,
        WEEKDAY_ROW,
        layout.total_column,
        "SUMA MIES.",
        &sum_header,
    )?;
    worksheet.set_column_width(layout.total_column, 9)?;
    worksheet.set_row_height(WEEKDAY_ROW, 85)?;

    Ok(())
}

fn write_employee(worksheet: &mut Worksheet, layout: &SheetLayout, row: &EmployeeRow, top: u32) -> Result<()> {
    let bottom = top + 1;

    let name_format = boxed(WHITE_FILL).set_bold();
    worksheet.merge_range(top, NAME_COLUMN, bottom, NAME_COLUMN, &row.name, &name_format)?;

    for (day, entry) in layout.days.iter().zip(&row.days) {
        let shade = boxed(day.shade.rgb());
        match entry {
            Some(entry) => {
                let filled = boxed(entry.cell_fill(day.shade));
                let label_format = filled.clone().set_font_size(9);
                worksheet.write_with_format(top, day.column, entry.label.as_str(), &label_format)?;
                worksheet.write_with_format(bottom, day.column, entry.hours, &filled)?;
            }
            None => {
                worksheet.write_blank(top, day.column, &shade)?;
                worksheet.write_blank(bottom, day.column, &shade)?;
            }
        }
    }

    let sums = sum_format();
    for (&column, &hours) in layout.week_sum_columns.iter().zip(&row.week_sums) {
        write_sum(worksheet, top, column, hours, &sums)?;
    }
    write_sum(worksheet, top, layout.total_column, row.month_total, &sums)?;

    let spacer = top + SPACER_OFFSET;
    for (column, fill) in layout.spacer_fills() {
        worksheet.write_blank(spacer, column, &boxed(fill))?;
    }
    worksheet.set_row_height(spacer, 6)?;
    Ok(())
}

/// Two-row merged sum cell, left empty when there is nothing to add up.
fn write_sum(worksheet: &mut Worksheet, top: u32, column: u16, hours: f64, format: &Format) -> Result<()> {
    worksheet.merge_range(top, column, top + 1, column, "", format)?;
    if hours > 0.0 {
        worksheet.write_with_format(top, column, hours, format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn october() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    #[test]
    fn file_name_uses_department_and_month() {
        assert_eq!(default_export_file_name("Kuchnia", october()), "Grafik_Kuchnia_10_2026.xlsx");
    }

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sanitize_sheet_name("Sala/Bar"), "Sala_Bar");
        assert_eq!(sanitize_sheet_name("'Kuchnia'"), "Kuchnia");
        assert_eq!(sanitize_sheet_name("''"), "Grafik");
        assert_eq!(sanitize_sheet_name("Bar '"), "Bar");
        assert_eq!(sanitize_sheet_name(" 'Sala' "), "Sala");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).chars().count(), 31);
    }

    #[test]
    fn sum_titles_are_rotated_like_weekdays() {
        assert_eq!(rotated_header(SUM_FILL), sum_format().set_rotation(90));
        assert_ne!(rotated_header(SUM_FILL), sum_format());
    }

    #[test]
    fn empty_department_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let err = export_month(&Database::default(), october(), "Kuchnia", &path).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ScheduleError>(),
            Some(&ScheduleError::NothingToExport("Kuchnia".into()))
        );
        assert!(!path.exists());
    }

    #[test]
    fn writes_workbook_with_totals() {
        let mut db = Database::default();
        db.add_employee("Anna", "Kuchnia").unwrap();
        db.add_employee("Piotr", "Kuchnia").unwrap();
        let cook = db.add_role("Kucharz", "#D32F2F", "Kuchnia").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
        db.assign(date, "Kuchnia", "Anna", &cook, "09-17");
        db.assign(date, "Kuchnia", "Piotr", &cook, "22-06");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(default_export_file_name("Kuchnia", october()));
        let summary = export_month(&db, october(), "Kuchnia", &path).unwrap();

        assert_eq!(summary.employees, 2);
        assert_eq!(summary.month_total, 16.0);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
