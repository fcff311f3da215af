//! Schedule file (`grafik.json`): an object mapping `YYYY-MM-DD|department`
//! keys to the shifts filed under them.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    db::{Database, ScheduleIndex},
    log_info,
};

const ENABLE_LOGS: bool = true;

pub fn to_json(schedule: &ScheduleIndex) -> Result<String> {
    serde_json::to_string_pretty(schedule).context("failed to serialize schedule")
}

pub fn from_json(text: &str) -> Result<ScheduleIndex> {
    serde_json::from_str(text).context("failed to parse schedule")
}

pub fn save_schedule(db: &Database, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let json = to_json(db.schedule())?;
    fs::write(path, json).with_context(|| format!("failed to write schedule to {}", path.display()))?;
    log_info!(
        "Saved schedule to {} ({} days)",
        path.display(),
        db.schedule().len()
    );
    Ok(())
}

/// Replaces the whole in-memory schedule with the file's contents. Returns
/// departments that had to be registered for the loaded keys.
pub fn load_schedule(db: &mut Database, path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule from {}", path.display()))?;
    let schedule = from_json(&text).with_context(|| format!("in {}", path.display()))?;
    let days = schedule.len();
    let registered = db.replace_schedule(schedule);
    log_info!("Loaded schedule from {} ({days} days)", path.display());
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{Role, ScheduleKey};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn populated() -> Database {
        let mut db = Database::default();
        let cook = db.add_role("Kucharz", "#D32F2F", "Kuchnia").unwrap();
        let waiter = db.add_role("Kelner", "#FFFFFF", "Sala").unwrap();
        db.assign(day(1), "Kuchnia", "Anna", &cook, "09-17");
        db.assign(day(1), "Kuchnia", "Piotr", &cook, "22-06");
        db.assign(day(2), "Sala", "Ewa", &waiter, "rano");
        db
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let db = populated();
        let json = to_json(db.schedule()).unwrap();
        assert_eq!(&from_json(&json).unwrap(), db.schedule());
    }

    #[test]
    fn writes_string_keys_and_camel_case_fields() {
        let db = populated();
        let value: serde_json::Value = serde_json::from_str(&to_json(db.schedule()).unwrap()).unwrap();
        let kitchen = &value["2026-10-01|Kuchnia"];
        assert_eq!(kitchen.as_array().unwrap().len(), 2);
        assert_eq!(kitchen[0]["employeeName"], "Anna");
        assert_eq!(kitchen[0]["roleColor"], "#D32F2F");
        assert_eq!(kitchen[1]["hoursCount"], 8.0);
        assert!(kitchen[0]["id"].is_string());
    }

    #[test]
    fn reads_files_written_with_pascal_case_fields() {
        let json = r##"{
            "2026-10-05|Kuchnia": [{
                "Id": "0b5c1f0e-8a51-4c4d-9f7e-2d8c0d7a6b11",
                "EmployeeName": "Anna",
                "RoleName": "Kucharz",
                "RoleColor": "#D32F2F",
                "Hours": "06-14",
                "HoursCount": 8,
                "TextColor": "White"
            }]
        }"##;
        let schedule = from_json(json).unwrap();
        let shifts = &schedule[&ScheduleKey::new(day(5), "Kuchnia")];
        assert_eq!(shifts[0].hours(), "06-14");
        assert_eq!(shifts[0].hours_count(), 8.0);
    }

    #[test]
    fn load_replaces_schedule_and_registers_departments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grafik.json");

        let mut source = Database::new(["Bar"]);
        let role = Role {
            name: "Barman".into(),
            color: "#FF6F00".into(),
            department: "Bar".into(),
        };
        source.assign(day(3), "Bar", "Ola", &role, "16-24");
        save_schedule(&source, &path).unwrap();

        let mut target = populated();
        let registered = load_schedule(&mut target, &path).unwrap();
        assert_eq!(registered, ["Bar"]);
        assert_eq!(target.schedule(), source.schedule());
        assert!(target.shifts_on(day(1), "Kuchnia").is_empty());
    }

    #[test]
    fn key_without_department_is_rejected() {
        let json = r#"{"2026-10-01|": []}"#;
        let err = from_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("2026-10-01|"), "{err:#}");
    }

    #[test]
    fn malformed_file_leaves_schedule_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grafik.json");
        fs::write(&path, r#"{"not-a-key": []}"#).unwrap();

        let mut db = populated();
        let before = db.schedule().clone();
        assert!(load_schedule(&mut db, &path).is_err());
        assert_eq!(db.schedule(), &before);
    }
}
