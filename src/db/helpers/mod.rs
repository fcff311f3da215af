use crate::error::ScheduleError;

/// Case-insensitive name comparison used for employees and roles.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Trims user input and rejects blank names.
pub fn clean_name(raw: &str) -> Result<String, ScheduleError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ScheduleError::EmptyName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_names_without_case() {
        assert!(same_name("Łukasz", "łUKASZ"));
        assert!(!same_name("Anna", "Anka"));
    }

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(clean_name("  Anna ").unwrap(), "Anna");
        assert_eq!(clean_name("   "), Err(ScheduleError::EmptyName));
    }
}
