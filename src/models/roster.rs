//! Roster data models: the people, roles and hour templates a department
//! schedules with.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

pub const WHITE: &str = "#FFFFFF";

/// Colors offered when creating a role.
pub const ROLE_PALETTE: [&str; 64] = [
    "#D32F2F", "#C62828", "#B71C1C", "#FF1744", "#AD1457", "#880E4F", "#C2185B", "#E91E63",
    "#7B1FA2", "#6A1B9A", "#4A148C", "#AA00FF", "#6200EA", "#304FFE", "#1A237E", "#283593",
    "#1976D2", "#1565C0", "#0D47A1", "#0277BD", "#01579B", "#00838F", "#006064", "#0097A7",
    "#00796B", "#004D40", "#2E7D32", "#1B5E20", "#33691E", "#558B2F", "#827717", "#9E9D24",
    "#F57F17", "#FF6F00", "#E65100", "#BF360C", "#D84315", "#4E342E", "#3E2723", "#5D4037",
    "#424242", "#616161", "#455A64", "#37474F", "#263238", "#212121", "#757575", "#546E7A",
    "#DD2C00", "#FF3D00", "#2962FF", "#00BFA5", "#00C853", "#64DD17", "#AEEA00", "#FFD600",
    "#311B92", "#1A237E", "#004D40", "#1B5E20", "#BF360C", "#3E2723", "#263238", "#FFFFFF",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: String,
    pub color: String,
    pub department: String,
}

impl Role {
    pub fn is_white(&self) -> bool {
        is_white(&self.color)
    }
}

/// An hour range such as `09-17` that can be assigned in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    pub hours: String,
    pub department: String,
}

pub fn is_white(color: &str) -> bool {
    color.eq_ignore_ascii_case(WHITE)
}

pub fn validate_color(color: &str) -> Result<(), ScheduleError> {
    let invalid = || ScheduleError::InvalidColor(color.to_string());

    let hex_part = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex_part.len() != 6 && hex_part.len() != 8 {
        return Err(invalid());
    }
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    Ok(())
}

/// Parses `#RRGGBB` (or `#AARRGGBB`, alpha dropped) into a packed RGB value.
pub fn parse_hex_rgb(color: &str) -> Option<u32> {
    let hex_part = color.trim().strip_prefix('#')?;
    if !hex_part.is_ascii() {
        return None;
    }
    let rgb = match hex_part.len() {
        6 => hex_part,
        8 => &hex_part[2..],
        _ => return None,
    };
    u32::from_str_radix(rgb, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_valid() {
        for color in ROLE_PALETTE {
            assert!(validate_color(color).is_ok(), "{color}");
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(validate_color("FFFFFF").is_err());
        assert!(validate_color("#FFF").is_err());
        assert!(validate_color("#GG0000").is_err());
    }

    #[test]
    fn parses_rgb_and_argb() {
        assert_eq!(parse_hex_rgb("#FF3333"), Some(0xFF3333));
        assert_eq!(parse_hex_rgb("#80FF3333"), Some(0xFF3333));
        assert_eq!(parse_hex_rgb("red"), None);
    }

    #[test]
    fn white_detection_ignores_case() {
        assert!(is_white("#ffffff"));
        assert!(!is_white("#FFFFFE"));
    }
}
