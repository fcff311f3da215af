use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{db::DEFAULT_DEPARTMENTS, models::roster::WHITE};

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const ROSTER_FILE_NAME: &str = "baza_danych.txt";
pub const SCHEDULE_FILE_NAME: &str = "grafik.json";

const DATA_DIR_ENV: &str = "GRAFIK_DATA_DIR";
const DATA_DIR_NAME: &str = "GrafikManager";

/// How the roster loader treats records with missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RosterImportMode {
    /// Short records fall back to the first department, as older files expect.
    #[default]
    Legacy,
    /// Short or unknown records fail the whole load.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub roster_import: RosterImportMode,
    pub default_departments: Vec<String>,
    pub default_role_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_import: RosterImportMode::Legacy,
            default_departments: DEFAULT_DEPARTMENTS.iter().map(|name| name.to_string()).collect(),
            default_role_color: WHITE.to_string(),
        }
    }
}

/// `$GRAFIK_DATA_DIR`, else `<Documents>/GrafikManager`, else `./GrafikManager`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::document_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

/// Settings persisted as JSON next to the data files.
pub struct SettingsStore {
    path: PathBuf,
    data: Settings,
}

impl SettingsStore {
    /// Reads `path` if it exists. Unreadable JSON falls back to defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { path, data })
    }

    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::new(data_dir.join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.data
    }

    pub fn update(&mut self, settings: Settings) -> Result<()> {
        self.data = settings;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
