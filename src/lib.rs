pub mod calendar;
pub mod commands;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod persistence;
pub mod selection;
pub mod settings;
mod utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use calendar::YearMonth;
use db::Database;
use selection::ToolSelection;
use settings::{SettingsStore, ROSTER_FILE_NAME, SCHEDULE_FILE_NAME};

/// Everything one scheduling session works on. Commands borrow it for the
/// duration of a single user action.
pub struct AppState {
    pub db: Database,
    pub selection: ToolSelection,
    /// Month shown by the calendar and used for stats and export.
    pub month: YearMonth,
    /// Palette color the next added role gets.
    pub pending_role_color: String,
    pub settings: SettingsStore,
    data_dir: PathBuf,
}

impl AppState {
    /// Opens the data directory, creating it if needed, and starts a fresh
    /// store with the configured departments on the month containing `today`.
    /// Nothing is loaded from disk besides settings.
    pub fn new(data_dir: PathBuf, today: NaiveDate) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let settings = SettingsStore::in_dir(&data_dir)?;
        let db = Database::new(settings.settings().default_departments.iter());
        let pending_role_color = settings.settings().default_role_color.clone();

        log::info!(
            "Opened workspace {} with departments {:?}",
            data_dir.display(),
            db.departments()
        );

        Ok(Self {
            db,
            selection: ToolSelection::default(),
            month: YearMonth::containing(today),
            pending_role_color,
            settings,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(ROSTER_FILE_NAME)
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.data_dir.join(SCHEDULE_FILE_NAME)
    }
}

/// Opens the default data directory on the current month.
pub fn open_workspace() -> Result<AppState> {
    AppState::new(settings::default_data_dir(), Local::now().date_naive())
}

pub fn init_logging() {
    // Reads RUST_LOG; `info` otherwise.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
