use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

use grafik_lib::{
    calendar::{weekday_name, DayCell, YearMonth},
    commands, settings, AppState,
};

#[derive(Parser)]
#[command(name = "grafik")]
#[command(version)]
#[command(about = "Reads the saved roster and schedule and prints or exports a department's month", long_about = None)]
struct Cli {
    /// Directory holding baza_danych.txt, grafik.json and settings.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists known departments
    Departments,
    /// Prints the month calendar with assigned shifts
    Grid {
        department: String,
        /// Month as YYYY-MM, current month if omitted
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Prints hours per employee for the month
    Stats {
        department: String,
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Writes the month to an .xlsx file
    Export {
        department: String,
        #[arg(short, long)]
        month: Option<YearMonth>,
        /// Output file, Grafik_<department>_<MM>_<YYYY>.xlsx in the data directory if omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn open(data_dir: Option<PathBuf>) -> Result<AppState> {
    let data_dir = data_dir.unwrap_or_else(settings::default_data_dir);
    let mut state = AppState::new(data_dir, Local::now().date_naive())?;

    if state.roster_path().exists() {
        commands::load_roster(&mut state).map_err(|e| anyhow!(e))?;
    }
    if state.schedule_path().exists() {
        commands::load_schedule(&mut state).map_err(|e| anyhow!(e))?;
    }
    Ok(state)
}

fn focus(state: &mut AppState, department: String, month: Option<YearMonth>) -> Result<()> {
    commands::select_department(state, department).map_err(|e| anyhow!(e))?;
    if let Some(month) = month {
        state.month = month;
    }
    Ok(())
}

fn print_grid(state: &AppState) -> Result<()> {
    let grid = commands::month_grid(state, Local::now().date_naive()).map_err(|e| anyhow!(e))?;
    println!("{} | {}", grid.department, state.month.label());

    for week in grid.weeks() {
        for cell in week {
            let DayCell::Day(day) = cell else { continue };
            let marker = if day.is_today { "*" } else { " " };
            let weekday = weekday_name(day.date.weekday());
            if day.shifts.is_empty() {
                println!("{marker}{} {weekday:<14} -", day.display_date());
                continue;
            }
            for (index, shift) in day.shifts.iter().enumerate() {
                let prefix = if index == 0 {
                    format!("{marker}{} {weekday:<14}", day.display_date())
                } else {
                    " ".repeat(21)
                };
                println!(
                    "{prefix} {} | {} | {} ({}h)",
                    shift.employee_name(),
                    shift.role_name(),
                    shift.hours(),
                    shift.hours_count()
                );
            }
        }
        println!();
    }
    Ok(())
}

fn print_stats(state: &AppState) -> Result<()> {
    let totals = commands::month_stats(state).map_err(|e| anyhow!(e))?;
    if totals.is_empty() {
        println!("No shifts in {}", state.month.label());
    }
    for entry in totals {
        println!("{:<24} {}h", entry.employee_name, entry.hours);
    }
    Ok(())
}

fn main() -> Result<()> {
    grafik_lib::init_logging();
    let args = Cli::parse();
    let mut state = open(args.data_dir)?;

    match args.command {
        Commands::Departments => {
            for department in commands::list_departments(&state) {
                println!("{department}");
            }
        }
        Commands::Grid { department, month } => {
            focus(&mut state, department, month)?;
            print_grid(&state)?;
        }
        Commands::Stats { department, month } => {
            focus(&mut state, department, month)?;
            print_stats(&state)?;
        }
        Commands::Export { department, month, out } => {
            focus(&mut state, department, month)?;
            let summary = commands::export_spreadsheet(&state, out).map_err(|e| anyhow!(e))?;
            println!(
                "Exported {} employees ({}h) to {}",
                summary.employees,
                summary.month_total,
                summary.path.display()
            );
        }
    }
    Ok(())
}
