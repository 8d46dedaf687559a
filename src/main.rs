mod cli;
mod config;
mod db;
mod models;
mod prayer_times;
mod qibla;
mod transfer;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::repository::MetaRepo;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        // Setup wizard
        Some(Commands::Setup { reset }) => {
            handlers::handle_setup(&conn, &mut config, reset)?;
        }

        // Explicit subcommands — check setup first
        Some(cmd) => {
            ensure_setup(&conn, &mut config)?;
            match cmd {
                Commands::Times => {
                    handlers::handle_times(&conn, &config)?;
                }
                Commands::Mark { prayer, undo } => {
                    handlers::handle_mark(&conn, &prayer, undo)?;
                }
                Commands::Sunnah { action } => {
                    handlers::handle_sunnah(&conn, &action)?;
                }
                Commands::Fast { action } => {
                    handlers::handle_fast(&conn, &config, &action)?;
                }
                Commands::Quran { action } => {
                    handlers::handle_quran(&conn, &action)?;
                }
                Commands::Trivia { answer } => {
                    handlers::handle_trivia(&conn, answer)?;
                }
                Commands::Qibla => {
                    handlers::handle_qibla(&config)?;
                }
                Commands::Zakat {
                    cash,
                    gold_grams,
                    silver_grams,
                    business,
                    debts,
                    basis,
                    gold_price,
                    silver_price,
                } => {
                    handlers::handle_zakat(
                        &config,
                        &cash,
                        &gold_grams,
                        &silver_grams,
                        &business,
                        &debts,
                        basis.as_deref(),
                        gold_price.as_deref(),
                        silver_price.as_deref(),
                    )?;
                }
                Commands::Calendar => {
                    handlers::handle_calendar(&config)?;
                }
                Commands::Stats { week } => {
                    handlers::handle_stats(&conn, week)?;
                }
                Commands::Export => {
                    handlers::handle_export(&conn)?;
                }
                Commands::Import { file } => {
                    handlers::handle_import(&conn, &file)?;
                }
                Commands::Setup { .. } => unreachable!(),
            }
        }

        // No subcommand → launch TUI
        None => {
            ensure_setup(&conn, &mut config)?;
            // Warm the prayer times cache for the week ahead
            if let Ok(calc) = handlers::calculator_from(&config) {
                if let Err(e) = calc.ensure_cached(&conn, 7) {
                    log::warn!("could not precompute prayer times: {}", e);
                }
            }
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}

/// Check if setup has been done; if not, run the wizard automatically.
fn ensure_setup(conn: &Connection, config: &mut AppConfig) -> Result<()> {
    let done = MetaRepo::get(conn, "setup_done")?;
    if done.as_deref() != Some("1") {
        eprintln!("No configuration found. Running setup...");
        eprintln!();
        handlers::handle_setup(conn, config, false)?;
    }
    Ok(())
}
