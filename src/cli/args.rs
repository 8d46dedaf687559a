use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rafiq", version, about = "A terminal companion for daily Islamic practice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run setup wizard (location, calculation method, zakat defaults)
    Setup {
        /// Reset existing configuration
        #[arg(long)]
        reset: bool,
    },
    /// Show today's prayer times and countdown to the next prayer
    Times,
    /// Mark a prayer as prayed today
    Mark {
        /// Prayer name (fajr, zuhr, asr, maghrib, isha)
        prayer: String,
        /// Clear the flag instead of setting it
        #[arg(long)]
        undo: bool,
    },
    /// Sunnah task checklist
    Sunnah {
        #[command(subcommand)]
        action: SunnahCommands,
    },
    /// Fasting tracker
    Fast {
        #[command(subcommand)]
        action: FastCommands,
    },
    /// Quran reading bookmark
    Quran {
        #[command(subcommand)]
        action: QuranCommands,
    },
    /// Today's trivia question
    Trivia {
        /// Answer with option number 1-4
        #[arg(long)]
        answer: Option<usize>,
    },
    /// Qibla bearing and distance from the configured location
    Qibla,
    /// Zakat assessment for the given holdings
    Zakat {
        /// Cash and bank balances
        #[arg(long, default_value = "0")]
        cash: String,
        /// Gold held, in grams
        #[arg(long, default_value = "0")]
        gold_grams: String,
        /// Silver held, in grams
        #[arg(long, default_value = "0")]
        silver_grams: String,
        /// Value of trade goods and business inventory
        #[arg(long, default_value = "0")]
        business: String,
        /// Debts due, subtracted from net wealth
        #[arg(long, default_value = "0")]
        debts: String,
        /// Nisab basis: gold or silver (default from config)
        #[arg(long)]
        basis: Option<String>,
        /// Override the configured gold price per gram
        #[arg(long)]
        gold_price: Option<String>,
        /// Override the configured silver price per gram
        #[arg(long)]
        silver_price: Option<String>,
    },
    /// Show the current Hijri month
    Calendar,
    /// Show statistics
    Stats {
        /// Show an ASCII heatmap for the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Write a JSON snapshot of all tracked data to stdout
    Export,
    /// Import a JSON snapshot written by `export`
    Import {
        /// Path to the snapshot file
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum SunnahCommands {
    /// Show today's checklist
    List,
    /// Toggle a task for today by name
    Mark {
        /// Task name
        name: String,
    },
    /// Add a custom task
    Add {
        /// Task name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FastCommands {
    /// Record a fast
    Mark {
        /// Fast kind (ramadan, monday-thursday, ayyam-al-bid, ashura, arafah, voluntary).
        /// Defaults to the suggested kind for the date.
        #[arg(long)]
        kind: Option<String>,
        /// Date to record (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove the fast recorded for a date
    Unmark {
        /// Date to clear (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// List fasts recorded in the last 30 days
    List,
    /// Show upcoming sunnah fasting days
    Suggest,
}

#[derive(Subcommand, Debug)]
pub enum QuranCommands {
    /// Set the reading position, e.g. `rafiq quran bookmark 2:255`
    Bookmark {
        /// Reference in surah:ayah form
        reference: String,
    },
    /// Show the current reading position
    Show,
}
