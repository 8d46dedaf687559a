use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::cli::args::{FastCommands, QuranCommands, SunnahCommands};
use crate::config::AppConfig;
use crate::db::repository::{
    CacheRepo, FastingRepo, MetaRepo, PrayerRepo, QuranRepo, StatsRepo, SunnahRepo, TriviaRepo,
};
use crate::models::fasting::suggested_fast;
use crate::models::quran::Bookmark;
use crate::models::trivia::{question_for_date, TriviaQuestion};
use crate::models::zakat::{self, NisabBasis, ZakatAssets};
use crate::models::{FastKind, PrayerName, TriviaAnswer};
use crate::prayer_times::calculator::{PrayerCalculator, CALC_METHODS};
use crate::qibla::{compass_point, qibla_direction};
use crate::transfer;
use crate::utils::format::{format_duration_secs, format_time, pad_display};
use crate::utils::hijri::{hijri_month_days, to_hijri, today_hijri_string};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

// ─── Setup wizard ────────────────────────────────────────────────────────────

pub fn handle_setup(conn: &Connection, config: &mut AppConfig, reset: bool) -> Result<()> {
    if !reset {
        if let Some(done) = MetaRepo::get(conn, "setup_done")? {
            if done == "1" {
                println!("rafiq is already configured. Use --reset to reconfigure.");
                return Ok(());
            }
        }
    }

    println!();
    println_colored!(GOLD, "  rafiq setup");
    println_colored!(DIM, "  Press Enter to keep the value in brackets.");
    println!();

    config.location.name = prompt_with_default("City", &config.location.name, |s| {
        if s.trim().is_empty() {
            Err("Please enter a city name".to_string())
        } else {
            Ok(s.to_string())
        }
    })?;

    config.location.latitude = prompt_with_default(
        "Latitude",
        &config.location.latitude.to_string(),
        |s| match s.parse::<f64>() {
            Ok(v) if (-90.0..=90.0).contains(&v) => Ok(v),
            Ok(_) => Err("Latitude must be between -90 and 90".to_string()),
            Err(_) => Err("Enter a number, e.g. 33.6938".to_string()),
        },
    )?;

    config.location.longitude = prompt_with_default(
        "Longitude",
        &config.location.longitude.to_string(),
        |s| match s.parse::<f64>() {
            Ok(v) if (-180.0..=180.0).contains(&v) => Ok(v),
            Ok(_) => Err("Longitude must be between -180 and 180".to_string()),
            Err(_) => Err("Enter a number, e.g. 73.0651".to_string()),
        },
    )?;

    println!();
    for (i, m) in CALC_METHODS.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, m);
    }
    let current_method = CALC_METHODS
        .iter()
        .position(|m| *m == config.location.calc_method)
        .unwrap_or(0);
    let method_idx = prompt_with_default(
        "Calculation method",
        &(current_method + 1).to_string(),
        |s| match s.parse::<usize>() {
            Ok(n) if (1..=CALC_METHODS.len()).contains(&n) => Ok(n - 1),
            _ => Err(format!("Enter a number between 1 and {}", CALC_METHODS.len())),
        },
    )?;
    config.location.calc_method = CALC_METHODS[method_idx].to_string();

    config.location.madhab = prompt_with_default(
        "Madhab for Asr (Hanafi/Shafi)",
        &config.location.madhab,
        |s| match s.to_lowercase().as_str() {
            "hanafi" => Ok("Hanafi".to_string()),
            "shafi" | "shafi'i" => Ok("Shafi".to_string()),
            _ => Err("Enter Hanafi or Shafi".to_string()),
        },
    )?;

    config.location.timezone_offset = prompt_with_default(
        "UTC offset (e.g. +5:30, -3)",
        &format_tz_offset(config.location.timezone_offset),
        |s| parse_tz_offset(s).map_err(|_| "Use a format like +5:30, -3, or +5.5".to_string()),
    )?;

    config.location.hijri_offset = prompt_with_default(
        "Hijri day offset for local moon sighting (-1, 0, +1)",
        &config.location.hijri_offset.to_string(),
        |s| match s.parse::<i32>() {
            Ok(v) if (-2..=2).contains(&v) => Ok(v),
            _ => Err("Enter a small whole number like -1, 0, or 1".to_string()),
        },
    )?;

    config.zakat.currency = prompt_with_default("Zakat currency", &config.zakat.currency, |s| {
        if s.trim().is_empty() {
            Err("Enter a currency code, e.g. USD".to_string())
        } else {
            Ok(s.trim().to_uppercase())
        }
    })?;

    config.zakat.nisab_basis = prompt_with_default(
        "Nisab basis (gold/silver)",
        &config.zakat.nisab_basis,
        |s| {
            NisabBasis::from_str(s)
                .map(|b| b.as_str().to_string())
                .map_err(|e| e.to_string())
        },
    )?;

    config.zakat.gold_price_per_gram = prompt_with_default(
        &format!("Gold price per gram ({})", config.zakat.currency),
        &config.zakat.gold_price_per_gram.to_string(),
        parse_positive_price,
    )?;

    config.zakat.silver_price_per_gram = prompt_with_default(
        &format!("Silver price per gram ({})", config.zakat.currency),
        &config.zakat.silver_price_per_gram.to_string(),
        parse_positive_price,
    )?;

    config.save()?;
    MetaRepo::set(conn, "setup_done", "1")?;
    // Location may have changed; cached times are stale.
    CacheRepo::clear_all(conn)?;

    println!();
    println_colored!(
        GREEN,
        "  ✓ Saved. Prayer times will be calculated for {} ({}, {})",
        config.location.name,
        config.location.latitude,
        config.location.longitude
    );
    Ok(())
}

fn parse_positive_price(s: &str) -> std::result::Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err("Enter a price greater than zero".to_string()),
    }
}

/// Prompt until `validate` accepts. Empty input takes the default.
fn prompt_with_default<T, F>(message: &str, default: &str, validate: F) -> Result<T>
where
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        let raw = prompt(&format!("  {} [{}]: ", message, default))?;
        let value = if raw.trim().is_empty() { default } else { raw.trim() };
        match validate(value) {
            Ok(v) => return Ok(v),
            Err(e) => println_colored!(RED, "  ✗ {}", e),
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())
}

/// Parse a UTC offset string into total minutes.
/// Accepts: "5:30", "+5:30", "-5:30", "5", "+5", "5.5"
pub fn parse_tz_offset(s: &str) -> Result<i32> {
    let s = s.trim().trim_start_matches('+');
    let negative = s.starts_with('-');
    let s = s.trim_start_matches('-');
    let sign = if negative { -1 } else { 1 };

    let minutes = if s.contains(':') {
        let mut parts = s.splitn(2, ':');
        let hours: i32 = parts.next().unwrap_or("0").parse()?;
        let mins: i32 = parts.next().unwrap_or("0").parse()?;
        hours * 60 + mins
    } else if s.contains('.') {
        let hours: f64 = s.parse()?;
        (hours * 60.0).round() as i32
    } else {
        let hours: i32 = s.parse()?;
        hours * 60
    };

    Ok(sign * minutes)
}

/// Format total minutes as "+H:MM" string
pub fn format_tz_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "+" };
    let abs = minutes.abs();
    let h = abs / 60;
    let m = abs % 60;
    if m == 0 {
        format!("{}{}", sign, h)
    } else {
        format!("{}{}:{:02}", sign, h, m)
    }
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(conn: &Connection, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let now_time = Local::now().time();

    let calc = calculator_from(config)?;
    let times = calc.get_cached_or_compute(conn, today)?;

    println!();
    println_colored!(
        GOLD,
        "  Prayer Times — {} ({})",
        config.location.name,
        today.format("%Y-%m-%d")
    );
    println_colored!(DIM, "  {}", today_hijri_string(config.location.hijri_offset));
    println!();

    let rows = [
        ("Fajr", times.fajr),
        ("Sunrise", times.sunrise),
        ("Zuhr", times.zuhr),
        ("Asr", times.asr),
        ("Maghrib", times.maghrib),
        ("Isha", times.isha),
    ];

    for (name, time) in &rows {
        if *time < now_time {
            println_colored!(DIM, "  {:<10}  {}", name, format_time(*time));
        } else {
            println_colored!(BOLD, "  {:<10}  {}", name, format_time(*time));
        }
    }

    if let Some((next, secs)) = calc.get_next_prayer(conn, today, now_time)? {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            next.display_name(),
            format_duration_secs(secs)
        );
    }
    println!();
    Ok(())
}

pub fn calculator_from(config: &AppConfig) -> Result<PrayerCalculator> {
    PrayerCalculator::new(
        config.location.latitude,
        config.location.longitude,
        &config.location.calc_method,
        &config.location.madhab,
        config.location.timezone_offset,
    )
}

// ─── Mark prayer ─────────────────────────────────────────────────────────────

pub fn handle_mark(conn: &Connection, prayer_str: &str, undo: bool) -> Result<()> {
    let prayer = PrayerName::from_str(prayer_str)
        .map_err(|_| anyhow!("Unknown prayer '{}'. Use: fajr, zuhr, asr, maghrib, isha", prayer_str))?;
    let today = today_string();

    PrayerRepo::ensure_day_rows(conn, &today)?;
    PrayerRepo::set_done(conn, prayer, &today, !undo)?;

    if undo {
        println_colored!(DIM, "  ○ {} unmarked", prayer.display_name());
    } else {
        println_colored!(GREEN, "  ✓ {} marked as prayed", prayer.display_name());
    }
    Ok(())
}

// ─── Sunnah ──────────────────────────────────────────────────────────────────

pub fn handle_sunnah(conn: &Connection, action: &SunnahCommands) -> Result<()> {
    let today = today_string();

    match action {
        SunnahCommands::List => {
            let tasks = SunnahRepo::get_active_tasks(conn)?;
            let log = SunnahRepo::get_log_for_date(conn, &today)?;
            println!();
            println_colored!(GOLD, "  Sunnah — {}", today);
            println!();
            for task in &tasks {
                let done = log
                    .iter()
                    .find(|l| l.task_id == task.id)
                    .map(|l| l.completed)
                    .unwrap_or(false);
                if done {
                    println_colored!(GREEN, "  ● {}", pad_display(&task.name, 30));
                } else {
                    println_colored!(DIM, "  ○ {}", pad_display(&task.name, 30));
                }
            }
            println!();
        }
        SunnahCommands::Mark { name } => {
            let task = SunnahRepo::find_by_name(conn, name)?
                .ok_or_else(|| anyhow!("No task named '{}'. See `rafiq sunnah list`", name))?;
            let log = SunnahRepo::get_log_for_date(conn, &today)?;
            let was_done = log
                .iter()
                .find(|l| l.task_id == task.id)
                .map(|l| l.completed)
                .unwrap_or(false);
            SunnahRepo::set_completed(conn, task.id, &today, !was_done)?;
            if was_done {
                println_colored!(DIM, "  ○ {} — unmarked", task.name);
            } else {
                println_colored!(GREEN, "  ✓ {} — done", task.name);
            }
        }
        SunnahCommands::Add { name } => {
            if SunnahRepo::find_by_name(conn, name)?.is_some() {
                return Err(anyhow!("A task named '{}' already exists", name));
            }
            SunnahRepo::add_custom(conn, name)?;
            println_colored!(GREEN, "  ✓ Added task: {}", name);
        }
    }
    Ok(())
}

// ─── Fasting ─────────────────────────────────────────────────────────────────

pub fn handle_fast(conn: &Connection, config: &AppConfig, action: &FastCommands) -> Result<()> {
    match action {
        FastCommands::Mark { kind, date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let date_str = date.format("%Y-%m-%d").to_string();

            let kind = match kind {
                Some(k) => FastKind::from_str(k)?,
                None => {
                    let hijri = to_hijri(date, config.location.hijri_offset)?;
                    suggested_fast(date, &hijri).unwrap_or(FastKind::Voluntary)
                }
            };

            FastingRepo::upsert(conn, &date_str, kind, true)?;
            println_colored!(GREEN, "  ✓ {} fast recorded for {}", kind, date_str);
        }
        FastCommands::Unmark { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let date_str = date.format("%Y-%m-%d").to_string();
            if FastingRepo::remove(conn, &date_str)? {
                println_colored!(DIM, "  ○ Fast for {} removed", date_str);
            } else {
                println_colored!(DIM, "  No fast was recorded for {}", date_str);
            }
        }
        FastCommands::List => {
            let today = Local::now().date_naive();
            let start = (today - chrono::Duration::days(29)).format("%Y-%m-%d").to_string();
            let end = today.format("%Y-%m-%d").to_string();
            let fasts = FastingRepo::get_range(conn, &start, &end)?;
            println!();
            if fasts.is_empty() {
                println_colored!(DIM, "  No fasts recorded in the last 30 days");
            } else {
                println_colored!(GOLD, "  Fasts — last 30 days ({})", fasts.len());
                println!();
                for f in &fasts {
                    println!("  {}  {}", f.date, f.kind);
                }
            }
            println!();
        }
        FastCommands::Suggest => {
            let today = Local::now().date_naive();
            println!();
            println_colored!(GOLD, "  Sunnah fasting days — next two weeks");
            println!();
            let mut found = false;
            for i in 0..14i64 {
                let date = today + chrono::Duration::days(i);
                let hijri = to_hijri(date, config.location.hijri_offset)?;
                if let Some(kind) = suggested_fast(date, &hijri) {
                    println!(
                        "  {}  {:<16}  {}",
                        date.format("%Y-%m-%d"),
                        kind.to_string(),
                        hijri.formatted()
                    );
                    found = true;
                }
            }
            if !found {
                println_colored!(DIM, "  None in the next two weeks");
            }
            println!();
        }
    }
    Ok(())
}

fn parse_date_or_today(s: Option<&str>) -> Result<chrono::NaiveDate> {
    match s {
        None => Ok(Local::now().date_naive()),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow!("'{}' is not a YYYY-MM-DD date", s)),
    }
}

// ─── Quran ───────────────────────────────────────────────────────────────────

pub fn handle_quran(conn: &Connection, action: &QuranCommands) -> Result<()> {
    match action {
        QuranCommands::Bookmark { reference } => {
            let bookmark = Bookmark::parse(reference)?;
            QuranRepo::set_bookmark(conn, bookmark)?;
            println_colored!(GREEN, "  ✓ Bookmark set at {}", bookmark);
        }
        QuranCommands::Show => match QuranRepo::get_bookmark(conn)? {
            Some((bookmark, updated_at)) => {
                println!();
                println_colored!(GOLD, "  Reading position");
                println!();
                println_colored!(BOLD, "  {}", bookmark);
                println_colored!(DIM, "  last moved {}", updated_at);
                println!();
            }
            None => {
                println_colored!(
                    DIM,
                    "  No bookmark yet. Set one with `rafiq quran bookmark 2:255`"
                );
            }
        },
    }
    Ok(())
}

// ─── Trivia ──────────────────────────────────────────────────────────────────

pub fn handle_trivia(conn: &Connection, answer: Option<usize>) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();
    let question = question_for_date(today);
    let recorded = TriviaRepo::get_for_date(conn, &today_str)?;

    match answer {
        None => {
            print_question(question, recorded.as_ref());
        }
        Some(n) => {
            if !(1..=question.options.len()).contains(&n) {
                return Err(anyhow!(
                    "Answer with a number between 1 and {}",
                    question.options.len()
                ));
            }
            let choice = n - 1;
            let correct = choice == question.answer;
            TriviaRepo::record_answer(
                conn,
                &TriviaAnswer {
                    date: today_str,
                    question_id: question.id,
                    choice,
                    correct,
                },
            )?;
            if correct {
                println_colored!(GREEN, "  ✓ Correct!");
            } else {
                println_colored!(
                    RED,
                    "  ✗ Not quite — the answer is {}",
                    question.options[question.answer]
                );
            }
        }
    }
    Ok(())
}

fn print_question(question: &TriviaQuestion, recorded: Option<&TriviaAnswer>) {
    println!();
    println_colored!(GOLD, "  Today's trivia");
    println!();
    println_colored!(BOLD, "  {}", question.prompt);
    println!();
    for (i, option) in question.options.iter().enumerate() {
        println!("    {}. {}", i + 1, option);
    }
    println!();
    match recorded {
        Some(r) if r.correct => {
            println_colored!(GREEN, "  Answered correctly today ✓");
        }
        Some(r) => {
            println_colored!(AMBER, "  You answered {} — try again tomorrow", r.choice + 1);
        }
        None => {
            println_colored!(DIM, "  Answer with: rafiq trivia --answer N");
        }
    }
    println!();
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

pub fn handle_qibla(config: &AppConfig) -> Result<()> {
    let q = qibla_direction(config.location.latitude, config.location.longitude);
    println!();
    println_colored!(GOLD, "  Qibla from {}", config.location.name);
    println!();
    println_colored!(
        BOLD,
        "  {:.1}° from true north ({})",
        q.bearing,
        compass_point(q.bearing)
    );
    println_colored!(DIM, "  {:.0} km to the Kaaba", q.distance_km);
    println!();
    Ok(())
}

// ─── Zakat ───────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn handle_zakat(
    config: &AppConfig,
    cash: &str,
    gold_grams: &str,
    silver_grams: &str,
    business: &str,
    debts: &str,
    basis: Option<&str>,
    gold_price: Option<&str>,
    silver_price: Option<&str>,
) -> Result<()> {
    let assets = ZakatAssets {
        cash: parse_amount(cash, "--cash")?,
        gold_grams: parse_amount(gold_grams, "--gold-grams")?,
        silver_grams: parse_amount(silver_grams, "--silver-grams")?,
        business_goods: parse_amount(business, "--business")?,
        liabilities: parse_amount(debts, "--debts")?,
    };

    let basis = match basis {
        Some(b) => NisabBasis::from_str(b)?,
        None => NisabBasis::from_str(&config.zakat.nisab_basis)?,
    };

    let gold_price = match gold_price {
        Some(p) => parse_amount(p, "--gold-price")?,
        None => decimal_from_f64(config.zakat.gold_price_per_gram)?,
    };
    let silver_price = match silver_price {
        Some(p) => parse_amount(p, "--silver-price")?,
        None => decimal_from_f64(config.zakat.silver_price_per_gram)?,
    };

    let a = zakat::assess(&assets, gold_price, silver_price, basis)?;
    let currency = &config.zakat.currency;

    println!();
    println_colored!(GOLD, "  Zakat assessment");
    println!();
    println!("  Net wealth:   {} {}", a.net_wealth, currency);
    println!(
        "  Nisab:        {} {}  ({} basis, {} g)",
        a.nisab,
        currency,
        a.basis.as_str(),
        a.basis.grams()
    );
    println!();
    if a.due {
        println_colored!(AMBER, "  Zakat due:    {} {}", a.amount, currency);
        println_colored!(DIM, "  (2.5% of net wealth)");
    } else {
        println_colored!(GREEN, "  Below nisab — no zakat is due");
    }
    println!();
    Ok(())
}

fn parse_amount(s: &str, flag: &str) -> Result<Decimal> {
    Decimal::from_str(s.trim()).map_err(|_| anyhow!("{} expects a number, got '{}'", flag, s))
}

fn decimal_from_f64(v: f64) -> Result<Decimal> {
    Decimal::try_from(v).map_err(|_| anyhow!("Configured price {} is not representable", v))
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let offset = config.location.hijri_offset;
    let hijri_today = to_hijri(today, offset)?;
    let days = hijri_month_days(today, offset)?;

    println!();
    println_colored!(
        GOLD,
        "  {} {} AH",
        hijri_today.month_name,
        hijri_today.year
    );
    println!();

    for day in &days {
        let marker = if day.hijri_day == hijri_today.day { "▸" } else { " " };
        let note = day.note.map(|n| format!("  · {}", n)).unwrap_or_default();
        let line = format!(
            "  {} {:>2}  {}{}",
            marker,
            day.hijri_day,
            day.gregorian.format("%a %b %d"),
            note
        );
        if day.hijri_day == hijri_today.day {
            println_colored!(BOLD, "{}", line);
        } else if day.note.is_some() {
            println_colored!(AMBER, "{}", line);
        } else {
            println_colored!(DIM, "{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, week: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();
    let week_start = (today - chrono::Duration::days(6)).format("%Y-%m-%d").to_string();
    let month_start = (today - chrono::Duration::days(29)).format("%Y-%m-%d").to_string();

    let streak = StatsRepo::calculate_streak(conn)?;
    let fasts_month = FastingRepo::count_completed(conn, &month_start, &today_str)?;
    let (trivia_correct, trivia_total) = TriviaRepo::count_correct(conn)?;

    println!();
    println_colored!(GOLD, "  Statistics");
    println!();
    println_colored!(
        BOLD,
        "  Streak:       {} days current  |  {} days best",
        streak.current,
        streak.best
    );
    println!("  Fasts (30d):  {}", fasts_month);
    if trivia_total > 0 {
        println!("  Trivia:       {}/{} correct", trivia_correct, trivia_total);
    }

    if week {
        println!();
        println_colored!(DIM, "  Last 7 days  (● = 5/5, ◕ = 3-4, ◑ = 1-2, ○ = 0/5)");
        println!();
        print!("  ");
        let daily = StatsRepo::get_daily_stats_range(conn, &week_start, &today_str)?;
        for stat in &daily {
            let icon = match stat.prayers_done {
                5 => format!("{}●\x1b[0m ", GREEN),
                3 | 4 => format!("{}◕\x1b[0m ", AMBER),
                1 | 2 => format!("{}◑\x1b[0m ", AMBER),
                _ => format!("{}○\x1b[0m ", DIM),
            };
            print!("{}", icon);
        }
        println!();
    }

    println!();
    Ok(())
}

// ─── Export / import ─────────────────────────────────────────────────────────

pub fn handle_export(conn: &Connection) -> Result<()> {
    let snapshot = transfer::export(conn)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

pub fn handle_import(conn: &Connection, file: &Path) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("Reading {:?}", file))?;
    let summary = transfer::import(conn, &content)?;

    println_colored!(
        GREEN,
        "  ✓ Imported {} prayer, {} sunnah, {} fast, {} trivia records{}",
        summary.prayers,
        summary.sunnah,
        summary.fasts,
        summary.trivia,
        if summary.bookmark { ", and the bookmark" } else { "" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tz_offsets_parse() {
        assert_eq!(parse_tz_offset("+5:30").unwrap(), 330);
        assert_eq!(parse_tz_offset("-3").unwrap(), -180);
        assert_eq!(parse_tz_offset("5.5").unwrap(), 330);
        assert_eq!(parse_tz_offset("0").unwrap(), 0);
        assert!(parse_tz_offset("abc").is_err());
    }

    #[test]
    fn tz_offsets_format() {
        assert_eq!(format_tz_offset(330), "+5:30");
        assert_eq!(format_tz_offset(-180), "-3");
        assert_eq!(format_tz_offset(0), "+0");
    }

    #[test]
    fn amounts_parse_as_decimals() {
        assert_eq!(parse_amount("10.50", "--cash").unwrap().to_string(), "10.50");
        assert!(parse_amount("ten", "--cash").is_err());
    }
}
