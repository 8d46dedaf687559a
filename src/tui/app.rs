use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::db::repository::{
    FastingRepo, PrayerRepo, QuranRepo, StatsRepo, SunnahRepo, TriviaRepo,
};
use crate::models::fasting::suggested_fast;
use crate::models::quran::Bookmark;
use crate::models::trivia::{question_for_date, TriviaQuestion};
use crate::models::{
    DailyStats, FastEntry, FastKind, PrayerDay, PrayerName, Streak, SunnahLog, SunnahTask,
    TriviaAnswer,
};
use crate::prayer_times::PrayerCalculator;
use crate::qibla::{qibla_direction, QiblaDirection};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    fasting, header, next_prayer, prayers, qibla, quran, statusbar, streak, sunnah,
};
use crate::utils::hijri::{hijri_month_days, to_hijri, today_hijri_string, HijriMonthDay};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Calendar,
    Trivia,
    Stats,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusSection {
    Prayers,
    Sunnah,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    BookmarkInput,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub focus_section: FocusSection,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>, // shown in the bookmark popup on bad input

    // Cached state (refreshed on load/action)
    pub today_str: String,
    pub hijri_str: String,
    pub prayers: Vec<PrayerDay>,
    pub sunnah_tasks: Vec<SunnahTask>,
    pub sunnah_logs: HashMap<i64, SunnahLog>,
    pub fast_today: Option<FastEntry>,
    pub fast_suggestion: Option<FastKind>,
    pub bookmark: Option<Bookmark>,
    pub qibla: QiblaDirection,
    pub streak: Streak,
    pub weekly_grid: Vec<DailyStats>,
    pub next_prayer_info: Option<(PrayerName, i64)>,
    pub trivia_question: &'static TriviaQuestion,
    pub trivia_answer: Option<TriviaAnswer>,
    pub trivia_selected: usize,
    pub calendar_days: Vec<HijriMonthDay>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let today = Local::now().date_naive();
        let today_str = today.format("%Y-%m-%d").to_string();
        let hijri_str = today_hijri_string(config.location.hijri_offset);
        let qibla = qibla_direction(config.location.latitude, config.location.longitude);

        App {
            view: View::Dashboard,
            config,
            focus_section: FocusSection::Prayers,
            focus_idx: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            today_str,
            hijri_str,
            prayers: Vec::new(),
            sunnah_tasks: Vec::new(),
            sunnah_logs: HashMap::new(),
            fast_today: None,
            fast_suggestion: None,
            bookmark: None,
            qibla,
            streak: Streak::default(),
            weekly_grid: Vec::new(),
            next_prayer_info: None,
            trivia_question: question_for_date(today),
            trivia_answer: None,
            trivia_selected: 0,
            calendar_days: Vec::new(),
        }
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        let today = Local::now().date_naive();

        // Prayers with their times from the cache
        PrayerRepo::ensure_day_rows(conn, &self.today_str)?;
        let calc = self.make_calculator()?;
        let times = calc.get_cached_or_compute(conn, today).ok();

        let mut prayers = PrayerRepo::get_by_date(conn, &self.today_str)?;
        if let Some(times) = &times {
            for p in &mut prayers {
                p.time = Some(times.time_of(p.name));
            }
        }
        self.prayers = prayers;

        // Sunnah checklist
        self.sunnah_tasks = SunnahRepo::get_active_tasks(conn)?;
        let logs = SunnahRepo::get_log_for_date(conn, &self.today_str)?;
        self.sunnah_logs = logs.into_iter().map(|l| (l.task_id, l)).collect();

        // Fasting
        self.fast_today = FastingRepo::get_for_date(conn, &self.today_str)?;
        self.fast_suggestion = to_hijri(today, self.config.location.hijri_offset)
            .ok()
            .and_then(|h| suggested_fast(today, &h));

        // Quran bookmark
        self.bookmark = QuranRepo::get_bookmark(conn)?.map(|(b, _)| b);

        // Streak + weekly grid
        self.streak = StatsRepo::calculate_streak(conn)?;
        let week_start = (today - chrono::Duration::days(6))
            .format("%Y-%m-%d")
            .to_string();
        self.weekly_grid = StatsRepo::get_daily_stats_range(conn, &week_start, &self.today_str)?;

        // Next prayer countdown
        let now_time = Local::now().time();
        self.next_prayer_info = calc.get_next_prayer(conn, today, now_time).ok().flatten();

        // Trivia
        self.trivia_answer = TriviaRepo::get_for_date(conn, &self.today_str)?;

        // Hijri month for the calendar view
        self.calendar_days =
            hijri_month_days(today, self.config.location.hijri_offset).unwrap_or_default();

        Ok(())
    }

    pub fn tick(&mut self, conn: &Connection) {
        let today = Local::now().date_naive();
        let now_time = Local::now().time();
        if let Ok(calc) = self.make_calculator() {
            self.next_prayer_info = calc.get_next_prayer(conn, today, now_time).ok().flatten();
        }
    }

    fn make_calculator(&self) -> Result<PrayerCalculator> {
        PrayerCalculator::new(
            self.config.location.latitude,
            self.config.location.longitude,
            &self.config.location.calc_method,
            &self.config.location.madhab,
            self.config.location.timezone_offset,
        )
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        // Only handle actual key presses — ignore release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::BookmarkInput => self.handle_bookmark_input(key, conn),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key, conn),
                View::Calendar => self.handle_calendar_key(key),
                View::Trivia => self.handle_trivia_key(key, conn),
                View::Stats => self.handle_stats_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('s') => {
                self.view = View::Stats;
            }
            KeyCode::Char('c') => {
                self.view = View::Calendar;
            }
            KeyCode::Char('t') => {
                self.trivia_selected = 0;
                self.view = View::Trivia;
            }
            KeyCode::Char('b') => {
                self.input_mode = InputMode::BookmarkInput;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = match self.focus_section {
                    FocusSection::Prayers => self.prayers.len().saturating_sub(1),
                    FocusSection::Sunnah => self.sunnah_tasks.len().saturating_sub(1),
                };
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Tab => {
                self.focus_section = match self.focus_section {
                    FocusSection::Prayers => FocusSection::Sunnah,
                    FocusSection::Sunnah => FocusSection::Prayers,
                };
                self.focus_idx = 0;
            }
            // m / Enter toggles the focused prayer
            KeyCode::Char('m') | KeyCode::Enter => {
                if self.focus_section == FocusSection::Prayers {
                    self.toggle_focused_prayer(conn);
                }
            }
            // d always works on sunnah — auto-switches section if needed
            KeyCode::Char('d') => {
                if self.focus_section != FocusSection::Sunnah {
                    self.focus_section = FocusSection::Sunnah;
                    self.focus_idx = 0;
                }
                self.toggle_focused_sunnah(conn);
            }
            KeyCode::Char('f') => {
                self.toggle_today_fast(conn);
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: crossterm::event::KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('c')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_stats_key(&mut self, key: crossterm::event::KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('s')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_trivia_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        let option_count = self.trivia_question.options.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('t') => {
                self.view = View::Dashboard;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.trivia_selected > 0 {
                    self.trivia_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.trivia_selected + 1 < option_count {
                    self.trivia_selected += 1;
                }
            }
            KeyCode::Enter => {
                self.answer_trivia(conn, self.trivia_selected);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let n = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=option_count).contains(&n) {
                    self.answer_trivia(conn, n - 1);
                }
            }
            _ => {}
        }
    }

    fn answer_trivia(&mut self, conn: &Connection, choice: usize) {
        let correct = choice == self.trivia_question.answer;
        let answer = TriviaAnswer {
            date: self.today_str.clone(),
            question_id: self.trivia_question.id,
            choice,
            correct,
        };
        let _ = TriviaRepo::record_answer(conn, &answer);
        self.trivia_answer = Some(answer);
    }

    fn handle_bookmark_input(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => match Bookmark::parse(self.input_buffer.trim()) {
                Ok(bookmark) => {
                    let _ = QuranRepo::set_bookmark(conn, bookmark);
                    let _ = self.load(conn);
                    self.input_mode = InputMode::Normal;
                    self.input_buffer.clear();
                    self.input_error = None;
                }
                Err(e) => {
                    self.input_error = Some(e.to_string());
                }
            },
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == ':' => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn toggle_focused_prayer(&mut self, conn: &Connection) {
        if let Some(prayer) = self.prayers.get(self.focus_idx) {
            let _ = PrayerRepo::set_done(conn, prayer.name, &self.today_str, !prayer.done);
            let _ = self.load(conn);
        }
    }

    fn toggle_focused_sunnah(&mut self, conn: &Connection) {
        if let Some(task) = self.sunnah_tasks.get(self.focus_idx) {
            let was_done = self
                .sunnah_logs
                .get(&task.id)
                .map(|l| l.completed)
                .unwrap_or(false);
            let _ = SunnahRepo::set_completed(conn, task.id, &self.today_str, !was_done);
            let _ = self.load(conn);
        }
    }

    fn toggle_today_fast(&mut self, conn: &Connection) {
        if self.fast_today.is_some() {
            let _ = FastingRepo::remove(conn, &self.today_str);
        } else {
            let kind = self.fast_suggestion.unwrap_or(FastKind::Voluntary);
            let _ = FastingRepo::upsert(conn, &self.today_str, kind, true);
        }
        let _ = self.load(conn);
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Calendar => self.draw_calendar(frame),
            View::Trivia => self.draw_trivia(frame),
            View::Stats => self.draw_stats(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.input_mode == InputMode::BookmarkInput {
            self.draw_bookmark_input(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            &self.hijri_str,
            &self.config.location.name,
        );
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        // Left column: Prayers + Sunnah + Fasting + Quran
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // prayers
                Constraint::Length(7), // sunnah
                Constraint::Length(4), // fasting
                Constraint::Length(4), // quran
            ])
            .split(columns[0]);

        let focused_prayers = self.focus_section == FocusSection::Prayers;
        let focused_sunnah = self.focus_section == FocusSection::Sunnah;

        prayers::render(
            frame,
            left_chunks[0],
            &self.prayers,
            self.focus_idx,
            focused_prayers,
        );
        sunnah::render(
            frame,
            left_chunks[1],
            &self.sunnah_tasks,
            &self.sunnah_logs,
            self.focus_idx,
            focused_sunnah,
        );
        fasting::render(
            frame,
            left_chunks[2],
            self.fast_today.as_ref(),
            self.fast_suggestion,
        );
        quran::render(frame, left_chunks[3], self.bookmark.as_ref());

        // Right column: Next Prayer + Qibla + Streak
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // next prayer
                Constraint::Length(5), // qibla
                Constraint::Length(7), // streak
            ])
            .split(columns[1]);

        next_prayer::render(frame, right_chunks[0], self.next_prayer_info.as_ref());
        qibla::render(frame, right_chunks[1], &self.qibla);
        streak::render(frame, right_chunks[2], &self.streak, &self.weekly_grid);
    }

    fn draw_calendar(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let month_title = self
            .calendar_days
            .first()
            .and_then(|d| to_hijri(d.gregorian, self.config.location.hijri_offset).ok())
            .map(|h| format!("  {} {} AH  ", h.month_name, h.year))
            .unwrap_or_else(|| "  Hijri Calendar  ".to_string());

        let title = Paragraph::new(Line::from(vec![
            Span::styled(month_title, theme::gold().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let today = Local::now().date_naive();
        let mut lines = vec![Line::from("")];
        for day in &self.calendar_days {
            let is_today = day.gregorian == today;
            let marker = if is_today { "▸" } else { " " };
            let base = format!(
                "  {} {:>2}  {}",
                marker,
                day.hijri_day,
                day.gregorian.format("%a %b %d")
            );

            let mut spans = vec![Span::styled(
                base,
                if is_today {
                    theme::gold().add_modifier(Modifier::BOLD)
                } else {
                    theme::dim()
                },
            )];
            if let Some(note) = day.note {
                spans.push(Span::styled(format!("  · {}", note), theme::amber()));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn draw_trivia(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "  Today's Trivia  ",
                theme::gold().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.trivia_question.prompt),
                theme::bold(),
            )),
            Line::from(""),
        ];

        let answered = self.trivia_answer.as_ref();
        for (i, option) in self.trivia_question.options.iter().enumerate() {
            let selected = i == self.trivia_selected && answered.is_none();
            let style = match answered {
                Some(a) if i == self.trivia_question.answer && a.correct => theme::green(),
                Some(a) if i == a.choice && !a.correct => theme::red(),
                Some(_) => theme::dim(),
                None if selected => theme::gold().add_modifier(Modifier::BOLD),
                None => theme::dim(),
            };
            let cursor = if selected { "▸" } else { " " };
            lines.push(Line::from(Span::styled(
                format!("  {} {}. {}", cursor, i + 1, option),
                style,
            )));
        }

        lines.push(Line::from(""));
        match answered {
            Some(a) if a.correct => {
                lines.push(Line::from(Span::styled("  ✓ Correct!", theme::green())));
            }
            Some(_) => {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  ✗ The answer is {}",
                        self.trivia_question.options[self.trivia_question.answer]
                    ),
                    theme::red(),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "  [↑ ↓] choose  ·  [Enter] or [1-4] answer",
                    theme::dim(),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn draw_stats(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("  Stats  ", theme::gold().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Streak (current):  ", theme::dim()),
                Span::styled(
                    format!("{} days", self.streak.current),
                    theme::green().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Streak (best):     ", theme::dim()),
                Span::styled(format!("{} days", self.streak.best), theme::green()),
            ]),
            Line::from(""),
            Line::from(Span::styled("  Last 7 Days", theme::gold())),
            Line::from(""),
        ];

        for stat in &self.weekly_grid {
            let bar = match stat.prayers_done {
                5 => Span::styled("  ████████████  ", theme::green()),
                4 => Span::styled("  █████████░░░  ", theme::green()),
                3 => Span::styled("  ████████░░░░  ", theme::amber()),
                2 => Span::styled("  █████░░░░░░░  ", theme::amber()),
                1 => Span::styled("  ███░░░░░░░░░  ", theme::dim()),
                _ => Span::styled("  ░░░░░░░░░░░░  ", theme::dim()),
            };
            lines.push(Line::from(vec![
                bar,
                Span::styled(
                    format!("{}  {}/5", stat.date, stat.prayers_done),
                    theme::dim(),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(18),
        };

        frame.render_widget(Clear, popup_area);

        let entries = [
            ("[m] / Enter", "Toggle prayer done"),
            ("[d]", "Toggle sunnah task"),
            ("[f]", "Toggle today's fast"),
            ("[b]", "Move Quran bookmark"),
            ("[t]", "Trivia view"),
            ("[c]", "Hijri calendar"),
            ("[s]", "Stats view"),
            ("[Tab]", "Switch focus section"),
            ("[↑ ↓]", "Navigate items"),
            ("[?]", "Toggle help"),
            ("[Esc]", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in &entries {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<13}", key), theme::gold()),
                Span::styled(*label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_bookmark_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(3),
            width: area.width / 2,
            height,
        };

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Reading position (surah:ayah): ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  e.g. 2:255, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::amber()
        };

        let block = Block::default()
            .title(Span::styled(" Quran Bookmark ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick(&conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}
