use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{DailyStats, Streak};
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, streak: &Streak, weekly: &[DailyStats]) {
    let block = Block::default()
        .title(Span::styled(" Streak ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let bar = progress_bar(streak.current.min(30), 30, 12);
    let completed_this_week = weekly
        .iter()
        .filter(|d| d.completion_ratio() >= 1.0)
        .count();

    let streak_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(bar, theme::green()),
        Span::styled(
            format!("  {} days", streak.current),
            theme::green().add_modifier(Modifier::BOLD),
        ),
    ]);

    let meta_line = Line::from(Span::styled(
        format!("  Best: {}  ·  Week: {}/7", streak.best, completed_this_week),
        theme::dim(),
    ));

    let text = vec![Line::from(""), streak_line, Line::from(""), meta_line];
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
