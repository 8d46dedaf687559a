use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::PrayerName;
use crate::tui::theme;
use crate::utils::format::format_duration_secs;

pub fn render(frame: &mut Frame, area: Rect, next_prayer: Option<&(PrayerName, i64)>) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some((prayer, secs)) = next_prayer else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  No data", theme::dim())),
        ]);
        frame.render_widget(paragraph, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let name_line = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", prayer.display_name().to_uppercase()),
            theme::gold().add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(name_line, chunks[0]);

    let countdown = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::amber())
        .lines(vec![Line::from(format_duration_secs(*secs))])
        .build();
    frame.render_widget(countdown, chunks[1]);
}
