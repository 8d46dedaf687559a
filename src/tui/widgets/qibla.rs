use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::qibla::{compass_point, QiblaDirection};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, qibla: &QiblaDirection) {
    let block = Block::default()
        .title(Span::styled(" Qibla ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(
                format!("{:.1}°", qibla.bearing),
                theme::gold().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", compass_point(qibla.bearing)),
                theme::amber(),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {:.0} km to the Kaaba", qibla.distance_km),
            theme::dim(),
        )),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
