use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{FastEntry, FastKind};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today_fast: Option<&FastEntry>,
    suggestion: Option<FastKind>,
) {
    let block = Block::default()
        .title(Span::styled(" Fasting ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let line = match (today_fast, suggestion) {
        (Some(fast), _) => Line::from(vec![
            Span::styled("  ● ", theme::green()),
            Span::styled(
                format!("Fasting today — {}", fast.kind),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]),
        (None, Some(kind)) => Line::from(vec![
            Span::styled("  ◌ ", theme::amber()),
            Span::styled(format!("{} fast today — press [f]", kind), theme::amber()),
        ]),
        (None, None) => Line::from(vec![
            Span::styled("  ○ ", theme::dim()),
            Span::styled("Not fasting today", theme::dim()),
        ]),
    };

    let paragraph = Paragraph::new(vec![Line::from(""), line]).block(block);
    frame.render_widget(paragraph, area);
}
