use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Bookmark;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, bookmark: Option<&Bookmark>) {
    let block = Block::default()
        .title(Span::styled(" Quran ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let line = match bookmark {
        Some(b) => Line::from(vec![
            Span::styled("  ❖ ", theme::gold()),
            Span::styled(b.to_string(), theme::bold()),
            Span::styled("  [b] move", theme::dim()),
        ]),
        None => Line::from(vec![
            Span::styled("  No bookmark — press ", theme::dim()),
            Span::styled("[b]", theme::gold()),
            Span::styled(" to set one", theme::dim()),
        ]),
    };

    let paragraph = Paragraph::new(vec![Line::from(""), line]).block(block);
    frame.render_widget(paragraph, area);
}
