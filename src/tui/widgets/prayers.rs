use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::PrayerDay;
use crate::tui::theme;
use crate::utils::format::format_time;

pub fn render(frame: &mut Frame, area: Rect, prayers: &[PrayerDay], focused_idx: usize, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let items: Vec<ListItem> = prayers
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let is_focused = focused && i == focused_idx;

            let time_str = p
                .time
                .map(format_time)
                .unwrap_or_else(|| "--:--".to_string());

            let (icon, status_style, label) = if p.done {
                ("●", theme::green(), "prayed")
            } else {
                ("○", theme::dim(), "pending")
            };

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:<8}", p.name.display_name()), name_style),
                Span::styled(format!("{:<7}", time_str), theme::dim()),
                Span::styled(icon, status_style),
                Span::styled(format!("  {}", label), theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
