use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{SunnahLog, SunnahTask};
use crate::tui::theme;
use crate::utils::format::pad_display;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[SunnahTask],
    logs: &HashMap<i64, SunnahLog>,
    focus_idx: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Sunnah ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let done = logs.get(&task.id).map(|l| l.completed).unwrap_or(false);
            let is_focused = focused && i == focus_idx;

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let status = if done {
                Span::styled("●", theme::green())
            } else {
                Span::styled("○", theme::dim())
            };

            let line = Line::from(vec![
                Span::styled(format!("  {}", pad_display(&task.name, 28)), name_style),
                status,
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
