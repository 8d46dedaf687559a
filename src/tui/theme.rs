use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(16, 17, 14);
pub const SURFACE: Color = Color::Rgb(25, 27, 22);
pub const BORDER: Color = Color::Rgb(52, 50, 38);
pub const TEXT: Color = Color::Rgb(226, 220, 198);
pub const TEXT_DIM: Color = Color::Rgb(126, 120, 98);
pub const GOLD: Color = Color::Rgb(196, 160, 68);
pub const GREEN: Color = Color::Rgb(96, 150, 96);
pub const AMBER: Color = Color::Rgb(208, 140, 62);
pub const RED: Color = Color::Rgb(178, 84, 64);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        gold()
    } else {
        Style::default().fg(BORDER)
    }
}
