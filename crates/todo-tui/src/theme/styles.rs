use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(UNFOCUSED_BORDER)
    }
}

pub fn title_text() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn placeholder_text() -> Style {
    Style::default().fg(PLACEHOLDER)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn selected_item() -> Style {
    Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD)
}

/// Item currently loaded into the input line for editing
pub fn editing_item() -> Style {
    Style::default().fg(EDIT_ACTION).add_modifier(Modifier::ITALIC)
}

pub fn submit_button(editing: bool) -> Style {
    let bg = if editing { EDIT_ACTION } else { ACCENT };
    Style::default()
        .fg(ratatui::style::Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

pub fn edit_hint() -> Style {
    Style::default().fg(EDIT_ACTION)
}

pub fn delete_hint() -> Style {
    Style::default().fg(DELETE_ACTION)
}
