use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0, 122, 255);
pub const EDIT_ACTION: Color = Color::Rgb(76, 217, 100);
pub const DELETE_ACTION: Color = Color::Rgb(255, 59, 48);
pub const PLACEHOLDER: Color = Color::Rgb(153, 153, 153);
pub const SELECTED_BG: Color = Color::Rgb(40, 44, 52);
pub const LABEL_TEXT: Color = Color::Gray;
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;
