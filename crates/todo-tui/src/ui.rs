use crate::app::{App, AppMode};
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ADD_PLACEHOLDER: &str = "Add a new todo...";
const UPDATE_PLACEHOLDER: &str = "Update todo...";

pub fn placeholder(editing: bool) -> &'static str {
    if editing {
        UPDATE_PLACEHOLDER
    } else {
        ADD_PLACEHOLDER
    }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Update"
    } else {
        "Add"
    }
}

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_list(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(" ≡ Todo List", title_text())));
    frame.render_widget(header, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.controller.is_editing();
    let focused = app.mode == AppMode::Input;
    let label = submit_label(editing);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(label.len() as u16 + 4)])
        .split(area);

    let input = app.controller.input();
    let text = if input.is_empty() {
        Line::from(Span::styled(placeholder(editing), placeholder_text()))
    } else {
        Line::from(input.as_str())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border(focused));
    let inner = block.inner(chunks[0]);
    frame.render_widget(Paragraph::new(text).block(block), chunks[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", label),
        submit_button(editing),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border(false)));
    frame.render_widget(button, chunks[1]);

    if focused {
        let typed = &input.as_str()[..input.cursor_pos()];
        let cursor_x = inner.x + (typed.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items = app.controller.items();
    let focused = app.mode == AppMode::Browse;
    let block = Block::default()
        .title(format!(" Todos ({}) ", items.len()))
        .borders(Borders::ALL)
        .border_style(border(focused));

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing to do yet. Press i to add one.",
            label_text(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selected row on screen
    let visible = area.height.saturating_sub(2) as usize;
    let selected = app.selected_index().unwrap_or(0);
    let offset = (selected + 1).saturating_sub(visible.max(1));

    let session = app.controller.edit_session();
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, item)| {
            let is_selected = app.selected_index() == Some(idx);
            let marker = if is_selected { "▸ " } else { "  " };
            let style = if session.is_editing_item(&item.id) {
                editing_item()
            } else if is_selected && focused {
                selected_item()
            } else {
                ratatui::style::Style::default()
            };
            Line::from(vec![Span::raw(marker), Span::styled(item.title.as_str(), style)])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let spans = match app.mode {
        AppMode::Input => vec![
            Span::styled(
                format!("Enter: {}", submit_label(app.controller.is_editing()).to_lowercase()),
                label_text(),
            ),
            Span::styled("  Esc: back to list", label_text()),
        ],
        AppMode::Browse => vec![
            Span::styled("i: new  ", label_text()),
            Span::styled("e: edit  ", edit_hint()),
            Span::styled("d: delete  ", delete_hint()),
            Span::styled("j/k: move  q: quit", label_text()),
        ],
    };

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use todo_persistence::MemoryStore;
    use todo_store::ListStoreController;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_labels_follow_edit_session() {
        assert_eq!(placeholder(false), "Add a new todo...");
        assert_eq!(placeholder(true), "Update todo...");
        assert_eq!(submit_label(false), "Add");
        assert_eq!(submit_label(true), "Update");
    }

    #[test]
    fn test_renders_items_and_add_button() {
        let (mut controller, _worker) =
            ListStoreController::new(Arc::new(MemoryStore::new()), "@todos_key");
        controller.add_or_update("Buy milk");
        controller.add_or_update("Walk dog");
        let app = App::new(controller);

        let screen = screen(&app);
        assert!(screen.contains("Todo List"));
        assert!(screen.contains("Add a new todo..."));
        assert!(screen.contains("Add"));
        assert!(screen.contains("Walk dog"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.find("Walk dog") < screen.find("Buy milk"));
    }

    #[test]
    fn test_renders_update_button_while_editing() {
        let (mut controller, _worker) =
            ListStoreController::new(Arc::new(MemoryStore::new()), "@todos_key");
        controller.add_or_update("Buy milk");
        let id = controller.items()[0].id.clone();
        controller.begin_edit(&id);
        let app = App::new(controller);

        let screen = screen(&app);
        assert!(screen.contains("Update"));
        assert!(!screen.contains("Add a new todo..."));
    }
}
