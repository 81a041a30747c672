use crate::events::{Event, EventHandler};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use todo_core::{SelectionState, TodoResult};
use todo_domain::ItemId;
use todo_store::{Hydration, ListStoreController, Submission};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving through the list
    Browse,
    /// Typing into the input line
    Input,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub controller: ListStoreController,
    pub selection: SelectionState,
}

impl App {
    pub fn new(controller: ListStoreController) -> Self {
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Browse,
            controller,
            selection: SelectionState::new(),
        };
        app.sync_selection();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Load the persisted list and put the cursor on its first row
    pub async fn hydrate(&mut self) -> Hydration {
        let outcome = self.controller.hydrate().await;
        self.sync_selection();
        outcome
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.selection
            .get()
            .and_then(|idx| self.controller.items().get(idx))
            .map(|item| item.id.clone())
    }

    fn sync_selection(&mut self) {
        self.selection.sync(self.controller.items().len());
    }

    fn select_item(&mut self, item_id: &ItemId) {
        self.selection.set(self.controller.list().position(item_id));
        self.sync_selection();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Input => self.handle_input_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        // The list can change length outside key handling (hydration)
        self.sync_selection();
        let len = self.controller.items().len();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(len),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') => {
                self.mode = AppMode::Input;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(item_id) = self.selected_item_id() {
                    if self.controller.begin_edit(&item_id) {
                        self.mode = AppMode::Input;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item_id) = self.selected_item_id() {
                    self.controller.delete(&item_id);
                    self.sync_selection();
                }
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Browse,
            KeyCode::Enter => match self.controller.submit() {
                Submission::Added(item_id) | Submission::Updated(item_id) => {
                    self.select_item(&item_id);
                    self.mode = AppMode::Browse;
                }
                Submission::Rejected => {}
            },
            KeyCode::Char(c) => self.controller.input_mut().insert_char(c),
            KeyCode::Backspace => self.controller.input_mut().backspace(),
            KeyCode::Delete => self.controller.input_mut().delete(),
            KeyCode::Left => self.controller.input_mut().move_left(),
            KeyCode::Right => self.controller.input_mut().move_right(),
            KeyCode::Home => self.controller.input_mut().move_home(),
            KeyCode::End => self.controller.input_mut().move_end(),
            _ => {}
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TodoResult<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
