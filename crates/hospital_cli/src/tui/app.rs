//! Terminal UI state and key handling.
//!
//! The app owns the controller and the current screen. Key handling is a
//! pure state transition, so it runs without a terminal in tests.

use hospital_core::{InteractionController, Notice, Screen, ACTIONS};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct App {
    controller: InteractionController,
    screen: Screen,
    menu_index: usize,
    form_focus: usize,
    list_offset: usize,
}

impl App {
    pub fn new(controller: InteractionController) -> Self {
        Self {
            controller,
            screen: Screen::Menu,
            menu_index: 0,
            form_focus: 0,
            list_offset: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn form_focus(&self) -> usize {
        self.form_focus
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.controller.notice()
    }

    pub fn should_quit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    pub fn into_controller(self) -> InteractionController {
        self.controller
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.activate(ACTIONS.len() - 1);
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Form(_) => self.handle_form_key(key),
            Screen::List(_) => self.handle_list_key(key),
            Screen::Exit => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(ACTIONS.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1) % ACTIONS.len();
            }
            KeyCode::Enter => self.activate(self.menu_index),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < ACTIONS.len() {
                    self.menu_index = index;
                    self.activate(index);
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.activate(ACTIONS.len() - 1),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Screen::Form(session) = &mut self.screen else {
            return;
        };
        let field_count = session.spec().fields.len();

        match key.code {
            KeyCode::Esc => {
                session.cancel();
                self.back_to_menu();
            }
            KeyCode::Enter => {
                if self.controller.submit(session).is_ok() {
                    self.back_to_menu();
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_focus = (self.form_focus + 1) % field_count;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_focus = self.form_focus.checked_sub(1).unwrap_or(field_count - 1);
            }
            KeyCode::Backspace => session.pop_char(self.form_focus),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                session.push_char(self.form_focus, ch);
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let Screen::List(table) = &self.screen else {
            return;
        };
        let last_row = table.rows.len().saturating_sub(1);

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                self.back_to_menu();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_offset = self.list_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_offset = (self.list_offset + 1).min(last_row);
            }
            KeyCode::Home => self.list_offset = 0,
            KeyCode::End => self.list_offset = last_row,
            _ => {}
        }
    }

    fn activate(&mut self, index: usize) {
        let Some(entry) = ACTIONS.get(index) else {
            return;
        };
        self.controller.take_notice();
        self.form_focus = 0;
        self.list_offset = 0;
        self.screen = self.controller.dispatch(entry.action);
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.form_focus = 0;
        self.list_offset = 0;
    }
}
