//! Terminal front-end for the interaction controller.
//!
//! - Sets up raw mode and the alternate screen, restores both on exit.
//! - Blocks on one key event at a time; there is no background work.

mod app;
mod render;

use anyhow::Result;
use app::App;
use hospital_core::InteractionController;
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{
            disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        },
    },
    Terminal,
};
use std::io;

/// Runs the UI until the user exits, then closes the gateway.
pub fn run(controller: InteractionController) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    info!("event=tui_start module=tui status=ok");

    let mut app = App::new(controller);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let mut controller = app.into_controller();
    controller.shutdown()?;
    info!("event=tui_stop module=tui status=ok");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render::draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
