pub mod terminal;
pub mod utils;
pub mod input;
pub mod renderers;

use std::io;
use ratatui::{backend::CrosstermBackend, Terminal};
use crate::types::{App, AppMode};

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};

/// Main UI rendering function that delegates to specific mode renderers
pub fn render_ui(app: &App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    terminal.draw(|f| {
        match app.mode {
            AppMode::Shop => renderers::shop::render(f, app),
            AppMode::Builder => renderers::builder::render(f, app),
            AppMode::Settings => renderers::settings::render(f, app),
        }
    })?;
    Ok(())
}
