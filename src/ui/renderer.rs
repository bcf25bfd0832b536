//! Terminal setup and the main event loop

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;

use super::app_component::AppComponent;
use super::core::{Component, EventHandler};
use crate::config::Config;
use crate::logger::Logger;

/// Restores the terminal when dropped, on early returns and panics included
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, dropping the guard undoes whatever succeeded
        let mut guard = Self {
            keyboard_enhanced: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter the alternate screen")?;

        // Needed for crossterm to report the Super (Cmd) modifier
        guard.keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
            && execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .is_ok();

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

/// Run the TUI until the user quits
///
/// `start_path` overrides the configured start page.
pub async fn run_app(mut config: Config, logger: Logger, start_path: Option<String>) -> Result<()> {
    if let Some(path) = start_path {
        config.ui.start_path = path;
    }

    let guard = TerminalGuard::enter()?;
    config.shortcuts.modifier = config.shortcuts.effective_modifier(guard.keyboard_enhanced);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create the terminal")?;

    let mut app = AppComponent::new(config, logger);
    run_ui(&mut terminal, &mut app).await
}

/// Main UI loop
async fn run_ui<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| app.render(f, f.area()))?;

        let event = events.next_event().await?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
