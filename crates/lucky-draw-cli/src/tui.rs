//! Terminal setup and restoration

use std::io::{self, stdout, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// The terminal the draw runs in
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen in raw mode with the cursor hidden
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Put the terminal back the way it was
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before a panic message is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore();
        original_hook(panic);
    }));
}
