use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dashtui::analytics::NullSink;
use dashtui::app::App;
use dashtui::event_loop::run_app;
use dashtui::resource::load_snapshot;
use dashtui::storage::FileStore;

fn main() -> Result<()> {
    let snapshot_path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => anyhow::bail!("usage: dashtui <resources.json>"),
    };

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("dashtui must be run in an interactive terminal");
    }

    let resources = load_snapshot(&snapshot_path)?;
    let store = Rc::new(FileStore::new()?);

    // Options are scoped per snapshot so independent dashboards keep
    // independent preferences; the starred list stays shared.
    let scope_token = snapshot_path
        .canonicalize()
        .unwrap_or(snapshot_path)
        .to_string_lossy()
        .into_owned();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(store, Rc::new(NullSink), &resources, &scope_token);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal (always try to restore even on error)
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}
