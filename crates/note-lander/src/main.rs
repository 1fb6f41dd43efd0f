use anyhow::{Context, Result};
use note_config::{load_note, note_path, AppConfig, RecentNotes};
use note_document::{EditorBuffer, Note};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
            Event, KeyEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod actions;
mod dispatcher;
mod layout;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    keyboard::KeyboardMiddleware, logging::LoggingMiddleware, persistence::PersistenceMiddleware,
};
use state::AppState;
use store::Store;

const USAGE: &str = "usage: note-lander [NOTE.json | --last]";

fn main() -> Result<()> {
    let log_path = logger::init()?;
    log::info!("Starting note-lander, logging to {:?}", log_path);

    let config = AppConfig::load();
    let (note, path) = open_note(std::env::args().nth(1), &config)?;
    log::info!("Editing {:?} ({})", path, note.title);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut store = Store::new(AppState::new(config, EditorBuffer::new(note), path));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PersistenceMiddleware::new()));

    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));
    store.dispatch(Action::Global(GlobalAction::Start));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting note-lander");
    result
}

/// Pick the note to edit from the command line
fn open_note(arg: Option<String>, config: &AppConfig) -> Result<(Note, PathBuf)> {
    match arg.as_deref() {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Some("--last") => match RecentNotes::load().latest() {
            Some(recent) => open_path(&recent.path),
            None => Ok(new_note("Untitled", config)),
        },
        Some(path) => open_path(Path::new(path)),
        None => Ok(new_note("Untitled", config)),
    }
}

fn open_path(path: &Path) -> Result<(Note, PathBuf)> {
    if path.exists() {
        let note = load_note(path).with_context(|| format!("Cannot open {:?}", path))?;
        return Ok((note, path.to_path_buf()));
    }
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled");
    Ok((Note::new(title), path.to_path_buf()))
}

fn new_note(title: &str, config: &AppConfig) -> (Note, PathBuf) {
    let note = Note::new(title);
    let path = note_path(&config.notes_dir, &note);
    (note, path)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| views::render(store.state(), frame))?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            let action = match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => GlobalAction::KeyPressed(key),
                Event::Mouse(mouse) => GlobalAction::Mouse(mouse),
                Event::Resize(width, height) => GlobalAction::Resize { width, height },
                Event::FocusLost => GlobalAction::FocusLost,
                _ => continue,
            };
            store.dispatch(Action::Global(action));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_missing_path_starts_new_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.json");
        let (note, opened) = open_path(&path).unwrap();
        assert_eq!(note.title, "ideas");
        assert_eq!(opened, path);
    }

    #[test]
    fn test_open_existing_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.json");
        let note = Note::from_plain_text("Saved", "one\ntwo");
        note_config::save_note(&path, &note).unwrap();

        let (loaded, _) = open_path(&path).unwrap();
        assert_eq!(loaded.title, "Saved");
        assert_eq!(loaded.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_new_note_lands_in_notes_dir() {
        let config = AppConfig {
            notes_dir: PathBuf::from("/tmp/notes"),
            ..AppConfig::default()
        };
        let (note, path) = new_note("Untitled", &config);
        assert_eq!(path, PathBuf::from(format!("/tmp/notes/{}.json", note.id)));
    }
}
