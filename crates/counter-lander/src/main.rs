use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

mod actions;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use counter_config::AppConfig;
use middleware::{keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware};
use state::AppState;
use store::Store;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting counter-lander, logging to {:?}", log_file);

    let config = AppConfig::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Redraw only after the state actually changed
    let dirty = Rc::new(Cell::new(true));
    let needs_redraw = Rc::clone(&dirty);
    store.subscribe(Box::new(move |state: &AppState| {
        log::debug!(
            "State changed: value={} undo={} redo={}",
            state.counter.current_value,
            state.counter.previous_values.len(),
            state.counter.future_values.len()
        );
        needs_redraw.set(true);
    }));

    let result = run_app(&mut terminal, &mut store, &dirty);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting counter-lander");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    dirty: &Cell<bool>,
) -> Result<()> {
    loop {
        if dirty.replace(false) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), area, frame);
            })?;
        }

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }
    }

    Ok(())
}
