use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, InputMode, Screen, Step};
use crate::ui::commands;

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();
    tracing::info!("starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    } else {
        tracing::info!("tui closed");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('1') => app.screen = Screen::Plan,
        KeyCode::Char('2') => app.screen = Screen::Breakdown,
        KeyCode::Tab | KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = if key.code == KeyCode::Tab {
                (idx + 1) % screens.len()
            } else if idx == 0 {
                screens.len() - 1
            } else {
                idx - 1
            };
            app.screen = screens[next];
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('c') => app.calculate(),
        KeyCode::Char('R') => app.reset(),
        KeyCode::Char('J') => commands::handle_command("journey", app)?,
        KeyCode::Esc => handle_escape(app),
        _ if app.screen == Screen::Plan => handle_plan_input(key, app),
        _ => {}
    }
    Ok(())
}

fn handle_plan_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char(']') | KeyCode::PageDown => app.jump_step(true),
        KeyCode::Char('[') | KeyCode::PageUp => app.jump_step(false),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust(Step::Small, 1)
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => app.adjust(Step::Small, -1),
        KeyCode::Char('L') => app.adjust(Step::Big, 1),
        KeyCode::Char('H') => app.adjust(Step::Big, -1),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate(),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Breakdown => app.screen = Screen::Plan,
        Screen::Plan => app.status_message.clear(),
    }
}
