//! Proportion slider demo — a resizable sandbox around the widget.
//!
//! Run with mouse support in any terminal that reports mouse events:
//! drag the red knob to redistribute the two proportions.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use propslider_core::ProportionPair;
use propslider_tui::app::AppState;
use propslider_tui::{config, input, persistence, ui};

/// Two-segment proportion slider demo.
#[derive(Debug, Parser)]
#[command(name = "propslider", version, about)]
struct Args {
    /// Initial left value.
    #[arg(long, default_value_t = 50.0)]
    left: f64,

    /// Initial right value.
    #[arg(long, default_value_t = 50.0)]
    right: f64,

    /// Slider height in rows (including label gutters).
    #[arg(long, default_value_t = 5)]
    height: u16,

    /// Start with the slider disabled.
    #[arg(long)]
    disabled: bool,

    /// Optional TOML config for labels, colors, and knob style.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip loading and saving persisted state.
    #[arg(long)]
    no_persist: bool,
}

/// Poll interval: ~30 FPS, matching the fit sampling cadence.
const POLL_MS: u64 = 33;

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("propslider")
        .join("state.json");

    let mut app = AppState::new(ProportionPair::new(args.left, args.right));
    app.height = args.height.clamp(1, 15);
    app.disabled = args.disabled;

    if let Some(path) = &args.config {
        match config::load(path) {
            Ok(cfg) => config::apply(&mut app, cfg),
            Err(err) => app.set_warning(format!("Config {}: {err}", path.display())),
        }
    }
    if !args.no_persist {
        persistence::apply(&mut app, persistence::load(&state_path));
    }

    // Setup terminal.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit.
    if !args.no_persist {
        let _ = persistence::save(&state_path, &persistence::extract(&app));
    }

    // Restore terminal.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        // 1. Render (also re-measures track geometry and label widths).
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Advance fit sampling and label animation.
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        app.slider.tick(dt_ms);

        // 3. Poll for input events.
        if event::poll(Duration::from_millis(POLL_MS))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(ev) => input::handle_mouse(app, ev),
                // Next draw re-measures; nothing to do here.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        // 4. Check quit.
        if !app.running {
            break;
        }
    }
    Ok(())
}
