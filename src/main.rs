//! Terminal front end: sets up logging and the terminal, then runs the
//! single-threaded event loop that feeds input and timer ticks to the
//! lifecycle controller.
//!
//! # Controls
//!
//! * g / o: start the glider / oscillator seed
//! * Space: pause or resume
//! * Enter: step one generation while paused
//! * r: record a pattern by clicking cells, e: play it
//! * c: clear
//! * q: quit

use std::{
    fs::File,
    io::{self, Stdout},
    sync::Mutex,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sysinfo::{System, SystemExt};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_recorder::{
    config::Args,
    input::{self, CanvasGeometry, Command, Flow},
    ui, AppError, LifecycleController, Surface,
};

/// Poll timeout while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

type Term = Terminal<CrosstermBackend<Stdout>>;

fn init_logging(args: &Args) -> Result<(), AppError> {
    let file = File::create(&args.log_file).map_err(|e| AppError::log_file(&args.log_file, e))?;
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(terminal: &mut Term, args: &Args) -> Result<(), AppError> {
    let canvas = ui::canvas_area(terminal.size()?);
    let pitch = args.pitch();
    let (width, height) = (canvas.width as usize / pitch, canvas.height as usize / pitch);
    if width == 0 || height == 0 {
        return Err(AppError::SurfaceTooSmall {
            width: canvas.width,
            height: canvas.height,
        });
    }
    info!(width, height, pitch, tick_ms = args.tick_ms, "grid ready");

    let geometry = CanvasGeometry {
        left: canvas.x,
        top: canvas.y,
        pitch,
    };
    let surface = Surface::new(width, height, pitch);
    let mut controller = LifecycleController::new(surface, width, height, pitch, args.tick());
    let mut sys = System::new_all();

    input::dispatch(&mut controller, Command::SelectPattern(args.pattern.clone()));

    loop {
        terminal.draw(|f| ui::draw(f, &controller, &sys))?;

        let timeout = controller
            .time_until_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let event = event::read()?;
            if let Some(command) = input::translate(&event, geometry) {
                if input::dispatch(&mut controller, command) == Flow::Quit {
                    break;
                }
            }
        }

        if controller.poll(Instant::now()) {
            sys.refresh_memory();
        }
    }

    info!(generation = controller.stats().generation, "exiting");
    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(&args)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &args);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(%err, "terminal session failed");
    }
    result
}
