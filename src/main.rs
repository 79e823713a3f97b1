// sortty: terminal sorting algorithm visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::{Overrides, Settings};
use sortty::error::AppError;
use sortty::session::Session;
use sortty::ui::App;

#[derive(Parser)]
#[command(name = "sortty")]
#[command(about = "Watch sorting algorithms work, one step at a time", long_about = None)]
struct Args {
    /// Algorithm to start with: bubble, selection, insertion, quick or merge
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of bars (10-100)
    #[arg(short, long)]
    size: Option<usize>,

    /// Seconds between steps (0.01-1.0)
    #[arg(short, long)]
    delay: Option<f64>,

    /// Seed for reproducible arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to <config dir>/sortty/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (defaults to <config dir>/sortty/sortty.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn default_log_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sortty")
        .join("sortty.log")
}

/// Send log output to a file; the terminal belongs to the UI
fn init_logging(path: &Path, verbose: bool) -> Result<(), AppError> {
    use simplelog::*;

    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = File::create(path)?;

    WriteLogger::init(log_level, Config::default(), log_file)?;

    log::info!("sortty starting (log level: {:?})", log_level);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path, args.verbose) {
        eprintln!("Warning: {} (continuing without a log file)", e);
    }

    let overrides = Overrides {
        algorithm: args.algorithm,
        size: args.size,
        delay: args.delay,
        seed: args.seed,
    };
    let settings = match Settings::load(args.config.as_deref(), &overrides) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("settings: {:?}", settings);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Session::new(&settings));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("frame loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
