//! lucky-draw - full-screen lucky draw for parties and events
//!
//! Usage:
//!   lucky-draw              Run the draw in the terminal (default)
//!   lucky-draw --cli <cmd>  Run headless
//!   lucky-draw --help       Show help

use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use lucky_draw_core::config::LOG_FILE;
use lucky_draw_core::{candidates, SettingsStore};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod app;
mod cli;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use app::{App, ROLLING_INTERVAL};
use cli::GlobalOptions;

/// Where log output goes
enum LogTarget {
    /// The log file; the terminal belongs to the TUI
    File,
    Stderr,
}

fn main() {
    if let Err(e) = run_main() {
        eprintln!("Application error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (global, rest) = match cli::parse_global(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    // Check for --cli flag
    if let Some(cli_pos) = rest.iter().position(|a| a == "--cli") {
        let cli_args: Vec<String> = rest.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        init_logging(LogTarget::Stderr);
        match cli::parse_args(&cli_args) {
            Ok((command, options)) => return cli::run(command, options, &global),
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    if rest.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }
    if let Some(unknown) = rest.first() {
        eprintln!("Error: Unknown argument: {}", unknown);
        eprintln!();
        print_help();
        std::process::exit(1);
    }

    // Default: TUI mode
    init_logging(LogTarget::File);
    let app = load_app(&global)?;
    tui::install_panic_hook();
    let result = run(app);
    tui::restore()?;
    result
}

fn print_help() {
    println!("lucky-draw v{}", env!("CARGO_PKG_VERSION"));
    println!("Draw winners from a list of names");
    println!();
    println!("USAGE:");
    println!("    lucky-draw [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --list <path>       Candidate list, one name per line (default LIST.txt)");
    println!("    --config-dir <dir>  Directory holding user.json and default.json");
    println!("    --seed <n>          Seed the draw for a reproducible result");
    println!("    --cli <cmd>         Run headless (for scripting)");
    println!("    --help              Show this help message");
    println!();
    println!("For CLI mode help: lucky-draw --cli --help");
}

fn init_logging(target: LogTarget) {
    let default_level = match target {
        LogTarget::File => "info",
        LogTarget::Stderr => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::File => {
            // Without a log file logging is simply disabled
            if let Ok(log_file) = File::create(LOG_FILE) {
                let subscriber = FmtSubscriber::builder()
                    .with_env_filter(filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(log_file))
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
        }
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }
}

/// Read settings and the candidate list before the terminal is taken over,
/// so failures print normally
fn load_app(global: &GlobalOptions) -> anyhow::Result<App> {
    let paths = global.settings_paths();
    if !paths.defaults.exists() {
        SettingsStore::install_defaults(&paths, false)?;
    }
    let store = SettingsStore::load(paths)?;

    let list = candidates::load(&global.list)
        .with_context(|| format!("Cannot read candidate list {}", global.list.display()))?;
    Ok(App::new(global.engine(list), store))
}

fn run(mut app: App) -> anyhow::Result<()> {
    let mut terminal = tui::init()?;
    app.fit_to_height(terminal.size()?.height);

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = ROLLING_INTERVAL.saturating_sub(last_tick.elapsed());
        if let Some(key) = event::poll(timeout)? {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= ROLLING_INTERVAL {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
