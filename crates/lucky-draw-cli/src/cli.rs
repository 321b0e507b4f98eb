//! Headless mode for scripting and testing
//!
//! Usage:
//!   lucky-draw --cli draw [--count N] [--mask] [--json]   Draw winners
//!   lucky-draw --cli validate [--json]                     Check settings files
//!   lucky-draw --cli init [--force]                        Write default settings
//!
//! Global options (any mode):
//!   --list <path>         Candidate list (default LIST.txt)
//!   --config-dir <dir>    Directory holding user.json and default.json
//!   --seed <n>            Seed the draw for a reproducible result

use std::path::PathBuf;

use anyhow::Context;
use lucky_draw_core::config::DEFAULT_LIST_FILE;
use lucky_draw_core::{candidates, Appearance, DrawEngine, Error, SettingsPaths, SettingsStore};
use serde::Serialize;

/// Ticks per headless draw, about a second of rolling on screen
const HEADLESS_TICKS: usize = 33;

/// Options shared by the TUI and headless modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    pub list: PathBuf,
    pub config_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            list: PathBuf::from(DEFAULT_LIST_FILE),
            config_dir: None,
            seed: None,
        }
    }
}

impl GlobalOptions {
    pub fn settings_paths(&self) -> SettingsPaths {
        match &self.config_dir {
            Some(dir) => SettingsPaths::in_dir(dir),
            None => SettingsPaths::detect(),
        }
    }

    /// A draw over `candidates`, seeded when `--seed` was given
    pub fn engine(&self, candidates: Vec<String>) -> DrawEngine {
        match self.seed {
            Some(seed) => DrawEngine::with_seed(candidates, seed),
            None => DrawEngine::new(candidates),
        }
    }
}

/// Take the global options out of `args`, returning them and the rest
pub fn parse_global(args: &[String]) -> Result<(GlobalOptions, Vec<String>), String> {
    let mut options = GlobalOptions::default();
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => {
                let value = iter.next().ok_or("--list requires a path")?;
                options.list = PathBuf::from(value);
            }
            "--config-dir" => {
                let value = iter.next().ok_or("--config-dir requires a directory")?;
                options.config_dir = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            _ => rest.push(arg.clone()),
        }
    }

    Ok((options, rest))
}

/// CLI command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Draw { count: usize, mask: bool },
    Validate,
    Init { force: bool },
}

/// CLI options
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub json: bool,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut command: Option<CliCommand> = None;
    let mut count = 1;
    let mut mask = false;
    let mut force = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => options.json = true,
            "--mask" => mask = true,
            "--force" => force = true,
            "--count" => {
                i += 1;
                let value = args.get(i).ok_or("--count requires a number")?;
                count = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("Invalid count: {}", value))?;
            }
            "draw" => command = Some(CliCommand::Draw { count: 1, mask: false }),
            "validate" => command = Some(CliCommand::Validate),
            "init" => command = Some(CliCommand::Init { force: false }),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
        i += 1;
    }

    let command = match command {
        Some(CliCommand::Draw { .. }) => CliCommand::Draw { count, mask },
        Some(CliCommand::Init { .. }) => CliCommand::Init { force },
        Some(cmd) => cmd,
        None => return Err("No command specified. Use: draw, validate or init".to_string()),
    };

    Ok((command, options))
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions, global: &GlobalOptions) -> anyhow::Result<()> {
    match command {
        CliCommand::Draw { count, mask } => run_draw(count, mask, options, global),
        CliCommand::Validate => run_validate(options, global),
        CliCommand::Init { force } => run_init(force, global),
    }
}

#[derive(Debug, Serialize)]
struct DrawReport {
    winners: Vec<String>,
    remaining: usize,
    masked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

fn run_draw(count: usize, mask: bool, options: CliOptions, global: &GlobalOptions) -> anyhow::Result<()> {
    let list = candidates::load(&global.list)
        .with_context(|| format!("Cannot read candidate list {}", global.list.display()))?;

    // Mask widths come from the settings; the draw itself does not need them
    let appearance = match SettingsStore::load(global.settings_paths()) {
        Ok(store) => Appearance::from_settings(store.live()),
        Err(e) if mask => {
            eprintln!("Warning: {}; using built-in mask widths", e);
            Appearance::default()
        }
        Err(_) => Appearance::default(),
    };
    let display = appearance.display_options(mask);

    let mut engine = global.engine(list);
    let mut winners = Vec::with_capacity(count);
    for _ in 0..count {
        match engine.start() {
            Ok(()) => {}
            Err(Error::EmptyPool) if !winners.is_empty() => {
                eprintln!("Warning: {}", Error::EmptyPool);
                break;
            }
            Err(e) => return Err(e.into()),
        }
        for _ in 0..HEADLESS_TICKS {
            engine.tick()?;
        }
        let winner = engine.stop()?;
        winners.push(match display.mask {
            Some(widths) => widths.apply(&winner),
            None => winner,
        });
    }

    if options.json {
        let report = DrawReport {
            winners,
            remaining: engine.remaining(),
            masked: mask,
            seed: global.seed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (i, winner) in winners.iter().enumerate() {
            println!("{}. {}", i + 1, winner);
        }
        println!();
        println!("{} candidates left", engine.remaining());
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run_validate(options: CliOptions, global: &GlobalOptions) -> anyhow::Result<()> {
    let paths = global.settings_paths();
    let report = match SettingsStore::load(paths.clone()) {
        Ok(store) => {
            let path = match store.source() {
                lucky_draw_core::SettingsSource::UserFile => &paths.user,
                lucky_draw_core::SettingsSource::DefaultFile => &paths.defaults,
            };
            ValidateReport {
                valid: true,
                source: Some(store.source().describe()),
                path: Some(path.display().to_string()),
                error: None,
            }
        }
        Err(e) => ValidateReport {
            valid: false,
            source: None,
            path: None,
            error: Some(e.to_string()),
        },
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let (Some(source), Some(path)) = (report.source, &report.path) {
        println!("Settings OK: using {} from {}", source, path);
    } else if let Some(error) = &report.error {
        println!("Settings unusable: {}", error);
    }

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn run_init(force: bool, global: &GlobalOptions) -> anyhow::Result<()> {
    let paths = global.settings_paths();
    if SettingsStore::install_defaults(&paths, force)? {
        println!("Wrote default settings to {}", paths.defaults.display());
    } else {
        println!(
            "{} already exists (use --force to overwrite)",
            paths.defaults.display()
        );
    }
    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("lucky-draw CLI Mode");
    println!();
    println!("USAGE:");
    println!("    lucky-draw --cli <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    draw                        Draw winners and print them");
    println!("    validate                    Check which settings file would be used");
    println!("    init                        Write the built-in default settings");
    println!();
    println!("OPTIONS:");
    println!("    --count <n>                 Winners to draw (default 1)");
    println!("    --mask                      Mask the middle of each name");
    println!("    --force                     Let init overwrite default.json");
    println!("    --json                      Output in JSON format");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    --list <path>               Candidate list (default LIST.txt)");
    println!("    --config-dir <dir>          Settings directory");
    println!("    --seed <n>                  Seed for a reproducible draw");
    println!();
    println!("EXAMPLES:");
    println!("    lucky-draw --cli draw --count 3");
    println!("    lucky-draw --cli draw --mask --seed 42 --json");
    println!("    lucky-draw --cli validate --config-dir ./config");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_global_extracts_options() {
        let (global, rest) = parse_global(&args(&[
            "--cli", "draw", "--list", "names.txt", "--seed", "42", "--count", "2",
        ]))
        .unwrap();
        assert_eq!(global.list, PathBuf::from("names.txt"));
        assert_eq!(global.seed, Some(42));
        assert_eq!(global.config_dir, None);
        assert_eq!(rest, args(&["--cli", "draw", "--count", "2"]));
    }

    #[test]
    fn test_parse_global_defaults_and_errors() {
        let (global, rest) = parse_global(&[]).unwrap();
        assert_eq!(global, GlobalOptions::default());
        assert_eq!(global.list, PathBuf::from("LIST.txt"));
        assert!(rest.is_empty());

        assert!(parse_global(&args(&["--seed", "many"])).is_err());
        assert!(parse_global(&args(&["--config-dir"])).is_err());
    }

    #[test]
    fn test_parse_draw() {
        let (command, options) = parse_args(&args(&["draw", "--count", "3", "--mask", "--json"])).unwrap();
        assert_eq!(command, CliCommand::Draw { count: 3, mask: true });
        assert!(options.json);

        let (command, _) = parse_args(&args(&["draw"])).unwrap();
        assert_eq!(command, CliCommand::Draw { count: 1, mask: false });
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&["draw", "--count", "0"])).is_err());
        assert!(parse_args(&args(&["draw", "--count"])).is_err());
        assert!(parse_args(&args(&["shuffle"])).is_err());
        assert!(parse_args(&args(&["--json"])).is_err());
    }

    #[test]
    fn test_parse_init_and_validate() {
        let (command, _) = parse_args(&args(&["init", "--force"])).unwrap();
        assert_eq!(command, CliCommand::Init { force: true });
        let (command, _) = parse_args(&args(&["validate"])).unwrap();
        assert_eq!(command, CliCommand::Validate);
    }

    #[test]
    fn test_engine_is_seeded() {
        let global = GlobalOptions {
            seed: Some(5),
            ..GlobalOptions::default()
        };
        let names = args(&["Ann", "Ben", "Cid", "Dee"]);
        let draw = |mut engine: DrawEngine| {
            engine.start().unwrap();
            engine.tick().unwrap();
            engine.stop().unwrap()
        };
        assert_eq!(draw(global.engine(names.clone())), draw(global.engine(names)));
    }
}
