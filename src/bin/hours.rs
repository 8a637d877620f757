use anyhow::Result;
use chrono::Local;
use openhours::cli;
use openhours::model::{HumanizeOptions, ScheduleDisplay, WeekSchedule};
use openhours::storage;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" || args[1] == "help" {
        cli::print_help("hours");
        return Ok(());
    }

    match args[1].as_str() {
        "show" => {
            let path = require_path(&args)?;
            let schedule = load_schedule(path)?;
            let options = HumanizeOptions {
                short_day_names: args.iter().any(|a| a == "--short"),
            };
            let rows = if args.iter().any(|a| a == "--condensed") {
                schedule.humanize_condensed(&options)
            } else {
                schedule.humanize(&options)
            };
            for row in rows {
                println!("{}: {}", row.day, row.hours.as_deref().unwrap_or("Closed"));
            }
            Ok(())
        }
        "check" => {
            let path = require_path(&args)?;
            let schedule = load_schedule(path)?;
            let open = match args.get(3) {
                Some(instant) => schedule.within_str(instant)?,
                None => schedule.within_at(&Local::now()),
            };
            println!("{}", if open { "open" } else { "closed" });
            Ok(())
        }
        "convert" => {
            let path = require_path(&args)?;
            let schedule = load_schedule(path)?;
            println!("{}", storage::to_canonical_json(&schedule.merge())?);
            Ok(())
        }
        other => {
            cli::print_help("hours");
            anyhow::bail!("Unknown command: {}", other)
        }
    }
}

fn require_path(args: &[String]) -> Result<&Path> {
    match args.get(2) {
        Some(path) => Ok(Path::new(path)),
        None => anyhow::bail!("Missing file argument, see `hours --help`"),
    }
}

// Raw week files are TOML; anything else is treated as canonical JSON.
fn load_schedule(path: &Path) -> Result<WeekSchedule> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => storage::load_raw_week(path),
        _ => storage::load(path),
    }
}
