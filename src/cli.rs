// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Openhours v{} - Weekly opening-hours for resource directories",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} show <week.toml|hours.json> [--short] [--condensed]",
        binary_name
    );
    println!("    {} check <week.toml|hours.json> [\"Day,H:MM\"]", binary_name);
    println!("    {} convert <week.toml>", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("FILES:");
    println!("    *.toml     Raw week files: one `DayName = \"range string\"` line per day,");
    println!("               e.g. Mon = \"9:00-12:00, 14:00-17:00\" or Sat = \"24hr\".");
    println!("    *.json     Canonical hours: weekday index (0=Sunday) -> [[start, end]].");
    println!();
    println!("SHOW OPTIONS:");
    println!("    --short        Use three-letter day names (Mon instead of Monday).");
    println!("    --condensed    Group consecutive days with identical hours into one row.");
    println!();
    println!("CHECK COMMAND:");
    println!(
        "    {} check week.toml \"Mon,10:30\"    Is the schedule open Monday 10:30?",
        binary_name
    );
    println!(
        "    {} check week.toml                Is the schedule open right now?",
        binary_name
    );
    println!();
    println!("CONVERT COMMAND:");
    println!(
        "    {} convert week.toml > hours.json     Emit canonical JSON to stdout",
        binary_name
    );
}
