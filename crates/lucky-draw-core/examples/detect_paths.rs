//! Show where settings are looked for and which file would be used

use lucky_draw_core::{SettingsPaths, SettingsStore};

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Lucky Draw Settings Detection ===\n");

    let paths = SettingsPaths::detect();
    for (label, path) in [("User", &paths.user), ("Default", &paths.defaults)] {
        let found = if path.is_file() { "FOUND" } else { "NOT FOUND" };
        println!("{:<8} {} ({})", label, path.display(), found);
    }

    println!();
    match SettingsStore::load(paths) {
        Ok(store) => println!("Would use the {}", store.source().describe()),
        Err(e) => println!("No usable settings: {}", e),
    }

    println!("\n=== Done ===");
}
