//! Check command implementation.
//!
//! Loads the catalog the way the server does and cross-checks it against the
//! map directory.

use anyhow::{bail, Result};
use repmap_core::StateInfo;
use repmap_ops::{load_catalog, Config, MapLibrary};

/// Execute the check command.
pub fn execute(config: &Config, strict: bool) -> Result<()> {
    let catalog = load_catalog(&config.data_dir)?;
    let maps = MapLibrary::new(&config.states_dir);

    println!("📊 repmap data check");
    println!("{:─<50}", "");
    println!("📁 Data:        {}", config.data_dir.display());
    println!("🗺️  Maps:        {}", config.states_dir.display());
    println!();
    println!("States:          {}", catalog.options.state_count());
    println!("Representatives: {}", catalog.options.rep_count());
    println!("Districts:       {}", catalog.districts.len());

    let without_reps: Vec<_> = StateInfo::sorted()
        .into_iter()
        .filter(|state| catalog.options.reps_for(state.abbr).is_empty())
        .collect();
    if !without_reps.is_empty() {
        println!();
        println!("ℹ️  States without representatives ({}):", without_reps.len());
        for state in &without_reps {
            println!("   • {} ({})", state.display_name(), state.abbr);
        }
    }

    let orphaned = catalog.orphaned_districts();
    if !orphaned.is_empty() {
        println!();
        println!("⚠️  Districts whose representative is not listed for any state:");
        for (district, rep) in &orphaned {
            println!("   • {} → {}", district, rep);
        }
    }

    let missing = maps.missing_states();
    if !missing.is_empty() {
        println!();
        println!("⚠️  States without a map file:");
        for state in &missing {
            println!("   • {}", state.svg_file_name());
        }
    }

    let problems = orphaned.len() + missing.len();
    println!();
    if problems == 0 {
        println!("✅ No problems found");
    } else if strict {
        bail!("{} problem(s) found", problems);
    } else {
        println!("Found {} problem(s)", problems);
    }

    Ok(())
}
