//! Config command implementation.

use anyhow::Result;
use repmap_ops::{Config, CONFIG_KEYS};

/// Show current configuration.
pub fn show(config: &Config) {
    println!("repmap Configuration");
    println!("{:-<40}", "");

    for key in CONFIG_KEYS {
        println!(
            "{:<18} {}",
            format!("{}:", key),
            config.get(key).unwrap_or_else(|| "(not set)".to_string())
        );
    }

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save()?;
    if key == "supabase_anon_key" {
        println!("✅ Set {}", key);
        println!("⚠️  Key stored in config file. For better security, use SUPABASE_ANON_KEY env var.");
    } else {
        println!("Set {} to: {}", key, value);
    }
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        anyhow::bail!("Unknown config key: {}", key);
    }
    match config.get(key) {
        Some(value) => println!("{}", value),
        None => println!("(not set)"),
    }
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    Config::default().save()?;
    println!("✅ Configuration reset to defaults");
    Ok(())
}
