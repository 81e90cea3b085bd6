//! Configuration file management command

use anyhow::{Context, Result};
use console::style;
use enigma_core::Settings;
use std::path::PathBuf;

/// Arguments for the config command
pub struct ConfigArgs {
    /// Initialize a new configuration file with defaults
    pub init: bool,
    /// Show the path to the configuration file
    pub path: bool,
    /// Show configuration in JSON format
    pub json: bool,
    /// Suppress output (for scripting)
    pub silent: bool,
    /// Custom configuration file path (overrides default)
    pub config_file: Option<PathBuf>,
}

/// Execute the config command
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config_path = args.config_file.clone().or_else(Settings::config_path);

    if args.path {
        if let Some(path) = &config_path {
            if !args.silent {
                println!("{}", path.display());
            }
        } else if !args.silent {
            eprintln!("{}", style("Could not determine config path").yellow());
        }
        return Ok(());
    }

    if args.init {
        return init_config(config_path, args.silent);
    }

    show_config(config_path, args.json, args.silent)
}

/// Initialize a new configuration file with default values
fn init_config(config_path: Option<PathBuf>, silent: bool) -> Result<()> {
    let path = config_path.context("Could not determine configuration directory")?;

    if path.exists() {
        if !silent {
            eprintln!(
                "{} Configuration file already exists at: {}",
                style("Warning:").yellow(),
                path.display()
            );
            eprintln!("Use a text editor to modify it, or delete it to re-initialize.");
        }
        return Ok(());
    }

    let saved_path = Settings::default()
        .save_to_path(Some(path))
        .context("Failed to save configuration file")?;

    if !silent {
        println!(
            "{} Created configuration file at: {}",
            style("Success:").green(),
            saved_path.display()
        );
        println!();
        println!("Edit the [machine] section to change the default key:");
        println!();
        println!("  [machine]");
        println!("  rotors = [\"II\", \"IV\", \"V\"]");
        println!("  positions = \"BLA\"");
        println!("  rings = [2, 21, 12]");
        println!("  plugboard = \"AV BS CG DL\"");
        println!();
        println!("  [behavior]");
        println!("  group_size = 5       # Print ciphertext in five-letter groups");
    }

    Ok(())
}

/// Show the current configuration
fn show_config(config_path: Option<PathBuf>, json: bool, silent: bool) -> Result<()> {
    if silent {
        return Ok(());
    }

    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let settings = Settings::load_from_path(config_path.clone());

    if json {
        let json_output = serde_json::to_string_pretty(&settings)
            .context("Failed to serialize settings to JSON")?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("{}", style("Enigma Configuration").bold());
    println!();

    if let Some(path) = &config_path {
        if config_exists {
            println!("  {} {}", style("Config file:").dim(), path.display());
        } else {
            println!(
                "  {} {} {}",
                style("Config file:").dim(),
                path.display(),
                style("(not found, using defaults)").yellow()
            );
        }
    }
    println!();

    let machine = &settings.machine;
    println!("{}", style("[machine]").cyan());
    println!("  rotors = {:?}", machine.rotors);
    println!("  positions = \"{}\"", machine.positions);
    println!("  rings = {:?}", machine.rings);
    println!("  reflector = \"{}\"", machine.reflector);
    println!("  plugboard = \"{}\"", machine.plugboard);
    match machine.to_config() {
        Ok(config) => println!("  {} {}", style("# key:").dim(), config),
        Err(e) => println!("  {} {}", style("# invalid:").red(), e),
    }
    println!();

    println!("{}", style("[behavior]").cyan());
    println!("  quiet = {}", settings.behavior.quiet);
    println!("  strict_plugboard = {}", settings.behavior.strict_plugboard);
    println!("  group_size = {}", settings.behavior.group_size);

    if !config_exists {
        println!();
        println!(
            "{}",
            style("Run 'enigma config --init' to create a configuration file.").dim()
        );
    }

    Ok(())
}
