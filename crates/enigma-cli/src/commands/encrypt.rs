//! Encrypt command implementation
//!
//! The machine is reciprocal, so this also serves `decrypt`.

use super::{group_letters, read_input, KeyArgs};
use anyhow::{Context, Result};
use enigma_core::{codec, MachineConfig, Settings};
use serde_json::json;
use std::path::PathBuf;

/// Arguments for the encrypt command
pub struct EncryptArgs {
    /// Text given on the command line
    pub text: Option<String>,
    /// Machine key
    pub key: KeyArgs,
    /// File to read the text from
    pub input: Option<PathBuf>,
    /// Print an export string instead of bare output
    pub export: bool,
    /// Print a JSON object
    pub json: bool,
    /// Letter group size for bare output, 0 disables
    pub group: usize,
}

/// Execute the encrypt command
pub fn execute(args: EncryptArgs, settings: &Settings) -> Result<()> {
    let text = read_input(args.text.clone(), args.input.as_deref())?;
    let (config, mut machine) = args.key.machine(settings)?;

    let output = machine.encrypt(&text);
    tracing::debug!(
        "Processed {} characters, windows {} -> {}",
        text.chars().count(),
        config.window(),
        machine.window()
    );

    println!("{}", render(&config, &output, &args)?);
    Ok(())
}

fn render(config: &MachineConfig, output: &str, args: &EncryptArgs) -> Result<String> {
    if args.json {
        let value = json!({
            "settings": codec::serialize_config(config),
            "config": config,
            "output": output,
            "message": codec::export(config, output),
        });
        return serde_json::to_string_pretty(&value).context("Failed to serialize output to JSON");
    }

    if args.export {
        return Ok(codec::export(config, output));
    }

    Ok(group_letters(output, args.group))
}
