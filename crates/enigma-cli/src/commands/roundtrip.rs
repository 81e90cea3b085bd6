//! Roundtrip command implementation

use super::{build_machine, KeyArgs};
use anyhow::{bail, Result};
use console::style;
use enigma_core::Settings;

/// Execute the roundtrip command
///
/// Encrypts with one machine, decrypts with a fresh one built from the same
/// key, and fails unless the uppercased text comes back.
pub fn execute(text: &str, key: &KeyArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let strict = key.strict(settings);
    let config = key.resolve(settings)?;
    let mut sender = build_machine(&config, strict)?;
    let mut receiver = build_machine(&config, strict)?;

    let cipher = sender.encrypt(text);
    let decipher = receiver.encrypt(&cipher);

    if !quiet {
        println!("{} {}", style("Settings:").dim(), config);
        println!("{}    {}", style("Plain:").dim(), text);
        println!("{}   {}", style("Cipher:").dim(), cipher);
        println!("{} {}", style("Decipher:").dim(), decipher);
    }

    let expected = text.to_ascii_uppercase();
    if decipher != expected {
        bail!("Roundtrip mismatch: {:?} came back as {:?}", expected, decipher);
    }

    if !quiet {
        println!("{}", style("Roundtrip OK").green().bold());
    }
    Ok(())
}
