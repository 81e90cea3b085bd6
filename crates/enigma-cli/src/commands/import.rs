//! Import command implementation

use super::build_machine;
use anyhow::{Context, Result};
use console::style;
use enigma_core::codec;
use std::io::Read;

/// Execute the import command
///
/// `message` of `-` reads the export string from stdin.
pub fn execute(message: &str, show_settings: bool, strict: bool, quiet: bool) -> Result<()> {
    let raw = if message == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read message from stdin")?;
        buf
    } else {
        message.to_string()
    };

    let message = codec::parse_message(&raw).context("Invalid message")?;
    let mut machine = build_machine(&message.config, strict)?;

    if show_settings && !quiet {
        eprintln!(
            "{} {}",
            style("Settings:").dim(),
            codec::serialize_config(&message.config)
        );
    }

    println!("{}", machine.encrypt(&message.ciphertext));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_valid() {
        let msg = "ENIGMA|R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:|CT:ILBDA";
        assert!(execute(msg, true, false, true).is_ok());
    }

    #[test]
    fn test_import_missing_prefix() {
        assert!(execute("R:I,II,III|CT:ILBDA", false, false, true).is_err());
    }

    #[test]
    fn test_import_strict_conflict() {
        let msg = "ENIGMA|R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:AB|AC|CT:ILBDA";
        assert!(execute(msg, false, false, true).is_ok());
        assert!(execute(msg, false, true, true).is_err());
    }
}
