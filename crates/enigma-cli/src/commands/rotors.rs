//! Rotors command implementation

use anyhow::{Context, Result};
use console::style;
use enigma_core::{ReflectorId, RotorId};
use serde_json::json;

/// Execute the rotors command
pub fn execute(json: bool) -> Result<()> {
    if json {
        let rotors: Vec<_> = RotorId::all()
            .iter()
            .map(|r| {
                json!({
                    "id": r.name(),
                    "wiring": r.wiring_letters(),
                    "notches": r.notch_letters(),
                })
            })
            .collect();
        let reflectors: Vec<_> = ReflectorId::all()
            .iter()
            .map(|r| json!({ "id": r.name(), "wiring": r.wiring_letters() }))
            .collect();

        let output = json!({ "rotors": rotors, "reflectors": reflectors });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize catalog")?
        );
        return Ok(());
    }

    println!("{}", style("Rotors").bold());
    for rotor in RotorId::all() {
        println!(
            "  {:<4} {}  {} {}",
            style(rotor.name()).cyan(),
            rotor.wiring_letters(),
            style("notch").dim(),
            rotor.notch_letters()
        );
    }
    println!();
    println!("{}", style("Reflectors").bold());
    for reflector in ReflectorId::all() {
        println!(
            "  {:<4} {}",
            style(reflector.name()).cyan(),
            reflector.wiring_letters()
        );
    }

    Ok(())
}
