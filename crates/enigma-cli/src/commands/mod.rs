//! CLI command implementations

pub mod config;
pub mod encrypt;
pub mod import;
pub mod roundtrip;
pub mod rotors;

use anyhow::{bail, Context, Result};
use clap::Args;
use enigma_core::{alphabet, codec, Machine, MachineConfig, RotorId, Settings};
use rand::Rng;
use std::io::Read;
use std::path::Path;

/// Machine key options shared by commands that build a machine
///
/// Anything not given falls back to `--settings`, then to the `[machine]`
/// section of the configuration file, then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct KeyArgs {
    /// Rotors left to right (e.g., I,II,III)
    #[arg(short, long, value_name = "L,M,R")]
    pub rotors: Option<String>,

    /// Starting window letters left to right (e.g., AAA)
    #[arg(short, long, value_name = "LMR")]
    pub positions: Option<String>,

    /// Ring settings left to right, 1-26 (e.g., 1,1,1)
    #[arg(long, value_name = "L,M,R")]
    pub rings: Option<String>,

    /// Reflector
    #[arg(long)]
    pub reflector: Option<String>,

    /// Plugboard pairs (e.g., "AT BS CM" or "A-T,B-S")
    #[arg(short = 'b', long, value_name = "PAIRS")]
    pub plugboard: Option<String>,

    /// Full key as a settings string (R:...;POS:...;RING:...;REF:...;PLUG:...)
    #[arg(long, value_name = "SETTINGS")]
    pub settings: Option<String>,

    /// Pick random starting windows
    #[arg(long, conflicts_with = "positions")]
    pub random_positions: bool,

    /// Reject plugboard pairs that reuse a letter
    #[arg(long)]
    pub strict_plugboard: bool,
}

impl KeyArgs {
    /// Resolve the effective machine configuration
    pub fn resolve(&self, settings: &Settings) -> Result<MachineConfig> {
        let strict = self.strict(settings);
        let mut config = match &self.settings {
            Some(s) => codec::deserialize(s).context("Invalid --settings string")?,
            None if strict => settings
                .machine
                .to_strict_config()
                .context("Invalid [machine] section in configuration file")?,
            None => settings
                .machine
                .to_config()
                .context("Invalid [machine] section in configuration file")?,
        };

        if let Some(rotors) = &self.rotors {
            config.rotors = parse_rotor_list(rotors)?;
        }
        if let Some(positions) = &self.positions {
            config.positions = parse_positions(positions)?;
        }
        if self.random_positions {
            let mut rng = rand::thread_rng();
            config.positions = [(); 3].map(|_| alphabet::letter(rng.gen_range(0..alphabet::LEN)));
        }
        if let Some(rings) = &self.rings {
            config.rings = parse_rings(rings)?;
        }
        if let Some(reflector) = &self.reflector {
            config.reflector = reflector.parse()?;
        }
        if let Some(plugboard) = &self.plugboard {
            config.plugboard = if strict {
                codec::parse_plugboard_text_strict(plugboard)?
            } else {
                codec::parse_plugboard_text(plugboard)
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration and build a machine from it
    pub fn machine(&self, settings: &Settings) -> Result<(MachineConfig, Machine)> {
        let config = self.resolve(settings)?;
        let machine = build_machine(&config, self.strict(settings))?;
        Ok((config, machine))
    }

    /// Whether plugboard pairs reusing a letter are rejected
    pub fn strict(&self, settings: &Settings) -> bool {
        self.strict_plugboard || settings.behavior.strict_plugboard
    }
}

/// Build a machine, optionally rejecting conflicting plugboard pairs
pub fn build_machine(config: &MachineConfig, strict: bool) -> Result<Machine> {
    let machine = if strict {
        Machine::with_strict_plugboard(config)
    } else {
        Machine::new(config)
    };
    Ok(machine?)
}

fn parse_rotor_list(s: &str) -> Result<[RotorId; 3]> {
    let names: Vec<&str> = s.split([',', ' ', '-']).filter(|n| !n.is_empty()).collect();
    let [l, m, r] = names[..] else {
        bail!("Expected 3 rotors, got {:?}", s);
    };
    Ok([l.parse()?, m.parse()?, r.parse()?])
}

fn parse_positions(s: &str) -> Result<[char; 3]> {
    let letters: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let [l, m, r] = letters[..] else {
        bail!("Expected 3 position letters, got {:?}", s);
    };
    Ok([l, m, r].map(|c| c.to_ascii_uppercase()))
}

fn parse_rings(s: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = s.split([',', ' ']).filter(|n| !n.is_empty()).collect();
    let [l, m, r] = parts[..] else {
        bail!("Expected 3 ring settings, got {:?}", s);
    };
    let mut rings = [0u8; 3];
    for (slot, part) in rings.iter_mut().zip([l, m, r]) {
        *slot = part
            .parse()
            .with_context(|| format!("Invalid ring setting: {}", part))?;
    }
    Ok(rings)
}

/// Read text from the argument, a file, or stdin
pub fn read_input(text: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    match input {
        Some(path) => {
            buf = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
        }
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Regroup the letters of a text into blocks of `size`, dropping everything else
///
/// A `size` of 0 returns the text unchanged.
pub fn group_letters(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }
    let letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
    letters
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use enigma_core::ReflectorId;

    #[test]
    fn test_resolve_defaults() {
        let config = KeyArgs::default().resolve(&Settings::default()).unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn test_resolve_overrides() {
        let key = KeyArgs {
            rotors: Some("II,IV,V".to_string()),
            positions: Some("bla".to_string()),
            rings: Some("2,21,12".to_string()),
            reflector: Some("B".to_string()),
            plugboard: Some("AV BS".to_string()),
            ..Default::default()
        };
        let config = key.resolve(&Settings::default()).unwrap();
        assert_eq!(config.rotors, [RotorId::II, RotorId::IV, RotorId::V]);
        assert_eq!(config.window(), "BLA");
        assert_eq!(config.rings, [2, 21, 12]);
        assert_eq!(config.reflector, ReflectorId::B);
        assert_eq!(config.plugboard, vec![('A', 'V'), ('B', 'S')]);
    }

    #[test]
    fn test_resolve_settings_string_then_override() {
        let key = KeyArgs {
            settings: Some("R:III,II,I;POS:XYZ".to_string()),
            positions: Some("AAA".to_string()),
            ..Default::default()
        };
        let config = key.resolve(&Settings::default()).unwrap();
        assert_eq!(config.rotors, [RotorId::III, RotorId::II, RotorId::I]);
        assert_eq!(config.window(), "AAA");
    }

    #[test]
    fn test_resolve_uses_settings_file_defaults() {
        let mut settings = Settings::default();
        settings.machine.positions = "QQQ".to_string();
        let config = KeyArgs::default().resolve(&settings).unwrap();
        assert_eq!(config.window(), "QQQ");
    }

    #[test]
    fn test_resolve_random_positions() {
        let key = KeyArgs {
            random_positions: true,
            ..Default::default()
        };
        let config = key.resolve(&Settings::default()).unwrap();
        assert!(config.positions.iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_resolve_errors() {
        let bad_rotor = KeyArgs {
            rotors: Some("I,II,IX".to_string()),
            ..Default::default()
        };
        assert!(bad_rotor.resolve(&Settings::default()).is_err());

        let bad_ring = KeyArgs {
            rings: Some("1,99,1".to_string()),
            ..Default::default()
        };
        assert!(bad_ring.resolve(&Settings::default()).is_err());

        let short_positions = KeyArgs {
            positions: Some("AB".to_string()),
            ..Default::default()
        };
        assert!(short_positions.resolve(&Settings::default()).is_err());
    }

    #[test]
    fn test_resolve_strict_plugboard_text() {
        let key = KeyArgs {
            plugboard: Some("AB AC".to_string()),
            ..Default::default()
        };
        let lenient = key.resolve(&Settings::default()).unwrap();
        assert_eq!(lenient.plugboard, vec![('A', 'B')]);

        let strict = KeyArgs {
            strict_plugboard: true,
            ..key
        };
        assert!(strict.resolve(&Settings::default()).is_err());
    }

    #[test]
    fn test_resolve_strict_from_settings_file() {
        let mut settings = Settings::default();
        settings.machine.plugboard = "AB BC".to_string();
        assert!(KeyArgs::default().resolve(&settings).is_ok());

        settings.behavior.strict_plugboard = true;
        assert!(KeyArgs::default().resolve(&settings).is_err());
    }

    #[test]
    fn test_build_machine_strict() {
        let config = MachineConfig::new().plug('A', 'B').plug('A', 'C');
        assert!(build_machine(&config, false).is_ok());
        assert!(build_machine(&config, true).is_err());
    }

    #[test]
    fn test_parse_rotor_list_separators() {
        assert_eq!(
            parse_rotor_list("I-II-III").unwrap(),
            [RotorId::I, RotorId::II, RotorId::III]
        );
        assert_eq!(
            parse_rotor_list("v iv iii").unwrap(),
            [RotorId::V, RotorId::IV, RotorId::III]
        );
    }

    #[test]
    fn test_group_letters() {
        assert_eq!(group_letters("ILBDA AMTAZ", 0), "ILBDA AMTAZ");
        assert_eq!(group_letters("ILBDA, AMTAZ!", 5), "ILBDA AMTAZ");
        assert_eq!(group_letters("ABCDEFG", 3), "ABC DEF G");
        assert_eq!(group_letters("", 5), "");
    }
}
