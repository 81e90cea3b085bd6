//! Historical rotor and reflector wirings
//!
//! The tables are immutable process-wide data. Callers name a rotor or
//! reflector through the closed [`RotorId`] / [`ReflectorId`] enums; parsing a
//! free-form name is the only place an unknown identifier can appear, and it
//! fails with [`Error::InvalidRotor`] / [`Error::InvalidReflector`].

use crate::alphabet;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Tables
// ============================================================================

const ROTOR_TABLES: [(&str, &str); 5] = [
    ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
];

static ROTOR_WIRINGS: [[u8; 26]; 5] = rotor_wirings();

static ROTOR_NOTCHES: [[u8; 1]; 5] = rotor_notches();

const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

static REFLECTOR_B_WIRING: [u8; 26] = alphabet::wiring(REFLECTOR_B);

const fn rotor_wirings() -> [[u8; 26]; 5] {
    let mut out = [[0u8; 26]; 5];
    let mut i = 0;
    while i < ROTOR_TABLES.len() {
        out[i] = alphabet::wiring(ROTOR_TABLES[i].0);
        i += 1;
    }
    out
}

const fn rotor_notches() -> [[u8; 1]; 5] {
    let mut out = [[0u8; 1]; 5];
    let mut i = 0;
    while i < ROTOR_TABLES.len() {
        out[i] = [ROTOR_TABLES[i].1.as_bytes()[0] - b'A'];
        i += 1;
    }
    out
}

// ============================================================================
// Rotors
// ============================================================================

/// Rotors available in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    /// Rotor I, notch at Q
    I,
    /// Rotor II, notch at E
    II,
    /// Rotor III, notch at V
    III,
    /// Rotor IV, notch at J
    IV,
    /// Rotor V, notch at Z
    V,
}

impl RotorId {
    fn table_index(self) -> usize {
        match self {
            RotorId::I => 0,
            RotorId::II => 1,
            RotorId::III => 2,
            RotorId::IV => 3,
            RotorId::V => 4,
        }
    }

    /// Catalog identifier ("I" through "V")
    pub fn name(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        }
    }

    /// Right-to-left wiring as indices
    pub fn wiring(self) -> &'static [u8; 26] {
        &ROTOR_WIRINGS[self.table_index()]
    }

    /// Window positions at which this rotor carries its left neighbour
    pub fn notches(self) -> &'static [u8] {
        &ROTOR_NOTCHES[self.table_index()]
    }

    /// Wiring as the conventional letter string
    pub fn wiring_letters(self) -> &'static str {
        ROTOR_TABLES[self.table_index()].0
    }

    /// Notch letters as a string
    pub fn notch_letters(self) -> &'static str {
        ROTOR_TABLES[self.table_index()].1
    }

    /// List all catalog rotors
    pub fn all() -> &'static [RotorId] {
        &[RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V]
    }
}

impl std::fmt::Display for RotorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for RotorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_uppercase();
        RotorId::all()
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or_else(|| Error::InvalidRotor(s.trim().to_string()))
    }
}

// ============================================================================
// Reflectors
// ============================================================================

/// Reflectors available in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReflectorId {
    /// Wide reflector B (Umkehrwalze B)
    #[default]
    B,
}

impl ReflectorId {
    /// Catalog identifier
    pub fn name(self) -> &'static str {
        match self {
            ReflectorId::B => "B",
        }
    }

    /// Reflector wiring as indices
    pub fn wiring(self) -> &'static [u8; 26] {
        match self {
            ReflectorId::B => &REFLECTOR_B_WIRING,
        }
    }

    /// Wiring as the conventional letter string
    pub fn wiring_letters(self) -> &'static str {
        match self {
            ReflectorId::B => REFLECTOR_B,
        }
    }

    /// List all catalog reflectors
    pub fn all() -> &'static [ReflectorId] {
        &[ReflectorId::B]
    }
}

impl std::fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ReflectorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_uppercase();
        ReflectorId::all()
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or_else(|| Error::InvalidReflector(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotor_parse() {
        assert_eq!("I".parse::<RotorId>().unwrap(), RotorId::I);
        assert_eq!("iv".parse::<RotorId>().unwrap(), RotorId::IV);
        assert_eq!(" III ".parse::<RotorId>().unwrap(), RotorId::III);
        assert!(matches!(
            "VI".parse::<RotorId>(),
            Err(Error::InvalidRotor(name)) if name == "VI"
        ));
        assert!("".parse::<RotorId>().is_err());
    }

    #[test]
    fn test_reflector_parse() {
        assert_eq!("b".parse::<ReflectorId>().unwrap(), ReflectorId::B);
        assert!(matches!(
            "C".parse::<ReflectorId>(),
            Err(Error::InvalidReflector(_))
        ));
    }

    #[test]
    fn test_display_matches_name() {
        for id in RotorId::all() {
            assert_eq!(id.to_string(), id.name());
            assert_eq!(id.name().parse::<RotorId>().unwrap(), *id);
        }
        assert_eq!(ReflectorId::B.to_string(), "B");
    }

    #[test]
    fn test_rotor_wirings_are_permutations() {
        for id in RotorId::all() {
            let mut seen = [false; 26];
            for &w in id.wiring() {
                assert!(!seen[w as usize], "rotor {} repeats {}", id, w);
                seen[w as usize] = true;
            }
        }
    }

    #[test]
    fn test_tables_agree_with_letters() {
        for id in RotorId::all() {
            let decoded: String = id.wiring().iter().map(|&i| alphabet::letter(i)).collect();
            assert_eq!(decoded, id.wiring_letters());
            let notches: String = id.notches().iter().map(|&i| alphabet::letter(i)).collect();
            assert_eq!(notches, id.notch_letters());
        }

        let notches: Vec<u8> = RotorId::all().iter().map(|id| id.notches()[0]).collect();
        assert_eq!(notches, [16, 4, 21, 9, 25]);
        assert_eq!(RotorId::I.wiring()[0], 4);
        assert_eq!(ReflectorId::B.wiring()[0], 24);
    }

    #[test]
    fn test_reflector_is_fixed_point_free_involution() {
        let w = ReflectorId::B.wiring();
        for i in 0..26u8 {
            let j = w[i as usize];
            assert_ne!(i, j);
            assert_eq!(w[j as usize], i);
        }
    }

    #[test]
    fn test_rotor_serde_names() {
        let json = serde_json::to_string(&RotorId::III).unwrap();
        assert_eq!(json, "\"III\"");
        let back: RotorId = serde_json::from_str("\"V\"").unwrap();
        assert_eq!(back, RotorId::V);
    }
}
