//! Machine configuration
//!
//! A [`MachineConfig`] is the full key for one session: which rotors sit in
//! which slot, their starting windows and ring settings, the reflector, and
//! the plugboard cables. It is plain data; [`Machine::new`](crate::Machine::new)
//! validates it and builds the working machine.

use crate::alphabet;
use crate::catalog::{ReflectorId, RotorId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rotor set used when none is given
pub const DEFAULT_ROTORS: [RotorId; 3] = [RotorId::I, RotorId::II, RotorId::III];

/// Starting windows used when none are given
pub const DEFAULT_POSITIONS: [char; 3] = ['A', 'A', 'A'];

/// Ring settings used when none are given (1-based, as printed on the ring)
pub const DEFAULT_RINGS: [u8; 3] = [1, 1, 1];

/// Configuration for one machine, slots ordered left, middle, right
///
/// The builder methods store letters uppercased, the form the settings codec
/// writes, so a built config survives a serialize/deserialize round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotors left to right
    pub rotors: [RotorId; 3],

    /// Starting window letters left to right
    pub positions: [char; 3],

    /// Ring settings left to right, 1..=26
    pub rings: [u8; 3],

    /// Reflector
    pub reflector: ReflectorId,

    /// Plugboard cables in the order they were plugged
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: DEFAULT_ROTORS,
            positions: DEFAULT_POSITIONS,
            rings: DEFAULT_RINGS,
            reflector: ReflectorId::default(),
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotor order
    pub fn rotors(mut self, rotors: [RotorId; 3]) -> Self {
        self.rotors = rotors;
        self
    }

    /// Set the starting windows, uppercased
    pub fn positions(mut self, positions: [char; 3]) -> Self {
        self.positions = positions.map(|c| c.to_ascii_uppercase());
        self
    }

    /// Set the ring settings
    pub fn rings(mut self, rings: [u8; 3]) -> Self {
        self.rings = rings;
        self
    }

    /// Set the reflector
    pub fn reflector(mut self, reflector: ReflectorId) -> Self {
        self.reflector = reflector;
        self
    }

    /// Add one plugboard cable, uppercased
    pub fn plug(mut self, a: char, b: char) -> Self {
        self.plugboard
            .push((a.to_ascii_uppercase(), b.to_ascii_uppercase()));
        self
    }

    /// Replace all plugboard cables, uppercased
    pub fn plugboard(mut self, pairs: Vec<(char, char)>) -> Self {
        self.plugboard = pairs
            .into_iter()
            .map(|(a, b)| (a.to_ascii_uppercase(), b.to_ascii_uppercase()))
            .collect();
        self
    }

    /// Check every field is inside its domain
    pub fn validate(&self) -> Result<()> {
        if let Some(&ring) = self.rings.iter().find(|r| !(1..=26).contains(*r)) {
            return Err(Error::InvalidRingSetting(ring));
        }
        if let Some(&pos) = self.positions.iter().find(|p| alphabet::index_of(**p).is_none()) {
            return Err(Error::InvalidPosition(pos));
        }
        for &(a, b) in &self.plugboard {
            for c in [a, b] {
                if alphabet::index_of(c).is_none() {
                    return Err(Error::InvalidPlugboardLetter(c));
                }
            }
        }
        Ok(())
    }

    /// Starting windows as zero-based indices
    pub(crate) fn position_indices(&self) -> Result<[u8; 3]> {
        let mut out = [0u8; 3];
        for (slot, &pos) in out.iter_mut().zip(&self.positions) {
            *slot = alphabet::index_of(pos).ok_or(Error::InvalidPosition(pos))?;
        }
        Ok(out)
    }

    /// Starting windows as a three-letter string, e.g. `"AAA"`
    pub fn window(&self) -> String {
        self.positions.iter().map(|c| c.to_ascii_uppercase()).collect()
    }
}
