//! A single wired rotor
//!
//! The wiring is fixed to the rotor core while the entry contacts are fixed to
//! the machine frame, so every pass through the rotor shifts into the core's
//! frame of reference, looks up the wiring, and shifts back. Both the window
//! position and the ring setting contribute to that offset.

use crate::alphabet::{self, LEN};
use crate::catalog::RotorId;

/// A rotor instance: catalog wiring plus per-machine ring and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    wiring: [u8; 26],
    inverse: [u8; 26],
    notches: &'static [u8],
    ring: u8,
    position: u8,
}

impl Rotor {
    /// Create a rotor from the catalog
    ///
    /// `ring` and `position` are zero-based offsets and are reduced modulo 26.
    pub fn new(id: RotorId, ring: u8, position: u8) -> Self {
        let wiring = *id.wiring();
        let mut inverse = [0u8; 26];
        for (i, &w) in wiring.iter().enumerate() {
            inverse[w as usize] = i as u8;
        }

        Self {
            id,
            wiring,
            inverse,
            notches: id.notches(),
            ring: ring % LEN,
            position: position % LEN,
        }
    }

    /// Catalog identity of this rotor
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Current window position (0 = `A`)
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Letter currently showing in the window
    pub fn window(&self) -> char {
        alphabet::letter(self.position)
    }

    /// Zero-based ring setting (Ringstellung 01 is 0)
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Right-to-left pass toward the reflector
    ///
    /// `c` is a contact index, reduced modulo 26.
    pub fn forward(&self, c: u8) -> u8 {
        self.pass(&self.wiring, c)
    }

    /// Left-to-right pass back from the reflector
    pub fn backward(&self, c: u8) -> u8 {
        self.pass(&self.inverse, c)
    }

    fn pass(&self, table: &[u8; 26], c: u8) -> u8 {
        let offset = (self.position + LEN - self.ring) % LEN;
        let wired = table[((c % LEN + offset) % LEN) as usize];
        (wired + LEN - offset) % LEN
    }

    /// Advance one position, wrapping Z back to A
    pub fn step(&mut self) {
        self.position = (self.position + 1) % LEN;
    }

    /// Whether the window currently shows a notch letter
    pub fn at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }
}
