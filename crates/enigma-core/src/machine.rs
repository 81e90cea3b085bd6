//! The assembled machine: stepping and the signal path
//!
//! ## Stepping
//!
//! Before every letter is enciphered the rotors advance:
//!
//! 1. The middle rotor steps when the right rotor is at its notch, or when the
//!    middle rotor itself is at its notch.
//! 2. The middle notch is then checked again on the middle rotor's new
//!    position; if it is there, the left rotor steps. The middle rotor thus
//!    moves on two consecutive keystrokes (onto its notch, then off it) and
//!    drags the left rotor along as it lands on the notch.
//! 3. The right rotor always steps.
//!
//! With rotors I, II, III starting at `ADU` the windows read `ADV`, `BEW`,
//! `BFX` on the next three keystrokes. The rotor triple returns to its start
//! after 16,900 keystrokes.
//!
//! ## Signal path
//!
//! plugboard → right, middle, left (forward) → reflector →
//! left, middle, right (backward) → plugboard

use crate::alphabet;
use crate::config::MachineConfig;
use crate::error::Result;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Slot indices into the rotor array
const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// A three-rotor machine
///
/// Encryption mutates the rotor windows, so one machine serves one message
/// stream. Build a fresh machine (or clone one) per stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Build a machine from a validated configuration
    ///
    /// Conflicting plugboard pairs are dropped (see [`Plugboard::new`]).
    pub fn new(config: &MachineConfig) -> Result<Self> {
        config.validate()?;
        let plugboard = Plugboard::new(&config.plugboard)?;
        Self::assemble(config, plugboard)
    }

    /// Build a machine, rejecting conflicting plugboard pairs
    pub fn with_strict_plugboard(config: &MachineConfig) -> Result<Self> {
        config.validate()?;
        let plugboard = Plugboard::strict(&config.plugboard)?;
        Self::assemble(config, plugboard)
    }

    fn assemble(config: &MachineConfig, plugboard: Plugboard) -> Result<Self> {
        let positions = config.position_indices()?;
        let rotors = [LEFT, MIDDLE, RIGHT]
            .map(|slot| Rotor::new(config.rotors[slot], config.rings[slot] - 1, positions[slot]));

        let machine = Self::from_parts(rotors, Reflector::new(config.reflector), plugboard);
        tracing::debug!(
            "Built machine rotors={}/{}/{} window={} reflector={} plugs={}",
            config.rotors[LEFT],
            config.rotors[MIDDLE],
            config.rotors[RIGHT],
            machine.window(),
            config.reflector,
            machine.plugboard.len()
        );
        Ok(machine)
    }

    /// Assemble a machine from already-built components, left rotor first
    pub fn from_parts(rotors: [Rotor; 3], reflector: Reflector, plugboard: Plugboard) -> Self {
        Self {
            rotors,
            reflector,
            plugboard,
        }
    }

    /// Rotors left to right
    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    /// The reflector
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current window positions left to right
    pub fn positions(&self) -> [u8; 3] {
        self.rotors.each_ref().map(Rotor::position)
    }

    /// Current window letters, e.g. `"ADU"`
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Advance the rotors for one keystroke
    pub fn step(&mut self) {
        if self.rotors[RIGHT].at_notch() || self.rotors[MIDDLE].at_notch() {
            self.rotors[MIDDLE].step();
        }
        // Checked on the middle rotor's new position
        if self.rotors[MIDDLE].at_notch() {
            self.rotors[LEFT].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Send one contact through the machine without stepping
    pub fn signal(&self, c: u8) -> u8 {
        let mut c = self.plugboard.swap(c);
        for rotor in self.rotors.iter().rev() {
            c = rotor.forward(c);
        }
        c = self.reflector.reflect(c);
        for rotor in &self.rotors {
            c = rotor.backward(c);
        }
        self.plugboard.swap(c)
    }

    /// Press one key
    ///
    /// Letters (either case) step the rotors and come back enciphered in
    /// uppercase. Anything else is returned unchanged and does not step.
    pub fn press(&mut self, ch: char) -> char {
        let Some(c) = alphabet::index_of(ch) else {
            return ch;
        };
        self.step();
        let out = alphabet::letter(self.signal(c));
        tracing::trace!("{} -> {} window={}", ch, out, self.window());
        out
    }

    /// Encipher (or decipher) a text
    ///
    /// Non-letters are copied through in place and consume no keystroke.
    pub fn encrypt(&mut self, text: &str) -> String {
        text.chars().map(|ch| self.press(ch)).collect()
    }

    /// Snapshot of the configuration with the current windows as positions
    pub fn config(&self) -> MachineConfig {
        MachineConfig {
            rotors: self.rotors.each_ref().map(Rotor::id),
            positions: self.rotors.each_ref().map(Rotor::window),
            rings: self.rotors.each_ref().map(|r| r.ring() + 1),
            reflector: self.reflector.id(),
            plugboard: self.plugboard.pairs(),
        }
    }
}
