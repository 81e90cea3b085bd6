//! The plugboard (Steckerbrett)
//!
//! Pairs are wired in the order given. A pair that reuses a letter already
//! wired by an earlier pair is dropped, matching how the historical operator
//! tooling behaved: the first cable plugged into a socket wins. Self-pairs
//! such as `AA` carry no cable and are ignored. [`Plugboard::strict`] rejects
//! conflicts instead.

use crate::alphabet;
use crate::error::{Error, Result};

/// An involutive letter swap applied on entry and exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; 26],
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself
    pub fn empty() -> Self {
        let mut mapping = [0u8; 26];
        for (i, m) in mapping.iter_mut().enumerate() {
            *m = i as u8;
        }
        Self { mapping }
    }

    /// Wire pairs leniently
    ///
    /// Conflicting and self pairs are skipped with a log message. Fails only
    /// when a pair contains a non-letter.
    pub fn new(pairs: &[(char, char)]) -> Result<Self> {
        Self::build(pairs, false)
    }

    /// Wire pairs, rejecting any pair that reuses a letter
    pub fn strict(pairs: &[(char, char)]) -> Result<Self> {
        Self::build(pairs, true)
    }

    fn build(pairs: &[(char, char)], strict: bool) -> Result<Self> {
        let mut board = Self::empty();

        for &(first, second) in pairs {
            let a = alphabet::index_of(first).ok_or(Error::InvalidPlugboardLetter(first))?;
            let b = alphabet::index_of(second).ok_or(Error::InvalidPlugboardLetter(second))?;

            if a == b {
                tracing::debug!("Ignoring self plugboard pair {}{}", first, second);
                continue;
            }

            let reused = [a, b].into_iter().find(|&i| board.is_wired(i));
            if let Some(letter) = reused {
                let conflict = Error::ConflictingPlugboardPair {
                    first: alphabet::letter(a),
                    second: alphabet::letter(b),
                    letter: alphabet::letter(letter),
                };
                if strict {
                    return Err(conflict);
                }
                tracing::warn!("Dropping plugboard pair: {}", conflict);
                continue;
            }

            board.mapping[a as usize] = b;
            board.mapping[b as usize] = a;
        }

        Ok(board)
    }

    fn is_wired(&self, c: u8) -> bool {
        self.mapping[c as usize] != c
    }

    /// Swap a letter with its partner, or return it unchanged
    ///
    /// `c` is a letter index, reduced modulo 26.
    pub fn swap(&self, c: u8) -> u8 {
        self.mapping[(c % alphabet::LEN) as usize]
    }

    /// Wired pairs in canonical form: lower letter first, sorted
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(i, &m)| (i as u8) < m)
            .map(|(i, &m)| (alphabet::letter(i as u8), alphabet::letter(m)))
            .collect()
    }

    /// Number of cables plugged in
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    /// Whether no cable is plugged in
    pub fn is_empty(&self) -> bool {
        (0..26).all(|c| !self.is_wired(c))
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}
