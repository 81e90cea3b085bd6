//! Compact settings string and the shareable message envelope
//!
//! A machine configuration is written as one line:
//!
//! ```text
//! R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:AT|BS
//! ```
//!
//! and a configuration travelling with its ciphertext as:
//!
//! ```text
//! ENIGMA|R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:AT|BS|CT:ILBDA AMTAZ
//! ```
//!
//! The parser is forgiving about the variants older exports produced:
//!
//! - plugboard pairs as `AT|BS`, `A-T|B-S`, `AT-BS` or a flat run `ATBS`
//! - `;CT:` (or a bare `CT:`) in place of `|CT:`
//! - `|` instead of `;` between fields
//!
//! Fields that are absent take the defaults of [`MachineConfig::default`];
//! fields that are present but unreadable are an error.
//!
//! ## Example
//!
//! ```
//! use enigma_core::{codec, Machine, MachineConfig};
//!
//! let config: MachineConfig = "R:I,II,III;POS:AAA;RING:01,01,01;REF:B;PLUG:".parse()?;
//! let mut machine = Machine::new(&config)?;
//! assert_eq!(machine.encrypt("HELLO"), "ILBDA");
//!
//! let message = codec::Message::new(config, "ILBDA");
//! assert_eq!(message.decrypt()?, "HELLO");
//! # Ok::<(), enigma_core::Error>(())
//! ```

use crate::alphabet;
use crate::catalog::RotorId;
use crate::config::MachineConfig;
use crate::error::{Error, Result};
use crate::machine::Machine;

/// Prefix marking an exported message
pub const MESSAGE_PREFIX: &str = "ENIGMA|";

/// Marker in front of the ciphertext
const CIPHERTEXT_MARKER: &str = "CT:";

/// Field keys in the order they are written
const FIELDS: [&str; 5] = ["R", "POS", "RING", "REF", "PLUG"];

fn malformed(msg: impl Into<String>) -> Error {
    Error::MalformedSettings(msg.into())
}

// ============================================================================
// Serialization
// ============================================================================

/// Settings string for the machine's current windows
pub fn serialize(machine: &Machine) -> String {
    serialize_config(&machine.config())
}

/// Settings string for a configuration
pub fn serialize_config(config: &MachineConfig) -> String {
    let rotors = config
        .rotors
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(",");
    let rings = config
        .rings
        .iter()
        .map(|r| format!("{:02}", r))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "R:{};POS:{};RING:{};REF:{};PLUG:{}",
        rotors,
        config.window(),
        rings,
        config.reflector,
        format_plugboard(&config.plugboard)
    )
}

/// Plugboard pairs as `AT|BS`
pub fn format_plugboard(pairs: &[(char, char)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{}{}", a.to_ascii_uppercase(), b.to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join("|")
}

// ============================================================================
// Deserialization
// ============================================================================

/// Parse a settings string into a configuration
///
/// Never touches a machine; build one from the result with
/// [`Machine::new`].
pub fn deserialize(settings: &str) -> Result<MachineConfig> {
    let settings = normalize_field_separators(settings.trim());
    let mut config = MachineConfig::default();
    let mut seen = [false; FIELDS.len()];

    for segment in settings.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = segment
            .split_once(':')
            .ok_or_else(|| malformed(format!("field {:?} has no key", segment)))?;
        let key = key.trim().to_ascii_uppercase();
        let value = value.trim();

        match key.as_str() {
            "R" => config.rotors = parse_rotors(value)?,
            "POS" => config.positions = parse_positions(value)?,
            "RING" => config.rings = parse_rings(value)?,
            "REF" => config.reflector = value.parse()?,
            "PLUG" => config.plugboard = parse_plugboard(value)?,
            _ => {
                tracing::debug!("Ignoring unknown settings field {:?}", key);
                continue;
            }
        }

        if let Some(i) = FIELDS.iter().position(|f| *f == key) {
            seen[i] = true;
        }
    }

    let defaulted: Vec<&str> = FIELDS
        .iter()
        .zip(seen)
        .filter(|(_, seen)| !seen)
        .map(|(f, _)| *f)
        .collect();
    if !defaulted.is_empty() {
        tracing::debug!("Settings fields defaulted: {}", defaulted.join(","));
    }

    config.validate()?;
    Ok(config)
}

/// Rewrite `|KEY:` field separators to `;KEY:`
///
/// Leaves `|` between plugboard pairs alone.
fn normalize_field_separators(settings: &str) -> String {
    let mut out = settings.to_string();
    for key in FIELDS {
        out = out.replace(&format!("|{}:", key), &format!(";{}:", key));
    }
    out
}

fn parse_rotors(value: &str) -> Result<[RotorId; 3]> {
    let names: Vec<&str> = value.split(',').collect();
    let [left, middle, right] = names[..] else {
        return Err(malformed(format!("expected 3 rotors, got {:?}", value)));
    };
    Ok([left.parse()?, middle.parse()?, right.parse()?])
}

fn parse_positions(value: &str) -> Result<[char; 3]> {
    let letters: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    match letters[..] {
        [a, b, c] if letters.iter().all(|c| c.is_ascii_alphabetic()) => Ok([
            a.to_ascii_uppercase(),
            b.to_ascii_uppercase(),
            c.to_ascii_uppercase(),
        ]),
        _ => Err(malformed(format!(
            "expected 3 position letters, got {:?}",
            value
        ))),
    }
}

fn parse_rings(value: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(malformed(format!("expected 3 ring settings, got {:?}", value)));
    }

    let mut rings = [0u8; 3];
    for (slot, part) in rings.iter_mut().zip(&parts) {
        let ring: u8 = part
            .trim()
            .parse()
            .map_err(|_| malformed(format!("ring setting {:?} is not a number", part.trim())))?;
        if !(1..=26).contains(&ring) {
            return Err(Error::InvalidRingSetting(ring));
        }
        *slot = ring;
    }
    Ok(rings)
}

/// Parse the `PLUG` field
///
/// With `|` present each `|`-separated token is one pair (`AT` or `A-T`).
/// Without it the letters are read as a flat run and split into consecutive
/// pairs, ignoring any `-`.
pub fn parse_plugboard(value: &str) -> Result<Vec<(char, char)>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Vec::new());
    }

    if value.contains('|') {
        value
            .split('|')
            .map(strip_pair_noise)
            .filter(|token| !token.is_empty())
            .map(|token| match token.as_slice() {
                &[a, b] => letter_pair(a, b),
                _ => Err(malformed(format!(
                    "plugboard pair {:?} is not two letters",
                    token.iter().collect::<String>()
                ))),
            })
            .collect()
    } else {
        let letters = strip_pair_noise(value);
        if letters.len() % 2 != 0 {
            return Err(malformed(format!(
                "plugboard {:?} has an odd number of letters",
                value
            )));
        }
        letters
            .chunks(2)
            .map(|pair| letter_pair(pair[0], pair[1]))
            .collect()
    }
}

fn strip_pair_noise(token: &str) -> Vec<char> {
    token
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

fn letter_pair(a: char, b: char) -> Result<(char, char)> {
    for c in [a, b] {
        if alphabet::index_of(c).is_none() {
            return Err(malformed(format!("plugboard letter {:?} is not A-Z", c)));
        }
    }
    Ok((a.to_ascii_uppercase(), b.to_ascii_uppercase()))
}

/// Parse plugboard pairs typed by an operator
///
/// Accepts pairs separated by whitespace, `,`, `;` or `/`, each written as
/// `AT` or `A-T`. Tokens that are not two distinct letters are skipped, as is
/// any pair reusing a letter from an earlier pair.
pub fn parse_plugboard_text(text: &str) -> Vec<(char, char)> {
    let mut used = [false; 26];
    let mut pairs = Vec::new();

    for (a, b) in operator_pairs(text) {
        if used[a as usize] || used[b as usize] {
            tracing::debug!(
                "Skipping conflicting plugboard pair {}{}",
                alphabet::letter(a),
                alphabet::letter(b)
            );
            continue;
        }
        used[a as usize] = true;
        used[b as usize] = true;
        pairs.push((alphabet::letter(a), alphabet::letter(b)));
    }

    pairs
}

/// Parse plugboard pairs typed by an operator, rejecting reused letters
///
/// Same token rules as [`parse_plugboard_text`], but a pair that reuses a
/// letter fails with [`Error::ConflictingPlugboardPair`].
pub fn parse_plugboard_text_strict(text: &str) -> Result<Vec<(char, char)>> {
    let mut used = [false; 26];
    let mut pairs = Vec::new();

    for (a, b) in operator_pairs(text) {
        let (first, second) = (alphabet::letter(a), alphabet::letter(b));
        if let Some(&letter) = [a, b].iter().find(|&&c| used[c as usize]) {
            return Err(Error::ConflictingPlugboardPair {
                first,
                second,
                letter: alphabet::letter(letter),
            });
        }
        used[a as usize] = true;
        used[b as usize] = true;
        pairs.push((first, second));
    }

    Ok(pairs)
}

/// Well-formed operator tokens as index pairs, malformed ones dropped
fn operator_pairs(text: &str) -> impl Iterator<Item = (u8, u8)> + '_ {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/'))
        .filter_map(|token| {
            let letters = strip_pair_noise(token);
            if letters.is_empty() {
                return None;
            }
            let pair = match letters[..] {
                [a, b] => match (alphabet::index_of(a), alphabet::index_of(b)) {
                    (Some(a), Some(b)) if a != b => Some((a, b)),
                    _ => None,
                },
                _ => None,
            };
            if pair.is_none() {
                tracing::debug!("Skipping plugboard token {:?}", token);
            }
            pair
        })
}

// ============================================================================
// Message envelope
// ============================================================================

/// A configuration travelling together with its ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Machine configuration at the start of the message
    pub config: MachineConfig,
    /// The enciphered text, line breaks removed
    pub ciphertext: String,
}

impl Message {
    /// Bundle a configuration with its ciphertext
    pub fn new(config: MachineConfig, ciphertext: impl Into<String>) -> Self {
        let ciphertext: String = ciphertext.into();
        Self {
            config,
            ciphertext: ciphertext.trim().replace(['\r', '\n'], ""),
        }
    }

    /// Run the ciphertext through a fresh machine built from the configuration
    pub fn decrypt(&self) -> Result<String> {
        let mut machine = Machine::new(&self.config)?;
        Ok(machine.encrypt(&self.ciphertext))
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}|{}{}",
            MESSAGE_PREFIX,
            serialize_config(&self.config),
            CIPHERTEXT_MARKER,
            self.ciphertext
        )
    }
}

impl std::str::FromStr for Message {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_message(s)
    }
}

/// Export string for a configuration and its ciphertext
pub fn export(config: &MachineConfig, ciphertext: &str) -> String {
    Message::new(config.clone(), ciphertext).to_string()
}

/// Parse an export string
pub fn parse_message(s: &str) -> Result<Message> {
    let payload = s
        .trim()
        .strip_prefix(MESSAGE_PREFIX)
        .ok_or_else(|| malformed(format!("message must start with {:?}", MESSAGE_PREFIX)))?;

    let (settings, ciphertext) = split_ciphertext(payload)?;
    Ok(Message::new(deserialize(settings)?, ciphertext))
}

fn split_ciphertext(payload: &str) -> Result<(&str, &str)> {
    for separator in ["|CT:", ";CT:"] {
        if let Some(parts) = payload.split_once(separator) {
            return Ok(parts);
        }
    }

    let idx = payload
        .find(CIPHERTEXT_MARKER)
        .ok_or_else(|| malformed("no ciphertext part found"))?;
    let settings = payload[..idx].trim_end_matches(['|', ';']);
    Ok((settings, &payload[idx + CIPHERTEXT_MARKER.len()..]))
}

impl std::fmt::Display for MachineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serialize_config(self))
    }
}

impl std::str::FromStr for MachineConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        deserialize(s)
    }
}
