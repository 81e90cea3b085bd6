//! Error types for the Enigma core library

use thiserror::Error;

/// Main error type for Enigma operations
///
/// Every variant is a construction-time failure. Once a [`Machine`](crate::Machine)
/// exists, encrypting text cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rotor name is not present in the catalog
    #[error("Unknown rotor: {0}")]
    InvalidRotor(String),

    /// Reflector name is not present in the catalog
    #[error("Unknown reflector: {0}")]
    InvalidReflector(String),

    /// Ring setting outside 1..=26
    #[error("Invalid ring setting {0}: must be between 1 and 26")]
    InvalidRingSetting(u8),

    /// Window position is not a letter A-Z
    #[error("Invalid rotor position {0:?}: must be a letter A-Z")]
    InvalidPosition(char),

    /// Plugboard pair contains a character outside A-Z
    #[error("Invalid plugboard letter {0:?}: must be a letter A-Z")]
    InvalidPlugboardLetter(char),

    /// A letter is wired into more than one plugboard pair
    ///
    /// Only reported when strict plugboard checking is requested; the default
    /// plugboard drops the later pair instead.
    #[error("Plugboard pair {first}{second} reuses letter {letter}")]
    ConflictingPlugboardPair {
        /// First letter of the rejected pair
        first: char,
        /// Second letter of the rejected pair
        second: char,
        /// The letter that was already wired
        letter: char,
    },

    /// Settings string is missing required parts or contains unparsable tokens
    #[error("Malformed settings: {0}")]
    MalformedSettings(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using the Enigma error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRotor("VI".to_string());
        assert_eq!(err.to_string(), "Unknown rotor: VI");

        let err = Error::InvalidReflector("C".to_string());
        assert!(err.to_string().contains('C'));

        let err = Error::InvalidRingSetting(27);
        assert!(err.to_string().contains("27"));
        assert!(err.to_string().contains("between 1 and 26"));
    }

    #[test]
    fn test_conflicting_pair_display() {
        let err = Error::ConflictingPlugboardPair {
            first: 'A',
            second: 'C',
            letter: 'A',
        };
        let msg = err.to_string();
        assert!(msg.contains("AC"));
        assert!(msg.contains("reuses letter A"));
    }

    #[test]
    fn test_malformed_settings_display() {
        let err = Error::MalformedSettings("missing ENIGMA| prefix".to_string());
        assert_eq!(err.to_string(), "Malformed settings: missing ENIGMA| prefix");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::InvalidPosition('1'), Error::InvalidPosition('1'));
        assert_ne!(Error::InvalidPosition('1'), Error::InvalidPlugboardLetter('1'));
    }
}
