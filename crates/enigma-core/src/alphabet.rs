//! The 26-letter ring every component works over
//!
//! Letters are represented internally as indices `0..26` (`A` = 0). All
//! position and offset arithmetic is modulo [`LEN`].

/// Number of symbols on the ring
pub const LEN: u8 = 26;

/// The alphabet in index order
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Index of an ASCII letter, case-insensitive
///
/// Returns `None` for anything outside `A-Z` / `a-z`.
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter for an index, wrapping modulo 26
pub fn letter(index: u8) -> char {
    (b'A' + index % LEN) as char
}

/// Parse a 26-letter uppercase wiring string into indices
///
/// Only used on catalog tables; a malformed table fails const evaluation.
pub(crate) const fn wiring(table: &str) -> [u8; 26] {
    let bytes = table.as_bytes();
    let mut out = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        out[i] = bytes[i] - b'A';
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('z'), Some(25));
        assert_eq!(index_of('m'), Some(12));
        assert_eq!(index_of(' '), None);
        assert_eq!(index_of('1'), None);
        assert_eq!(index_of('Ä'), None);
    }

    #[test]
    fn test_letter_wraps() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(25), 'Z');
        assert_eq!(letter(26), 'A');
        assert_eq!(letter(53), 'B');
    }

    #[test]
    fn test_every_letter_roundtrips() {
        for (i, c) in LETTERS.chars().enumerate() {
            assert_eq!(index_of(c), Some(i as u8));
            assert_eq!(letter(i as u8), c);
        }
    }

    #[test]
    fn test_wiring_table() {
        let table = wiring("BADCFEHGJILKNMPORQTSVUXWZY");
        assert_eq!(table[0], 1);
        assert_eq!(table[1], 0);
        assert_eq!(table[25], 24);
    }
}
