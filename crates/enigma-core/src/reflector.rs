//! The stateless reflector (Umkehrwalze)

use crate::alphabet::LEN;
use crate::catalog::ReflectorId;

/// A fixed, fixed-point-free involution that turns the signal around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    id: ReflectorId,
    wiring: &'static [u8; 26],
}

impl Reflector {
    /// Look up a reflector in the catalog
    pub fn new(id: ReflectorId) -> Self {
        Self {
            id,
            wiring: id.wiring(),
        }
    }

    /// Catalog identity
    pub fn id(&self) -> ReflectorId {
        self.id
    }

    /// Map a contact to its partner
    ///
    /// `c` is reduced modulo 26.
    pub fn reflect(&self, c: u8) -> u8 {
        self.wiring[(c % LEN) as usize]
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new(ReflectorId::default())
    }
}
