//! # Enigma Core
//!
//! Core library for simulating the three-rotor Enigma I cipher machine.
//!
//! ## Modules
//!
//! - `alphabet`: Letter/index conversion over the 26-letter ring
//! - `catalog`: Historical rotor (I-V) and reflector (B) wirings
//! - `rotor`, `reflector`, `plugboard`: The machine's components
//! - `machine`: Stepping (including the double-step) and the signal path
//! - `config`: Machine configuration (the daily key)
//! - `codec`: Compact settings string and the `ENIGMA|...|CT:...` envelope
//! - `settings`: Persistent user settings from configuration file
//! - `error`: Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use enigma_core::{Machine, MachineConfig, RotorId};
//!
//! let config = MachineConfig::new()
//!     .rotors([RotorId::I, RotorId::II, RotorId::III])
//!     .positions(['A', 'A', 'A'])
//!     .rings([1, 1, 1]);
//!
//! let ciphertext = Machine::new(&config)?.encrypt("HELLO WORLD");
//! assert_eq!(ciphertext, "ILBDA AMTAZ");
//!
//! // The machine is reciprocal: a fresh machine with the same key decrypts.
//! let plaintext = Machine::new(&config)?.encrypt(&ciphertext);
//! assert_eq!(plaintext, "HELLO WORLD");
//! # Ok::<(), enigma_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod settings;

pub use catalog::{ReflectorId, RotorId};
pub use codec::{deserialize, export, parse_message, serialize, serialize_config, Message};
pub use config::MachineConfig;
pub use error::{Error, Result};
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::{BehaviorSettings, MachineSettings, Settings, SettingsError};
