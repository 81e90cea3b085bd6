//! Fuzz test for settings string and message parsing
//!
//! Arbitrary input must never panic. Anything that parses must serialize
//! back to a string that parses to the same value, and must build a machine.

#![no_main]

use enigma_core::{codec, Machine, MachineConfig, Message, Plugboard};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(config) = codec::deserialize(data) {
        let again: MachineConfig = config.to_string().parse().expect("re-parse settings");
        assert_eq!(again, config);

        let mut machine = Machine::new(&config).expect("parsed config builds");
        let _ = machine.encrypt(data);
    }

    if let Ok(message) = data.parse::<Message>() {
        let again: Message = message.to_string().parse().expect("re-parse message");
        assert_eq!(again.config, message.config);
        let _ = message.decrypt();
    }

    // Operator plugboard text is lenient and must always yield a usable board
    let pairs = codec::parse_plugboard_text(data);
    assert!(Plugboard::strict(&pairs).is_ok());
});
