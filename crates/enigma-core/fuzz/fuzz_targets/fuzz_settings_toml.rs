//! Fuzz test for settings TOML parsing
//!
//! Tests that settings deserialization handles arbitrary TOML safely.

#![no_main]

use enigma_core::{MachineSettings, Settings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(settings) = toml::from_str::<Settings>(data) {
        let _ = toml::to_string_pretty(&settings);
        // Conversion may reject bad values but must not panic
        let _ = settings.machine.to_config();
    }

    let _: Result<MachineSettings, _> = toml::from_str(data);

    let wrapped = format!("[machine]\n{}", data);
    let _: Result<Settings, _> = toml::from_str(&wrapped);
});
