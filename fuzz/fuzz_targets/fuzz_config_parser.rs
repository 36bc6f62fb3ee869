//! Fuzz target for `mergesignal.toml` parsing and resolution.
//!
//! Goal: parsing and branch pattern compilation should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = mergesignal_settings::parse_config_toml(text)
    {
        let _ = mergesignal_settings::resolve_config(cfg);
    }
});
