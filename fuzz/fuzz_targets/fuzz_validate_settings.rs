//! Fuzz target for settings validation.
//!
//! Goal: settings validation should **never panic** on any input, including hostile
//! regular expressions. It always returns a response.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate_settings
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let response = labelguard_app::validate_settings(data);
    assert!(response.valid || response.message.is_some());
});
