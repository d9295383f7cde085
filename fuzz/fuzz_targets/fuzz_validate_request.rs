//! Fuzz target for request evaluation.
//!
//! Goal: `validate` should **never panic** on any payload. Rejections must always carry a
//! message.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate_request
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let response = labelguard_app::validate(data);
    assert!(response.allowed || response.message.is_some());
});
