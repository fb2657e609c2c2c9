#![no_main]

use hf_papers_fuzz::HOST;
use hf_papers_fuzz::models::RawDetails;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(raw) = RawDetails::from_value(value) {
            let details = raw.normalize(HOST);
            let _ = details.abstract_or_summary();
        }
    }
});
