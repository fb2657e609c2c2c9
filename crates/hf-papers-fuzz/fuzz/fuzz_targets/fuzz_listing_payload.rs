#![no_main]

use hf_papers_fuzz::HOST;
use hf_papers_fuzz::models::ListingPayload;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding may fail; normalizing anything that decodes must not panic
    if let Ok(payload) = serde_json::from_slice::<ListingPayload>(data) {
        for paper in payload.normalize(HOST) {
            let _ = paper.published();
        }
    }
});
