#![no_main]

use hf_papers_fuzz::models::{PaperDetails, resolve_lookup_id};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(param) = std::str::from_utf8(data) else {
        return;
    };

    // Route params arrive as serialized papers; merge them over an empty fetch
    if let Ok(held) = serde_json::from_str::<serde_json::Value>(param) {
        let _ = PaperDetails::default().merged_under(&held);
    }
    if let Ok(details) = PaperDetails::from_route_param(param) {
        let _ = resolve_lookup_id(Some(&details.paper), None);
    }
});
