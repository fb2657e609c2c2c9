//! Fuzzing library for hf-daily-papers.
//!
//! Targets feed arbitrary bytes through the same decode and normalize path
//! the client uses for upstream responses and navigation route params.
//!
//! # Usage
//!
//! ```bash
//! cd crates/hf-papers-fuzz
//! cargo +nightly fuzz run fuzz_listing_payload -- -max_total_time=60
//! ```

pub use hf_daily_papers::models;

/// Asset host used when normalizing fuzzed records.
pub const HOST: &str = "https://huggingface.co";
