//! Hugging Face Daily Papers client
//!
//! An async client for the Hugging Face daily papers feed, with the date
//! navigation logic of a browsing front end.
//!
//! # Features
//!
//! - **Tolerant normalization**: wrapped and bare listing records, bare or
//!   wrapped search results, missing or mistyped fields
//! - **Derived views**: trending (by upvotes) and recent (by publish date)
//! - **Date navigation**: auto-skip past empty days, bounded by today and a
//!   fixed floor date, with superseded responses discarded
//! - **Fixed timeout**: one 15 second budget per request, no retries
//!
//! # Example
//!
//! ```no_run
//! use hf_daily_papers::{client::PapersClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PapersClient::new(Config::from_env()?)?;
//!
//!     for paper in client.get_trending_papers(10).await? {
//!         println!("{} ({} upvotes)", paper.title, paper.upvotes);
//!     }
//!     Ok(())
//! }
//! ```

pub mod arxiv;
pub mod client;
pub mod config;
pub mod digest;
pub mod error;
pub mod formatters;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod views;

pub use client::{PapersApi, PapersClient};
pub use config::Config;
pub use error::{ClientError, ClientResult, ErrorKind};
