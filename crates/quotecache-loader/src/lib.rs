//! Cache resolver for the quotecache price history cache.
//!
//! This crate ties the store and fetch layers together:
//!
//! - [`PriceLoader`] - Serve from cache or fetch-and-rewrite, by file age
//! - [`LoaderConfig`] - Data directory, staleness threshold, client settings
//! - [`get_prices`] - One-call convenience entry point

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quotecache/quotecache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod loader;

pub use loader::{DEFAULT_DATA_DIR, DEFAULT_MAX_AGE, LoaderConfig, PriceLoader, get_prices};
