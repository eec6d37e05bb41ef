//! On-disk CSV cache for the quotecache price history cache.
//!
//! This crate provides the persistence layer:
//!
//! - [`PriceCache`] - Per-ticker CSV files under a data directory
//! - [`CacheState`] - Missing / fresh / stale, judged by file mtime
//! - [`is_expired`] - The staleness predicate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quotecache/quotecache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod csv;

pub use cache::{CacheState, PriceCache, is_expired};
