//! HTTP client and history fetching for the quotecache price history cache.
//!
//! This crate provides the remote half of the system:
//!
//! - [`url::chart_url`] - Constructs Yahoo Finance chart API URLs
//! - [`YahooClient`] - HTTP client requesting the full available history
//! - [`HistoryProvider`] - Trait the cache loader fetches through

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quotecache/quotecache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod client;
mod provider;
pub mod url;

pub use client::{ClientConfig, FetchError, YahooClient};
pub use provider::HistoryProvider;
