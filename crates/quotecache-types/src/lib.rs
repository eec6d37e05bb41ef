//! Core types for the quotecache price history cache.
//!
//! This crate provides the fundamental data structures used throughout
//! quotecache:
//!
//! - [`Ticker`] - A validated ticker symbol
//! - [`PriceBar`] - A single day of price history for one ticker
//! - [`PriceSeries`] - A date-ordered, date-keyed table of price bars
//! - [`QuoteCacheError`] - The shared error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quotecache/quotecache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod series;
mod ticker;

pub use bar::PriceBar;
pub use error::{QuoteCacheError, Result, TickerError};
pub use series::PriceSeries;
pub use ticker::Ticker;
