//! Domain model and watch-progress engine for the watchlist.
//!
//! Nothing in this crate performs I/O: callers load a collection, hand it to
//! [`progress`], and persist whatever comes back.

pub mod error;
pub mod progress;
pub mod types;
