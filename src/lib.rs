//! Prefpair: Pairwise Media Preference Collection
//!
//! Samples pairs of media items from two or more group directories, walks a
//! rater through them one pair at a time, and keeps every A/B decision in a
//! JSON document that is rewritten on each change.

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod session;
pub mod store;
pub mod tooling;
pub mod types;
pub mod views;
