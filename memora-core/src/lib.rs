//! # Memora: analytics for tradable memories
//!
//! Memora treats user memories as digital assets and serves a handful of
//! analytics views over them. This crate holds the domain side, free of any
//! HTTP concern:
//!
//! - [`catalog`]: the read-only memory catalog and its provider trait
//! - [`similarity`]: composite similarity ranking between memories
//! - [`validator`]: synthetic validator performance profiles
//! - [`value_history`]: synthetic 60-day price series
//!
//! The synthetic views draw from [`generator::SeededRandom`], seeded with the
//! digits of the requested identifier ([`seed`]). In the default
//! [`config::GenerationMode::Hybrid`] mode fresh entropy is mixed into every
//! draw, so the same identifier produces different numbers on each call;
//! [`config::GenerationMode::Seeded`] makes the output reproducible.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod seed;
pub mod series;
pub mod similarity;
pub mod validator;
pub mod value_history;

pub use error::{Error, InternalResult};
