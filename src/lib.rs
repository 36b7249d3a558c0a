//! # Tryout
//!
//! Command-line client for the tryout quiz platform, built on `tryout-core`.

pub mod cli;
pub mod commands;
pub mod http;

pub use tryout_core;
