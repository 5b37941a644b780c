//! Totient-rs library: application logic for the totient range benchmark.

pub mod app;
pub mod config;
pub mod errors;
