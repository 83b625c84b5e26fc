#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod parsers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
