//! Environment configuration and logging for verifier binaries and tests.

pub mod env;
mod logger;

pub use logger::*;
