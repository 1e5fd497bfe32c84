//! Infrastructure adapters for configuration and bundled assets.

pub mod config;
