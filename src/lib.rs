//! Tallyfin - cross-referenced metadata reports for media servers
//!
//! This library crate exposes the report engine for integration testing.

pub mod config;
pub mod render;
pub mod reports;
