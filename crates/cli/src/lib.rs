//! br CLI library
//!
//! This module exports the CLI components for use in integration tests.

pub mod commands;
pub mod discovery;
pub mod engine;
pub mod output;
