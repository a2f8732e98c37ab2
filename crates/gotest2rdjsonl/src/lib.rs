//! gotest2rdjsonl library
//!
//! This module exports the command's configuration and runner for use in
//! integration tests.

pub mod app;
pub mod config;
