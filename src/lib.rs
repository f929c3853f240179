//! Loadfile Converter Library
//!
//! This library provides the core functionality for the loadfile CLI tool:
//! encoding detection, .DAT loadfile parsing, record construction, and
//! CSV/JSON emission.

pub mod cli;
pub mod convert;
pub mod dat;
pub mod error;
pub mod output;
