//! Core types, configuration and errors for the ISO-3166 table generator.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Domain types (`CountryRecord`, `CountryTable`)
//! - Error hierarchy with contextual information
//! - Generator configuration (`GeneratorConfig`, `OutputTarget`)
//! - CLI exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{
    DEFAULT_ARRAY_NAME, DEFAULT_ENTRIES_PER_LINE, DEFAULT_INPUT_PATH, GeneratorConfig,
    GeneratorConfigBuilder, OutputTarget,
};
pub use error::{Error, Result};
pub use types::{CountryRecord, CountryTable};
