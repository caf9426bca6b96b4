//! Code generation for the ISO-3166 country table.
//!
//! Loads the country dataset, sorts it by alpha-2 code and renders it into
//! a fixed-size Rust array literal using Handlebars templates.
//!
//! # Examples
//!
//! ```
//! use iso_codegen::{RustArrayRenderer, TableRenderer};
//! use iso_core::{CountryRecord, CountryTable};
//!
//! let table = CountryTable::from_records(vec![
//!     CountryRecord::new("US", "United States"),
//!     CountryRecord::new("AD", "Andorra"),
//! ]);
//!
//! let code = RustArrayRenderer::new().unwrap().render(&table).unwrap();
//! assert!(code.contains("; 2] = ["));
//! assert!(code.find("\"AD\"").unwrap() < code.find("\"US\"").unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod loader;
pub mod renderer;
pub mod template_engine;

pub use generator::{GenerationSummary, TableGenerator};
pub use renderer::{RustArrayRenderer, TableRenderer};
