//! # STF Exporter
//!
//! Writes building rooms and lighting-fixture placement to STF, the
//! section-based `key=value` text format read by DIALux.
//!
//! ## Features
//!
//! - Host-agnostic project model (rooms, doors, luminaire types and instances)
//! - Feet to meter conversion and locale-independent number formatting
//! - RAII guard that holds host unit settings in STF conventions during export
//! - Project descriptions from JSON, luminaire catalogs from CSV
//!
//! ## Example
//!
//! ```no_run
//! use stf_exporter::export::{write_stf, LineEnding};
//! use stf_exporter::parser::load_project;
//! use stf_exporter::stf::{export_project, SerializeOptions};
//!
//! let mut file = load_project("project.json")?;
//! let doc = export_project(&mut file.host_settings, &file.project, &SerializeOptions::default())?;
//! write_stf(&doc, "project.stf", LineEnding::Lf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod export;
pub mod interpolation;
pub mod model;
pub mod parser;
pub mod stf;
pub mod units;
