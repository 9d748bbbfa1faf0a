//! Error types for STF Exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a project description or catalog.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project description is not valid JSON for the model.
    #[error("invalid project description '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The luminaire catalog could not be read as CSV.
    #[error("invalid luminaire catalog '{path}': {source}")]
    Catalog { path: PathBuf, source: csv::Error },
}

/// Errors raised while parsing a host-formatted quantity such as `"18 W"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The value was empty or whitespace only.
    #[error("empty quantity")]
    Empty,

    /// The value has no unit suffix after the number.
    #[error("missing unit suffix in '{value}'")]
    MissingUnit { value: String },

    /// Extra text after the unit suffix.
    #[error("malformed quantity '{value}'")]
    Malformed { value: String },

    /// The numeric part is not a decimal number.
    #[error("invalid number in '{value}'")]
    InvalidNumber { value: String },

    /// The unit suffix is not one of the accepted units.
    #[error("unexpected unit '{found}' in '{value}', expected one of {expected:?}")]
    UnexpectedUnit {
        value: String,
        found: String,
        expected: &'static [&'static str],
    },
}

/// Errors that can occur when serializing a project to STF.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The host adapter could not retrieve a room.
    #[error("room #{index} '{name}' could not be retrieved: {reason}")]
    RoomRetrieval {
        index: usize,
        name: String,
        reason: String,
    },

    /// A luminaire type with a flux value has no electrical load.
    #[error("luminaire type '{luminaire}' has flux but no load")]
    MissingLoad { luminaire: String },

    /// A load or flux value could not be parsed.
    #[error("luminaire type '{luminaire}' has invalid {field}: {source}")]
    Quantity {
        luminaire: String,
        field: &'static str,
        source: QuantityError,
    },
}

/// Errors that can occur when writing an STF file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to move the finished file into place.
    #[error("failed to save file '{path}': {source}")]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}
