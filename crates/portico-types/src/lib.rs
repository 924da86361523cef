//! Foundation types for Portico.
//!
//! Platform-agnostic types shared by the Portico crates: the error type,
//! URL query-string decoding, the static registry of known browser engines,
//! and extension/app descriptor parsing.

pub mod descriptor;
pub mod engine;
pub mod error;
pub mod query;
