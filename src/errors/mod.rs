//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by both pipeline
//! stages. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - Error naming and suggestion tips for rendering

pub mod errors;
