//! Error types and error handling for the lexer.
//!
//! This module defines the errors reported in strict mode. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for unrecognised or unterminated input
//! - Helpful error messages and suggestions

pub mod errors;
