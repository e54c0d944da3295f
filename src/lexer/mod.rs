//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Pascal-like
//! source text into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern catalog
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking through the `//` marker or physical newlines
//! - Comments, whitespace and unrecognised input

pub mod lexer;
pub mod options;
pub mod patterns;
pub mod tokens;
