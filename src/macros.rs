//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Compiles an anchored catalog pattern with its handler
//!
//! These macros reduce boilerplate in the pattern catalog and the driver.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$line` - The line the token starts on
/// * `$value` - Optional raw literal text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42", 1, Some("42"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $value:expr) => {
        Token {
            lexeme: String::from($lexeme),
            kind: $kind,
            line: $line,
            value: $value.map(String::from),
        }
    };
}

/// Compiles a catalog pattern anchored at the start of the remaining input.
///
/// The expression is wrapped in `^(?:...)` so alternations inside it stay
/// anchored as a whole.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("integer", r"[0-9]+", integer_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($name:literal, $regex:literal, $handler:expr) => {
        RegexPattern {
            name: $name,
            regex: Regex::new(concat!("^(?:", $regex, ")"))
                .expect(concat!("invalid catalog pattern: ", $regex)),
            handler: $handler,
        }
    };
}
