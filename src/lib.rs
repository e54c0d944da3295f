#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::{
    lexer::{tokenize, tokenize_with},
    options::{LexerOptions, LineMode, UnmatchedPolicy},
    tokens::{Token, TokenFamily, TokenKind},
};

/// Byte offset into the source plus the line the lexer was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
}

/// Finds the physical line holding byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Renders tokens one per line as `<line>\t<kind>\t<lexeme>`.
pub fn dump_tokens(tokens: &[Token], use_codes: bool) -> String {
    let mut out = String::new();

    for token in tokens {
        let kind = if use_codes {
            token.kind.code().to_string()
        } else {
            token.kind.to_string()
        };
        let _ = writeln!(out, "{}\t{}\t{}", token.line, kind, token.lexeme);
    }

    out
}

/// Formats `error` against the source it came from.
///
/// ```text
/// Error: UnterminatedString (String literal is never closed, add a matching ')
/// -> prog.pas
///   |
/// 3 | writeln('hello);
///   | --------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().offset)
    else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::{errors::errors::ErrorImpl, Position};

    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "program demo;\nbegin\n  x := 1\nend.\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "program demo;\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 22).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "  x := 1\n");
        assert_eq!(line_pos, 2);

        assert!(get_line_at_position(source, source.len()).is_none());
    }

    #[test]
    fn test_dump_tokens() {
        let tokens = tokenize("x := 1");

        assert_eq!(dump_tokens(&tokens, false), "1\tIdentifier\tx\n1\tAssign\t:=\n1\tIntLiteral\t1\n");
        assert_eq!(dump_tokens(&tokens, true), "1\tID\tx\n1\tOP_ATRIB\t:=\n1\tLIT_INT\t1\n");
    }

    #[test]
    fn test_format_error() {
        let source = "begin\n    x := @\nend";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position { offset: 15, line: 2 },
        );

        let rendered = format_error(&error, source, "demo.pas");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> demo.pas");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := @");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_format_error_caret_after_unicode() {
        let source = "  café := @";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position { offset: 11, line: 1 },
        );

        let rendered = format_error(&error, source, "demo.pas");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "1 | café := @");
        assert_eq!(lines[4], "  | --------^");
    }
}
