use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_PATTERN;

/// What a catalog pattern recognised at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch<'a> {
    Whitespace,
    Identifier,
    Nil,
    IntLiteral,
    RealLiteral,
    /// Text between the quotes.
    StringLiteral(&'a str),
    Comment,
    EndOfLine,
    Operator(&'a str),
    Punctuation(&'a str),
}

pub type RegexHandler = fn(&str) -> PatternMatch<'_>;

pub struct RegexPattern {
    name: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Matches at the very start of `input`, returning the consumed length.
    pub fn try_match<'a>(&self, input: &'a str) -> Option<(usize, PatternMatch<'a>)> {
        let found = self.regex.find(input)?;
        Some((found.end(), (self.handler)(found.as_str())))
    }
}

/// Name of the catalog entry for `{ }` and `(* *)` comments.
pub const COMMENT_PATTERN: &str = "comment";

lazy_static! {
    /// The pattern catalog in priority order. The first pattern that matches
    /// at the cursor wins.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!("whitespace", r"\s+", skip_handler),
        MK_PATTERN!("identifier", r"[A-Za-z_]\w*", symbol_handler),
        // Real before integer so `3.14` is not split at the point.
        MK_PATTERN!("real", r"[0-9]+\.[0-9]+(?:e[+-]?[0-9]+)?", real_handler),
        MK_PATTERN!("integer", r"[0-9]+", integer_handler),
        MK_PATTERN!("string", r#"'[^']*'|"[^"]*""#, string_handler),
        MK_PATTERN!("comment", r"\{[^}]*\}|\(\*(?s:.*?)\*\)", comment_handler),
        // Before the operators, otherwise `//` lexes as two divisions.
        MK_PATTERN!("end_of_line", r"//", end_of_line_handler),
        MK_PATTERN!("operator", r":=|<>|<=|>=|\.\.|[-+*/=<>]", operator_handler),
        MK_PATTERN!("punctuation", r"[()\[\],;.]", punctuation_handler),
    ];
}

fn skip_handler(_text: &str) -> PatternMatch<'_> {
    PatternMatch::Whitespace
}

fn symbol_handler(text: &str) -> PatternMatch<'_> {
    if text == "nil" {
        PatternMatch::Nil
    } else {
        PatternMatch::Identifier
    }
}

fn real_handler(_text: &str) -> PatternMatch<'_> {
    PatternMatch::RealLiteral
}

fn integer_handler(_text: &str) -> PatternMatch<'_> {
    PatternMatch::IntLiteral
}

fn string_handler(text: &str) -> PatternMatch<'_> {
    // Both quote characters are one byte wide.
    PatternMatch::StringLiteral(&text[1..text.len() - 1])
}

fn comment_handler(_text: &str) -> PatternMatch<'_> {
    PatternMatch::Comment
}

fn end_of_line_handler(_text: &str) -> PatternMatch<'_> {
    PatternMatch::EndOfLine
}

fn operator_handler(text: &str) -> PatternMatch<'_> {
    PatternMatch::Operator(text)
}

fn punctuation_handler(text: &str) -> PatternMatch<'_> {
    PatternMatch::Punctuation(text)
}
