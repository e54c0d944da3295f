use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    options::{LexerOptions, LineMode, UnmatchedPolicy},
    patterns::{PatternMatch, COMMENT_PATTERN, PATTERNS},
    tokens::{Token, TokenKind, TOKEN_LOOKUP},
};

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
    options: LexerOptions,
    // Set once no closer exists past the cursor; the cursor only moves forward.
    brace_unclosed: bool,
    star_unclosed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, options: LexerOptions) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            options,
            brace_unclosed: false,
            star_unclosed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        if let LineMode::Newline = self.options.line_mode {
            let consumed = &self.source[self.pos..self.pos + n];
            self.line += consumed.matches('\n').count() as u32;
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
        }
    }

    /// Consumes everything and returns the tokens, or the first error if the
    /// options ask for unmatched input to be rejected.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            self.step()?;
        }

        Ok(self.tokens)
    }

    fn step(&mut self) -> Result<(), Error> {
        let remaining = self.remainder();
        let skip_comment = self.comment_cannot_close(remaining);
        let found = PATTERNS
            .iter()
            .filter(|pattern| !(skip_comment && pattern.name() == COMMENT_PATTERN))
            .find_map(|pattern| pattern.try_match(remaining));

        match found {
            // The comment pattern did not close, so `(*` fell through to punctuation.
            Some((_, PatternMatch::Punctuation("("))) if remaining.starts_with("(*") && self.is_strict() => {
                Err(self.error(ErrorImpl::UnterminatedComment {
                    opener: String::from("(*"),
                }))
            }
            Some((len, matched)) => {
                self.handle(&remaining[..len], matched)?;
                self.advance_n(len);
                Ok(())
            }
            None => self.skip_unmatched(),
        }
    }

    /// True when `remaining` opens a comment that has no closer anywhere
    /// after it. A failed search is remembered, so each closer is looked for
    /// in vain at most once per call.
    fn comment_cannot_close(&mut self, remaining: &str) -> bool {
        if remaining.starts_with('{') {
            if !self.brace_unclosed && !remaining.contains('}') {
                self.brace_unclosed = true;
            }
            self.brace_unclosed
        } else if let Some(body) = remaining.strip_prefix("(*") {
            if !self.star_unclosed && !body.contains("*)") {
                self.star_unclosed = true;
            }
            self.star_unclosed
        } else {
            false
        }
    }

    fn handle(&mut self, text: &'a str, matched: PatternMatch<'a>) -> Result<(), Error> {
        match matched {
            PatternMatch::Whitespace | PatternMatch::Comment => {}
            PatternMatch::EndOfLine => {
                if let LineMode::Marker = self.options.line_mode {
                    self.line += 1;
                }
            }
            PatternMatch::Identifier => {
                let kind = TOKEN_LOOKUP
                    .get(text)
                    .copied()
                    .unwrap_or(TokenKind::Identifier);
                self.emit(kind, text, None);
            }
            PatternMatch::Nil => self.emit(TokenKind::Nil, text, None),
            PatternMatch::IntLiteral => self.emit(TokenKind::IntLiteral, text, Some(text)),
            PatternMatch::RealLiteral => self.emit(TokenKind::RealLiteral, text, Some(text)),
            PatternMatch::StringLiteral(contents) => {
                self.emit(TokenKind::StringLiteral, text, Some(contents))
            }
            PatternMatch::Operator(symbol) | PatternMatch::Punctuation(symbol) => {
                match TOKEN_LOOKUP.get(symbol) {
                    Some(kind) => self.emit(*kind, symbol, None),
                    None => self.reject(ErrorImpl::UnrecognisedToken {
                        token: String::from(symbol),
                    })?,
                }
            }
        }

        Ok(())
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str, value: Option<&str>) {
        let line = self.line;
        self.push(MK_TOKEN!(kind, lexeme, line, value));
    }

    fn skip_unmatched(&mut self) -> Result<(), Error> {
        let Some(ch) = self.at() else {
            return Ok(());
        };

        let error = match ch {
            '\'' | '"' => ErrorImpl::UnterminatedString { quote: ch },
            '{' => ErrorImpl::UnterminatedComment {
                opener: String::from("{"),
            },
            _ => ErrorImpl::UnrecognisedToken {
                token: ch.to_string(),
            },
        };
        self.reject(error)?;

        self.advance_n(ch.len_utf8());
        Ok(())
    }

    fn reject(&self, error: ErrorImpl) -> Result<(), Error> {
        match self.options.unmatched {
            UnmatchedPolicy::Skip => Ok(()),
            UnmatchedPolicy::Error => Err(self.error(error)),
        }
    }

    fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.position())
    }

    fn is_strict(&self) -> bool {
        self.options.unmatched == UnmatchedPolicy::Error
    }
}

/// Tokenizes `source` the way the reference tool does: lines advance on the
/// `//` marker only and unrecognised text is dropped without a trace.
pub fn tokenize(source: &str) -> Vec<Token> {
    // The skip policy never reports, so there is no error to lose here.
    tokenize_with(source, &LexerOptions::default()).unwrap_or_default()
}

pub fn tokenize_with(source: &str, options: &LexerOptions) -> Result<Vec<Token>, Error> {
    Lexer::new(source, *options).tokenize()
}
