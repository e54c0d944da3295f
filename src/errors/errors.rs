use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at line {}", position.line)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal is never closed, add a matching {}",
                quote
            )),
            ErrorImpl::UnterminatedComment { opener } => {
                let closer = if opener == "{" { "}" } else { "*)" };
                ErrorTip::Suggestion(format!(
                    "Comment opened with `{}` is never closed, add `{}`",
                    opener, closer
                ))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal opened with {quote:?}")]
    UnterminatedString { quote: char },
    #[error("unterminated comment opened with {opener:?}")]
    UnterminatedComment { opener: String },
}
