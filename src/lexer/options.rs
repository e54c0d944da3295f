/// How the scanner advances its line counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Only the `//` end-of-line marker bumps the line. Matches the output
    /// of the reference tool.
    #[default]
    Marker,
    /// Every `\n` consumed by the scanner bumps the line, including those
    /// inside comments and string literals. `//` is still dropped silently.
    Newline,
}

/// What happens to text that no pattern accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    #[default]
    Skip,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerOptions {
    pub line_mode: LineMode,
    pub unmatched: UnmatchedPolicy,
}

impl LexerOptions {
    /// Newline counting and hard errors on unrecognised input.
    pub fn strict() -> Self {
        LexerOptions {
            line_mode: LineMode::Newline,
            unmatched: UnmatchedPolicy::Error,
        }
    }

    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    pub fn with_unmatched(mut self, unmatched: UnmatchedPolicy) -> Self {
        self.unmatched = unmatched;
        self
    }
}
