use std::fmt;

/// What to do with each text file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// Re-encode to UTF-8 and rewrite line endings.
    #[default]
    Unixize,
    /// Re-encode only.
    Recode,
    /// Report the byte-order mark, change nothing.
    Decode,
}

/// Target line terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
    /// Leave line terminators as they are.
    Unchanged,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::Crlf => "CRLF",
            Self::Unchanged => "UNCHANGED",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
