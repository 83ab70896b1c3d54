//! Byte-order mark classification.

use encoding_rs::Encoding;
use std::fmt;

/// Key reported for files that carry no byte-order mark.
pub const NO_BOM_KEY: &str = "utf-8";

/// Byte-order marks recognised by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bom {
    Utf8,
    Utf16Be,
    Utf16Le,
}

impl Bom {
    /// Detection priority. UTF-8 first, then big endian, then little endian.
    pub const ALL: [Self; 3] = [Self::Utf8, Self::Utf16Be, Self::Utf16Le];

    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16Le => &[0xFF, 0xFE],
        }
    }

    /// Encoding the remainder of the file is decoded with.
    #[must_use]
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Utf16Be => encoding_rs::UTF_16BE,
            Self::Utf16Le => encoding_rs::UTF_16LE,
        }
    }

    /// Short name printed by `--decode`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8-sig",
            Self::Utf16Be => "utf-16-be",
            Self::Utf16Le => "utf-16-le",
        }
    }
}

impl fmt::Display for Bom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Classify the byte-order mark at the start of `buf`.
#[must_use]
pub fn detect(buf: &[u8]) -> Option<Bom> {
    Bom::ALL.into_iter().find(|bom| buf.starts_with(bom.bytes()))
}

/// Key for a detection result, `utf-8` when there is no mark.
#[must_use]
pub fn key(bom: Option<Bom>) -> &'static str {
    bom.map_or(NO_BOM_KEY, Bom::key)
}
