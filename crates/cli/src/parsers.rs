/// Byte count with an optional binary suffix (e.g. 64K, 1MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub usize);

impl std::str::FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: usize = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        let size = num
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Size too large: {s}"))?;
        if size == 0 {
            return Err("size must be at least 1 byte".to_string());
        }
        Ok(Self(size))
    }
}

fn parse_with_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
        (&["b"], 1),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

/// Parse a file extension, accepting an optional leading dot.
///
/// # Errors
/// Returns an error for an empty extension or one containing a path separator.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err("extension must not be empty".to_string());
    }
    if ext.contains(['/', '\\']) {
        return Err(format!("invalid extension: {s}"));
    }
    Ok(ext.to_string())
}
