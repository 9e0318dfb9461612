//! Line scanning for outline text.
//!
//! An outline is split on `\n` only. Everything else, including `\r` and
//! trailing empty lines, is kept so that joining the lines reproduces the
//! original text byte for byte.

/// Indent marker used when none is configured
pub const DEFAULT_INDENT: char = '\t';

/// One non-blank line of an outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine<'a> {
    /// Zero-based index in the unfiltered line sequence
    pub index: usize,
    /// Number of leading indent markers
    pub depth: usize,
    /// Line content with surrounding whitespace removed
    pub label: &'a str,
}

/// Split outline text into raw lines
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Inverse of [`split_lines`]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Count leading indent markers of a raw line
pub fn indent_depth(line: &str, indent: char) -> usize {
    line.chars().take_while(|&c| c == indent).count()
}

/// Scan outline text into its non-blank lines.
///
/// Blank lines (empty after trimming) are skipped but still consume an index.
pub fn tokenize(text: &str, indent: char) -> Vec<OutlineLine<'_>> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let label = line.trim();
            if label.is_empty() {
                return None;
            }
            Some(OutlineLine {
                index,
                depth: indent_depth(line, indent),
                label,
            })
        })
        .collect()
}
