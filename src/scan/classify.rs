//! Lightweight file classification
//!
//! Two cheap heuristics: a case-sensitive extension allowlist for source
//! code, and a null-byte sniff for binary content.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many leading bytes the binary sniff inspects.
pub const SNIFF_LEN: usize = 1024;

/// File name suffixes treated as source code. Matched with `ends_with`,
/// so compound suffixes like `.cmake.in` work.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".py", ".rs", ".c", ".cpp", ".h", ".hpp", ".go", ".vue", ".cs", ".ts", ".asm", ".bat",
    ".cc", ".cxx", ".h++", ".hh", ".hxx", ".inc", ".inl", ".cmake", ".cmake.in", ".css",
    ".coffee", ".lisp", ".cu", ".cuh", ".d", ".dart", ".diff", ".dockerfile", ".djs", ".dylan",
    ".emacs", ".em", ".emberscript", ".es", ".escript", ".html", ".php", ".java", ".js", ".sjs",
    ".ssjs", ".ipynb", ".m", ".mm", ".swift", ".md", ".sh", ".rb",
];

/// Returns true if the file name carries an allowlisted source suffix.
///
/// Pure function of the name; content is never inspected.
pub fn is_source_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Returns true if a null byte appears in the first [`SNIFF_LEN`] bytes.
///
/// Read failures are returned to the caller, which decides whether to skip
/// the file or abort.
pub fn is_binary_file(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; SNIFF_LEN];
    let mut filled = 0;
    // A single read() may return short on pipes and some filesystems
    while filled < SNIFF_LEN {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(memchr::memchr(0, &buf[..filled]).is_some())
}
