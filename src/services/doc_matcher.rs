//! Association between issues and numbered documentation files.
//!
//! A document belongs to an issue when the numeric prefix of its filename
//! (the text before the first `-`) equals the issue number, so
//! `0042-new-construct.md` belongs to issue 42.

/// Numeric prefix of a doc filename.
///
/// Reads the leading ASCII digits of the segment before the first `-`.
/// Returns `None` when that segment does not start with a digit.
pub fn doc_number(filename: &str) -> Option<u64> {
    let prefix = filename.split('-').next().unwrap_or_default();
    let digits_end = prefix
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(prefix.len());
    prefix[..digits_end].parse().ok()
}

/// First filename in listing order whose prefix equals `number`.
///
/// Several files sharing a prefix is ambiguous; the first one listed wins.
pub fn find_doc_file(files: &[String], number: u64) -> Option<&str> {
    files
        .iter()
        .map(String::as_str)
        .find(|file| doc_number(file) == Some(number))
}
