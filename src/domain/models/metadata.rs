//! Metadata recovered from an issue body.
//!
//! RFC issues carry a small hand-written Markdown table:
//!
//! ```text
//! |PR|Champion|
//! |--|--------|
//! |#42|@jane|
//! ```
//!
//! The data row is read positionally: it is the line exactly two below the
//! header, cell 1 is the pull request reference and cell 2 the champion.
//! This is an informal convention, so anything that does not fit yields
//! absent values rather than an error.

/// Prefix identifying the metadata table header line.
pub const METADATA_HEADER: &str = "|PR|Champion|";

const DATA_ROW_OFFSET: usize = 2;
const PR_CELL: usize = 1;
const CHAMPION_CELL: usize = 2;

/// Champion and pull request recovered from an issue body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    /// Champion cell text, trimmed. `None` when empty.
    pub champion: Option<String>,
    /// Pull request number from a `#<n>` reference.
    pub pull_request: Option<u64>,
}

impl ExtractedMetadata {
    /// Parse the metadata row out of an issue body.
    pub fn extract(body: &str) -> Self {
        let lines: Vec<&str> = body.lines().collect();

        let Some(header) = lines
            .iter()
            .position(|line| line.starts_with(METADATA_HEADER))
        else {
            return Self::default();
        };

        let Some(row) = lines.get(header + DATA_ROW_OFFSET) else {
            return Self::default();
        };

        let cells: Vec<&str> = row.split('|').collect();

        Self {
            champion: cells.get(CHAMPION_CELL).and_then(|cell| parse_champion(cell)),
            pull_request: cells.get(PR_CELL).and_then(|cell| parse_pr_reference(cell)),
        }
    }
}

fn parse_champion(cell: &str) -> Option<String> {
    let champion = cell.trim();
    (!champion.is_empty()).then(|| champion.to_string())
}

/// `#42` -> 42. The `#` must be the cell's first character.
fn parse_pr_reference(cell: &str) -> Option<u64> {
    cell.strip_prefix('#')?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|number| *number > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body(lines: &[&str]) -> String {
        lines.join("\n")
    }

    #[test]
    fn test_extract_pr_and_champion() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "|#42|Jane|"]));
        assert_eq!(meta.pull_request, Some(42));
        assert_eq!(meta.champion.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_extract_empty_cells_are_absent() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "|#|  |"]));
        assert_eq!(meta, ExtractedMetadata::default());
    }

    #[test]
    fn test_extract_without_header() {
        assert_eq!(ExtractedMetadata::extract(""), ExtractedMetadata::default());
        assert_eq!(
            ExtractedMetadata::extract("Some description\n|#42|Jane|"),
            ExtractedMetadata::default()
        );
    }

    #[test]
    fn test_extract_header_with_trailing_columns() {
        let meta = ExtractedMetadata::extract(&body(&[
            "Intro text",
            "",
            "|PR|Champion|Notes|",
            "|--|--------|-----|",
            "|#1234|@rix0rrr|bla|",
        ]));
        assert_eq!(meta.pull_request, Some(1234));
        assert_eq!(meta.champion.as_deref(), Some("@rix0rrr"));
    }

    #[test]
    fn test_extract_uses_first_header_only() {
        let meta = ExtractedMetadata::extract(&body(&[
            "|PR|Champion|",
            "---",
            "|#1|First|",
            "|PR|Champion|",
            "---",
            "|#2|Second|",
        ]));
        assert_eq!(meta.pull_request, Some(1));
        assert_eq!(meta.champion.as_deref(), Some("First"));
    }

    #[test]
    fn test_extract_missing_data_row() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---"]));
        assert_eq!(meta, ExtractedMetadata::default());
    }

    #[test]
    fn test_extract_short_row() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "|#9"]));
        assert_eq!(meta.pull_request, Some(9));
        assert_eq!(meta.champion, None);

        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "no pipes"]));
        assert_eq!(meta, ExtractedMetadata::default());
    }

    #[test]
    fn test_extract_pr_without_hash_is_ignored() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "|42|Jane|"]));
        assert_eq!(meta.pull_request, None);
        assert_eq!(meta.champion.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_extract_non_numeric_pr_is_ignored() {
        let meta = ExtractedMetadata::extract(&body(&["|PR|Champion|", "---", "|#abc|Jane|"]));
        assert_eq!(meta.pull_request, None);
    }

    #[test]
    fn test_extract_crlf_body() {
        let meta = ExtractedMetadata::extract("|PR|Champion|\r\n|---|---|\r\n|#7|Bob|\r\n");
        assert_eq!(meta.pull_request, Some(7));
        assert_eq!(meta.champion.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_header_must_start_the_line() {
        let meta = ExtractedMetadata::extract(&body(&[" |PR|Champion|", "---", "|#42|Jane|"]));
        assert_eq!(meta, ExtractedMetadata::default());
    }

    proptest! {
        /// Property: bodies without the header never yield metadata.
        #[test]
        fn prop_no_header_no_metadata(text in "[^|]{0,200}") {
            prop_assert_eq!(ExtractedMetadata::extract(&text), ExtractedMetadata::default());
        }

        /// Property: extraction never panics on arbitrary rows.
        #[test]
        fn prop_arbitrary_row_never_panics(row in ".{0,80}") {
            let _ = ExtractedMetadata::extract(&format!("|PR|Champion|\n---\n{row}"));
        }
    }
}
