use std::path::Path;

use crate::error::{Result, SummaryError};

/// Last page extracted when no range is given; effectively "all pages".
pub const DEFAULT_LAST_PAGE: usize = 100_000;

/// Inclusive, 0-indexed range of pages to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            start: 0,
            end: DEFAULT_LAST_PAGE,
        }
    }
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(SummaryError::InvalidPageRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, page: usize) -> bool {
        self.start <= page && page <= self.end
    }
}

/// Extracts the text of the pages of a PDF that fall within `range`.
///
/// Pages are joined with newlines in document order. Every failure is
/// reported as [`SummaryError::DocumentExtraction`] carrying the path.
pub fn extract_text(path: &Path, range: PageRange) -> Result<String> {
    let extraction_error = |reason: String| SummaryError::DocumentExtraction {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(extraction_error("File not found".to_string()));
    }

    if path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("pdf"))
    {
        return Err(extraction_error("File is not a PDF".to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| extraction_error(format!("Failed to read file: {}", e)))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| extraction_error(format!("Failed to parse PDF: {}", e)))?;

    let total_pages = pages.len();
    let text = pages
        .into_iter()
        .enumerate()
        .filter(|(page, _)| range.contains(*page))
        .map(|(_, text)| text)
        .collect::<Vec<String>>()
        .join("\n");

    tracing::debug!(
        path = %path.display(),
        total_pages,
        start = range.start,
        end = range.end,
        chars = text.len(),
        "Extracted PDF text"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_range_covers_everything() {
        let range = PageRange::default();
        assert!(range.contains(0));
        assert!(range.contains(DEFAULT_LAST_PAGE));
        assert!(!range.contains(DEFAULT_LAST_PAGE + 1));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PageRange::new(2, 4).unwrap();
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));

        let single = PageRange::new(3, 3).unwrap();
        assert!(single.contains(3));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            PageRange::new(5, 2),
            Err(SummaryError::InvalidPageRange { start: 5, end: 2 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pdf");
        match extract_text(&path, PageRange::default()) {
            Err(SummaryError::DocumentExtraction { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_a_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").unwrap();
        let err = extract_text(&path, PageRange::default()).unwrap_err();
        assert!(matches!(err, SummaryError::DocumentExtraction { .. }));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_corrupt_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is not really a pdf document").unwrap();
        drop(file);

        let err = extract_text(&path, PageRange::default()).unwrap_err();
        assert!(matches!(err, SummaryError::DocumentExtraction { .. }));
    }
}
