
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::{QaError, Result};

/// Extract the text of every page of a PDF, in page order.
///
/// Pages that fail extraction or contain no extractable text (scanned
/// images, blank pages) are skipped. Each kept page's text is followed by a
/// newline. A file that cannot be parsed at all is an error.
#[inline]
pub fn extract_text(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .map_err(|e| QaError::Extraction(format!("Failed to parse {}: {}", path.display(), e)))?;

    let mut text = String::new();
    let mut kept = 0usize;
    let pages = doc.get_pages();
    let total = pages.len();

    for page_num in pages.into_keys() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(page_text.trim_end());
                text.push('\n');
                kept += 1;
            }
            Ok(_) => {
                debug!("Page {} contains no extractable text, skipping", page_num);
            }
            Err(e) => {
                debug!("Failed to extract text from page {}: {}", page_num, e);
            }
        }
    }

    debug!(
        "Extracted text from {}/{} pages ({} chars)",
        kept,
        total,
        text.len()
    );

    Ok(text)
}
