//! Chapter listing and the helpers behind the mock PDF upload.

use crate::error::ApiError;
use crate::models::Chapter;

/// Rough page size used to fake a page count for uploads.
const BYTES_PER_PAGE: u64 = 50 * 1024;

pub fn chapters() -> Vec<Chapter> {
    vec![
        chapter("ch1", "Units and Measurement", 25, "Fundamental concepts of measurement in physics", 85),
        chapter("ch2", "Motion in Straight Line", 28, "Study of motion along a straight line", 60),
        chapter("ch3", "Work Energy Power", 32, "Fundamental concepts of work, energy and power", 90),
        chapter("ch4", "Motion in a Plane", 30, "Two-dimensional motion analysis", 30),
    ]
}

fn chapter(id: &str, title: &str, pages: u32, description: &str, progress: u8) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        pages,
        description: description.to_string(),
        progress,
    }
}

pub fn find_chapter(id: &str) -> Option<Chapter> {
    chapters().into_iter().find(|c| c.id == id)
}

pub fn require_pdf_filename(filename: Option<&str>) -> Result<String, ApiError> {
    let name = filename
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation("Uploaded file has no filename".to_string()))?;

    if !name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(ApiError::UnsupportedMedia(format!(
            "Only PDF files are allowed, got '{}'",
            name
        )));
    }
    Ok(name.to_string())
}

pub fn estimate_pages(size_bytes: u64) -> u32 {
    let pages = (size_bytes + BYTES_PER_PAGE - 1) / BYTES_PER_PAGE;
    pages.clamp(1, u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_chapters_with_unique_ids() {
        let list = chapters();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].title, "Units and Measurement");
        assert_eq!(find_chapter("ch3").map(|c| c.pages), Some(32));
        assert!(find_chapter("ch9").is_none());
    }

    #[test]
    fn pdf_extension_check_is_case_insensitive() {
        assert_eq!(require_pdf_filename(Some("Notes.PDF")).expect("pdf"), "Notes.PDF");
        assert!(matches!(
            require_pdf_filename(Some("notes.docx")),
            Err(ApiError::UnsupportedMedia(_))
        ));
        assert!(matches!(require_pdf_filename(None), Err(ApiError::Validation(_))));
        assert!(matches!(require_pdf_filename(Some("  ")), Err(ApiError::Validation(_))));
    }

    #[test]
    fn page_estimate_rounds_up() {
        assert_eq!(estimate_pages(1), 1);
        assert_eq!(estimate_pages(BYTES_PER_PAGE), 1);
        assert_eq!(estimate_pages(BYTES_PER_PAGE + 1), 2);
    }
}
