use serde::Serialize;

/// Visible text of a document, pages concatenated in reading order.
///
/// Every page that contributed text is followed by exactly one `\n`. A document where no page
/// yields text produces the empty string, which is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
    pages_with_text: usize,
}

impl ExtractedText {
    /// Empty text for a document with `page_count` pages, none of which has been read yet.
    pub fn with_page_count(page_count: usize) -> Self {
        Self {
            text: String::new(),
            page_count,
            pages_with_text: 0,
        }
    }

    /// Builds text from already-extracted page strings (skipping blank pages).
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let mut extracted = Self::with_page_count(pages.len());
        for page in pages {
            extracted.push_page(page.as_ref());
        }
        extracted
    }

    /// Appends one page. Returns `false` if the page contributed nothing; whitespace-only text
    /// counts as nothing.
    pub fn push_page(&mut self, page_text: &str) -> bool {
        let page_text = page_text.trim_end_matches(['\r', '\n']);
        if page_text.trim().is_empty() {
            return false;
        }

        self.text.push_str(page_text);
        self.text.push('\n');
        self.pages_with_text += 1;
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Pages present in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Pages that contributed text.
    pub fn pages_with_text(&self) -> usize {
        self.pages_with_text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
