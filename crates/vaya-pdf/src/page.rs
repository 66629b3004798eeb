//! Page abstraction shared by the extraction strategies.

/// Rows of optional cells; `None` marks a cell the detector left blank.
pub type PageTable = Vec<Vec<Option<String>>>;

/// A single PDF page as seen by the extraction strategies.
pub trait PdfPage {
    /// Extracted page text, or `None` when the page has none.
    fn text(&self) -> Option<String>;

    /// Table regions detected on the page.
    fn tables(&self) -> Vec<PageTable>;
}

/// A page with text and table regions supplied directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePage {
    pub text: Option<String>,
    pub tables: Vec<PageTable>,
}

impl TablePage {
    pub fn new(tables: Vec<PageTable>) -> Self {
        Self { text: None, tables }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl PdfPage for TablePage {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn tables(&self) -> Vec<PageTable> {
        self.tables.clone()
    }
}
