//! Loading PDF pages from disk.
//!
//! Glyphs are collected through `pdf_extract`'s [`OutputDev`] callbacks and
//! assembled into positioned words per page, so tables can be recovered
//! from geometry rather than from flattened text.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdf_extract::{Document, MediaBox, OutputDev, OutputError, Transform};
use tracing::{debug, warn};

use vaya_model::{ExtractionOptions, RawTable};

use crate::error::{PdfError, Result};
use crate::extract::extract_pdf_table;
use crate::layout::{LayoutPage, Word};

/// Gap after a glyph, in ems, that still continues the same word.
const WORD_GAP: f64 = 0.1;

/// Builds positioned words from the glyph stream of each page.
#[derive(Debug, Default)]
struct PageCollector {
    pages: Vec<LayoutPage>,
    height: f64,
    word: Option<Word>,
}

impl PageCollector {
    fn flush(&mut self) {
        if let (Some(word), Some(page)) = (self.word.take(), self.pages.last_mut()) {
            page.words.push(word);
        }
    }

    fn finish(mut self) -> Vec<LayoutPage> {
        self.flush();
        self.pages
    }
}

impl OutputDev for PageCollector {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> std::result::Result<(), OutputError> {
        self.flush();
        self.height = media_box.ury - media_box.lly;
        self.pages.push(LayoutPage::new(page_num, Vec::new()));
        Ok(())
    }

    fn end_page(&mut self) -> std::result::Result<(), OutputError> {
        self.flush();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        _spacing: f64,
        font_size: f64,
        char: &str,
    ) -> std::result::Result<(), OutputError> {
        if char.trim().is_empty() {
            self.flush();
            return Ok(());
        }
        let size = font_size * (trm.m11 * trm.m22 - trm.m12 * trm.m21).abs().sqrt();
        let x = trm.m31;
        let y = self.height - trm.m32;

        let continues = self.word.as_ref().is_some_and(|word| {
            (y - word.y).abs() <= 0.5 * size
                && x >= word.x1 - 0.5 * size
                && x <= word.x1 + WORD_GAP * size
        });
        if !continues {
            self.flush();
            self.word = Some(Word::new("", x, x, y, size));
        }
        if let Some(word) = self.word.as_mut() {
            word.text.push_str(char);
            word.x1 = x + width * size;
            word.size = word.size.max(size);
        }
        Ok(())
    }

    // Word and line boundaries come from glyph positions instead.
    fn begin_word(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }
}

fn collect_pages(bytes: &[u8]) -> std::result::Result<Vec<LayoutPage>, String> {
    let document = Document::load_mem(bytes).map_err(|err| err.to_string())?;
    if document.is_encrypted() {
        return Err("encrypted PDFs are not supported".to_string());
    }
    let mut collector = PageCollector::default();
    pdf_extract::output_doc(&document, &mut collector).map_err(|err| err.to_string())?;
    Ok(collector.finish())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Reads the positioned words of every page of the PDF at `path`.
///
/// A panic inside the PDF parser is reported as [`PdfError::Read`].
pub fn read_pdf_pages(path: &Path) -> Result<Vec<LayoutPage>> {
    if !path.is_file() {
        return Err(PdfError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| PdfError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = panic::catch_unwind(AssertUnwindSafe(|| collect_pages(&bytes)));
    let pages = match parsed {
        Ok(pages) => pages.map_err(|message| PdfError::Read {
            path: path.to_path_buf(),
            message,
        })?,
        Err(payload) => {
            let message = format!("PDF parser panicked: {}", panic_message(&*payload));
            warn!(path = %path.display(), %message, "PDF parser aborted");
            return Err(PdfError::Read {
                path: path.to_path_buf(),
                message,
            });
        }
    };
    debug!(path = %path.display(), pages = pages.len(), "read PDF pages");
    Ok(pages)
}

/// Reads a PDF and extracts its table, using the file name for strategy
/// selection.
pub fn extract_pdf_file(path: &Path, options: &ExtractionOptions) -> Result<RawTable> {
    let pages = read_pdf_pages(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    extract_pdf_table(&pages, &filename, options)
}
