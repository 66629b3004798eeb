//! PDF table extraction for supplier price lists.
//!
//! Pages are abstracted behind [`PdfPage`] so both strategies run on any
//! source of page text and table regions:
//!
//! - **profile**: line-by-line regex capture for Fabrizio-style lists
//! - **generic**: header plus data rows from detected page tables
//!
//! [`extract_pdf_table`] picks a strategy and falls back to the generic one
//! when the profile strategy finds nothing. [`reader`] loads pages from disk
//! as positioned words and [`layout`] recovers tables from their geometry.

#![deny(unsafe_code)]

pub mod error;
pub mod extract;
pub mod generic;
pub mod layout;
pub mod page;
pub mod profile;
pub mod reader;

pub use error::{PdfError, Result};
pub use extract::{extract_pdf_table, extract_records, resolve_method};
pub use generic::{extract_generic, header_names, table_records};
pub use layout::{LayoutPage, Word, detect_tables, layout_text};
pub use page::{PageTable, PdfPage, TablePage};
pub use profile::{capture_fields, extract_line, extract_profile, is_candidate_line};
pub use reader::{extract_pdf_file, read_pdf_pages};
