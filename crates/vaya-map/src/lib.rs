#![deny(unsafe_code)]

//! Mapping of supplier tables onto the canonical schema.
//!
//! - **profiles**: the fixed registry of supplier column profiles
//! - **detect**: classification of a table into a catalog type
//! - **mapper**: projection of a raw table onto the canonical columns

pub mod detect;
pub mod mapper;
pub mod profiles;

pub use detect::{detect_catalog_type, detect_from_columns, detect_from_filename};
pub use mapper::{MappingSummary, map_columns, summarize_mapping};
pub use profiles::{
    CatalogProfileExt, ColumnSignature, SourceProfile, lookup, lookup_id, profiles,
};
