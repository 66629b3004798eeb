//! The supplier profile registry.
//!
//! Profiles are defined once and never change at runtime. Source column
//! names are matched exactly and case-sensitively, so spacing variants a
//! supplier uses interchangeably are listed as separate keys.

use serde::Serialize;

use vaya_model::{CanonicalField, CatalogType};

/// Column-name evidence that a table follows a supplier layout.
///
/// Names are compared against upper-cased table columns by containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnSignature {
    /// Any one of the names is present.
    Any(&'static [&'static str]),
    /// Every name is present.
    All(&'static [&'static str]),
}

/// A supplier's column mapping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceProfile {
    pub catalog_type: CatalogType,
    /// Upper-case filename fragments identifying the supplier.
    pub filename_signatures: &'static [&'static str],
    pub column_signature: ColumnSignature,
    /// Source column to canonical field, applied in order.
    pub columns: &'static [(&'static str, CanonicalField)],
}

impl SourceProfile {
    pub fn id(&self) -> &'static str {
        self.catalog_type.id()
    }

    /// Canonical field a source column feeds, if any.
    pub fn target_of(&self, source_column: &str) -> Option<CanonicalField> {
        self.columns
            .iter()
            .find(|(source, _)| *source == source_column)
            .map(|(_, target)| *target)
    }

    /// Canonical fields this profile can populate, in schema order.
    pub fn targets(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| self.columns.iter().any(|(_, target)| target == field))
            .collect()
    }
}

static PROFILES: [SourceProfile; 3] = [
    SourceProfile {
        catalog_type: CatalogType::Sansaar,
        filename_signatures: &["SANSAAR"],
        column_signature: ColumnSignature::All(&["COLLECTION", "SERIALNO"]),
        columns: &[
            ("COLLECTION", CanonicalField::Collection),
            ("Description", CanonicalField::DesignName),
            ("Material Code", CanonicalField::HsCode),
            ("CL_RATE", CanonicalField::DealerPriceCutRate),
            ("GST", CanonicalField::Gst),
            ("RRP With GST", CanonicalField::RetailPriceAfterGstCutRate),
        ],
    },
    SourceProfile {
        catalog_type: CatalogType::FfADress,
        filename_signatures: &["FF_A_DRESS", "DIVINE", "F&F"],
        column_signature: ColumnSignature::Any(&["NEW DP", "NEW MRP"]),
        columns: &[
            ("Collection name", CanonicalField::Collection),
            ("Design", CanonicalField::DesignName),
            ("HSN Codes", CanonicalField::HsCode),
            (" Tax %", CanonicalField::Gst),
            ("NEW DP", CanonicalField::DealerPriceCutRate),
            ("NEW RC", CanonicalField::RetailPriceCutRate),
            ("NEW MRP", CanonicalField::RetailPriceAfterGstCutRate),
        ],
    },
    SourceProfile {
        catalog_type: CatalogType::Fabrizio,
        filename_signatures: &["FABRIZIO"],
        column_signature: ColumnSignature::All(&["PRODUCT NAME", "HSNCODE"]),
        columns: &[
            ("COLLECTION NAME", CanonicalField::Collection),
            ("PRODUCT NAME", CanonicalField::DesignName),
            ("COMPOSITION", CanonicalField::Composition),
            ("MARTINDALE", CanonicalField::Martindale),
            ("HSNCODE", CanonicalField::HsCode),
            ("WIDTH (INCM)", CanonicalField::FabricWidth),
            ("WIDTH(INCM)", CanonicalField::FabricWidth),
            ("GSM", CanonicalField::WeightPerMetre),
            ("GST", CanonicalField::Gst),
            ("DP", CanonicalField::DealerPriceCutRate),
        ],
    },
];

/// All registered profiles.
pub fn profiles() -> &'static [SourceProfile] {
    &PROFILES
}

/// Profile for a catalog type; `None` for [`CatalogType::Unknown`].
pub fn lookup(catalog_type: CatalogType) -> Option<&'static SourceProfile> {
    PROFILES
        .iter()
        .find(|profile| profile.catalog_type == catalog_type)
}

/// Profile by identifier, case-insensitive.
pub fn lookup_id(id: &str) -> Option<&'static SourceProfile> {
    let id = id.trim();
    PROFILES
        .iter()
        .find(|profile| profile.id().eq_ignore_ascii_case(id))
}

/// Profile access on [`CatalogType`].
pub trait CatalogProfileExt {
    fn profile(self) -> Option<&'static SourceProfile>;
}

impl CatalogProfileExt for CatalogType {
    fn profile(self) -> Option<&'static SourceProfile> {
        lookup(self)
    }
}
