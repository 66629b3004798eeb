//! The canonical catalog schema.
//!
//! Every standardized sheet carries exactly these 17 columns, in this order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fields in the canonical schema.
pub const CANONICAL_FIELD_COUNT: usize = 17;

/// A canonical catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Collection,
    DesignName,
    Composition,
    WeightPerMetre,
    DesignHorizontal,
    DesignVertical,
    FabricWidth,
    Martindale,
    EndUse,
    HsCode,
    DealerPriceCutRate,
    Gst,
    DealerPriceAfterGstCutRate,
    DealerPriceRollRate,
    DealerPriceAfterGstRollRate,
    RetailPriceCutRate,
    RetailPriceAfterGstCutRate,
}

impl CanonicalField {
    /// All fields in output column order.
    pub const ALL: [CanonicalField; CANONICAL_FIELD_COUNT] = [
        Self::Collection,
        Self::DesignName,
        Self::Composition,
        Self::WeightPerMetre,
        Self::DesignHorizontal,
        Self::DesignVertical,
        Self::FabricWidth,
        Self::Martindale,
        Self::EndUse,
        Self::HsCode,
        Self::DealerPriceCutRate,
        Self::Gst,
        Self::DealerPriceAfterGstCutRate,
        Self::DealerPriceRollRate,
        Self::DealerPriceAfterGstRollRate,
        Self::RetailPriceCutRate,
        Self::RetailPriceAfterGstCutRate,
    ];

    /// Column header as written to standardized output.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::DesignName => "Design Name",
            Self::Composition => "Composition",
            Self::WeightPerMetre => "Weight/Mt",
            Self::DesignHorizontal => "Design Horizontal",
            Self::DesignVertical => "Design Vertical",
            Self::FabricWidth => "Fabric Width (cm)",
            Self::Martindale => "Martindale",
            Self::EndUse => "End Use",
            Self::HsCode => "HS Code",
            Self::DealerPriceCutRate => "Updated DP/Mtr (Cut Rate) May 2025",
            Self::Gst => "GST",
            Self::DealerPriceAfterGstCutRate => "Dealer Price after GST (Cut Rate)",
            Self::DealerPriceRollRate => "Dealer Price/Mtr (Roll Rate)",
            Self::DealerPriceAfterGstRollRate => "Dealer Price after GST (Roll Rate)",
            Self::RetailPriceCutRate => "RR Price (Cut Rate)",
            Self::RetailPriceAfterGstCutRate => "RR Price after GST (Cut Rate)",
        }
    }

    /// Zero-based output column position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a field by its exact header text.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.header() == header)
    }

    /// Measurement and price columns, right-aligned in styled output.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::WeightPerMetre
                | Self::DesignHorizontal
                | Self::DesignVertical
                | Self::FabricWidth
                | Self::Martindale
                | Self::DealerPriceCutRate
                | Self::Gst
                | Self::DealerPriceAfterGstCutRate
                | Self::DealerPriceRollRate
                | Self::DealerPriceAfterGstRollRate
                | Self::RetailPriceCutRate
                | Self::RetailPriceAfterGstCutRate
        )
    }

    /// Presentation width of the column in styled output.
    pub fn column_width(self) -> f64 {
        match self {
            Self::Collection | Self::RetailPriceAfterGstCutRate => 25.0,
            Self::DesignName
            | Self::Composition
            | Self::DealerPriceCutRate
            | Self::DealerPriceAfterGstCutRate
            | Self::DealerPriceRollRate
            | Self::DealerPriceAfterGstRollRate
            | Self::RetailPriceCutRate => 20.0,
            Self::DesignHorizontal | Self::DesignVertical | Self::FabricWidth | Self::EndUse => {
                15.0
            }
            Self::WeightPerMetre | Self::Martindale | Self::HsCode => 12.0,
            Self::Gst => 8.0,
        }
    }

    /// Headers of every field, in order.
    pub fn headers() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::header)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
