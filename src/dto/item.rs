use serde::{Deserialize, Serialize};

/// A cart line in the gateway payload, tagged by its `type` field.
///
/// Every monetary amount is an integer count of minor currency units.
/// Discount totals are never positive and handling totals never negative;
/// the assembler and reconciler pick the variant from the sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItem {
    Product {
        reference: String,
        name: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        product_id: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,

        quantity: u32,
        price_with_tax: i64,
        total_with_tax: i64,
        downloadable: bool,
    },

    Discount {
        /// Coupon code, or "Ajuste" for a rounding adjustment
        reference: String,
        name: String,
        total_with_tax: i64,
    },

    Handling {
        /// Carrier code, or "Ajuste" for a rounding adjustment
        reference: String,
        name: String,
        total_with_tax: i64,
    },
}

impl LineItem {
    /// Total with tax in minor units, regardless of variant.
    pub fn total_with_tax(&self) -> i64 {
        match self {
            LineItem::Product { total_with_tax, .. }
            | LineItem::Discount { total_with_tax, .. }
            | LineItem::Handling { total_with_tax, .. } => *total_with_tax,
        }
    }

    /// Line reference, regardless of variant.
    pub fn reference(&self) -> &str {
        match self {
            LineItem::Product { reference, .. }
            | LineItem::Discount { reference, .. }
            | LineItem::Handling { reference, .. } => reference,
        }
    }
}
