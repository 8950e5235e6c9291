use serde::{Deserialize, Serialize};

/// Catalog data for a purchased product, resolved by the host platform's
/// product repository. Presence of the record controls whether optional
/// product fields are included on the line item at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog product id
    pub id: u64,

    pub description: Option<String>,

    /// Storefront URL for the product page
    pub url: Option<String>,
}
