use serde::{Deserialize, Serialize};

/// A billing or shipping address as stored by the host commerce platform.
///
/// Optional fields stay `Option` here; normalization to the gateway's
/// empty-string wire convention happens in the mapping layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub company: Option<String>,

    /// Free-form street lines, up to four. The gateway accepts two
    /// address lines, so lines are joined pairwise during mapping.
    pub street: Vec<String>,

    pub postcode: Option<String>,
    pub city: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,

    pub region: Option<String>,
    pub telephone: Option<String>,

    /// Secondary phone; the host platform stores it in the fax slot
    pub fax: Option<String>,

    pub vat_id: Option<String>,
}
