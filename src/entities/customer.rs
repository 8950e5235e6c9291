use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer record attached to an order, as resolved by the host platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub firstname: Option<String>,
    pub lastname: Option<String>,

    /// May be absent for guest checkouts; the order-level stored email is
    /// used as fallback during mapping.
    pub email: Option<String>,

    pub company: Option<String>,

    /// Tax identifier; duplicated into the gateway's VAT and national-id
    /// fields when present.
    pub tax_vat: Option<String>,

    pub dob: Option<NaiveDate>,

    /// Host-platform customer id, sent as the external reference
    pub id: Option<u64>,

    /// Honorific prefix ("Sra.", "Sr.", ...), normalized during mapping
    pub prefix: Option<String>,
}
