use serde::{Deserialize, Serialize};

/// Delivery or invoice address in the gateway payload.
///
/// The gateway's wire contract wants every field present; absent source
/// values are normalized to empty strings during mapping, never null.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub given_names: String,
    pub surnames: String,
    pub company: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
    pub state: String,
    pub phone: String,
    pub mobile_phone: String,
    pub vat_number: String,
}
