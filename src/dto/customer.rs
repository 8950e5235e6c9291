use serde::{Deserialize, Serialize};

/// Customer block in the gateway payload.
///
/// Required fields are always-present strings; optional fields are either
/// present with a value or omitted from the wire form entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub given_names: String,
    pub surnames: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    /// National id; carries the same value as `vat_number`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,

    /// `YYYY-MM-DD`, or empty when the stored date could not be formatted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Host-platform customer id
    #[serde(rename = "ref")]
    pub reference: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
