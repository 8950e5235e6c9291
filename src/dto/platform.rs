use serde::{Deserialize, Serialize};

/// Platform block in the gateway payload.
///
/// The gateway's wire contract predates this integration, so the runtime
/// fields keep their historical `php_*` names on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub version: String,
    pub plugin_version: String,

    #[serde(rename = "php_version")]
    pub runtime_version: String,

    #[serde(rename = "php_os")]
    pub os: String,

    pub uname: String,
    pub db_name: String,
    pub db_version: String,
}
