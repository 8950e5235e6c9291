use serde::{Deserialize, Serialize};

/// Host-application metadata reported in the payload's platform block.
///
/// All values come from the hosting integration; nothing here is computed
/// by the builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Host application name (e.g. "Stateset")
    pub name: String,
    pub version: String,

    /// Installed integration-module version
    pub plugin_version: String,

    pub runtime_version: String,
    pub os: String,
    pub uname: String,

    pub db_name: String,
    pub db_version: String,
}

/// The slice of an inbound HTTP request needed to classify the buyer's
/// device. Passed in explicitly; the builder reads no ambient request
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_agent: String,

    /// Contents of the Accept header
    pub accept: String,

    /// Whether an X-Wap-Profile / Profile header was present
    pub wap_profile: bool,
}

impl RequestContext {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            accept: String::new(),
            wap_profile: false,
        }
    }
}
