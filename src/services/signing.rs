use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::config::GatewayConfig;
use crate::errors::BuilderError;

type HmacSha256 = Hmac<Sha256>;

/// Keyed signature over a payload value: HMAC-SHA256, hex-encoded.
pub fn sign(value: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC-SHA256 accepts any key length");
    mac.update(value);
    hex::encode(mac.finalize().into_bytes())
}

/// Signs payload values with the per-store merchant secret.
///
/// The transport layer attaches the signature to the outgoing request;
/// the builder never embeds it in the payload itself.
#[derive(Clone, Debug)]
pub struct RequestSigner<'a> {
    config: &'a GatewayConfig,
}

impl<'a> RequestSigner<'a> {
    pub fn new(config: &'a GatewayConfig) -> Self {
        Self { config }
    }

    /// Signs raw bytes for a store scope. A store without a configured
    /// secret cannot sign anything, so that is an error rather than an
    /// empty signature.
    pub fn sign_for_store(
        &self,
        value: &[u8],
        store_id: Option<u32>,
    ) -> Result<String, BuilderError> {
        let secret = self.config.user_secret(store_id).ok_or_else(|| {
            BuilderError::Configuration(match store_id {
                Some(id) => format!("user_secret is not configured for store {}", id),
                None => "user_secret is not configured".to_string(),
            })
        })?;
        Ok(sign(value, secret))
    }

    /// Serializes a value to its canonical JSON wire form and signs it.
    pub fn sign_value<T: Serialize>(
        &self,
        value: &T,
        store_id: Option<u32>,
    ) -> Result<String, BuilderError> {
        let bytes = serde_json::to_vec(value)?;
        self.sign_for_store(&bytes, store_id)
    }
}
