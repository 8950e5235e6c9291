//! RiskGate gateway integration core
//!
//! This crate converts a commerce order or cart into the normalized,
//! cent-accurate payload the RiskGate payment-risk API consumes. It
//! covers entity mapping, price-to-minor-unit conversion, reconciliation
//! of per-line tax-rounding drift, the order lifecycle vocabulary, and
//! HMAC request signing. Retrieving orders, persisting sync state and
//! transporting payloads stay with the host application; everything here
//! is synchronous and side-effect-free.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod services;

pub use config::{load_config, GatewayConfig, GatewayConfigError, StoreSettings};
pub use dto::Payload;
pub use entities::{OrderContext, OrderState, PlatformInfo, RequestContext};
pub use errors::BuilderError;
pub use services::builders::{create_builder, BuilderKind, PayloadBuilder};
pub use services::money::PriceConverter;
pub use services::signing::RequestSigner;
