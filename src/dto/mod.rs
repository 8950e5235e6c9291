//! Wire model for the RiskGate gateway.
//!
//! Field names are part of the gateway's case-sensitive JSON contract.
//! Optional top-level blocks are omitted (never null) when a payload
//! variant does not populate them.

pub mod address;
pub mod customer;
pub mod item;
pub mod platform;

use serde::{Deserialize, Serialize};

use crate::entities::OrderState;

pub use address::Address;
pub use customer::Customer;
pub use item::LineItem;
pub use platform::Platform;

/// Merchant identification block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
}

/// References correlating the payload to the merchant's own records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantReference {
    /// Human-facing order number
    pub order_ref_1: String,

    /// Internal order id, included only when the caller asks for both
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_ref_2: Option<String>,
}

/// Cart block: line items plus control totals in minor units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub currency: String,
    pub order_total_without_tax: i64,
    pub order_total_with_tax: i64,
    pub items: Vec<LineItem>,
}

/// Delivery method resolved from the order's shipping method code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryMethod {
    /// Method label, the part after the carrier code
    pub name: String,

    /// Carrier title from configuration; historically the delivery window
    pub days: String,

    /// Carrier code
    pub provider: String,
}

/// Buyer device classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    Mobile,
    #[default]
    Desktop,
}

/// GUI block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gui {
    pub layout: Layout,
}

/// One order entry inside a reconciliation report payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOrder {
    pub merchant_reference: MerchantReference,
    pub state: OrderState,
    pub cart: Cart,
}

/// The assembled request body for the gateway.
///
/// Built once per `build()` invocation and never mutated afterwards.
/// Which blocks are populated depends on the payload variant: a new
/// order carries everything except `orders`, an order update carries
/// references and state only, and a report carries the `orders` list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub merchant: Merchant,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<MerchantReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<Cart>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<DeliveryMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gui: Option<Gui>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<ReportOrder>>,
}
