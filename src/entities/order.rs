use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::AddressRecord;
use super::customer::CustomerRecord;
use super::product::ProductRecord;

/// Currency totals for an order or cart, with and without tax.
///
/// All amounts are decimal currency units as the host platform stores
/// them; conversion to integer minor units happens at assembly time.
/// A discount is negative when one applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub subtotal_with_tax: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub shipping_with_tax: Decimal,
    pub discount: Decimal,
    pub discount_with_tax: Decimal,
    pub grand_total: Decimal,
    pub grand_total_with_tax: Decimal,
}

/// A purchased order line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// SKU, sent as the line reference
    pub sku: String,

    pub name: String,
    pub qty: u32,

    /// Unit price including tax
    pub price_with_tax: Decimal,

    /// Row total including tax, after per-line tax rounding
    pub row_total_with_tax: Decimal,

    /// Virtual/downloadable goods need no shipping
    pub downloadable: bool,

    /// Catalog record, when the product repository resolved one
    pub product: Option<ProductRecord>,
}

/// Read-only view of the order or cart being converted into a payload.
///
/// Everything here is already resolved in memory by the host platform's
/// collaborators; the builder never mutates it and never performs I/O to
/// enrich it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    /// Human-facing order number, sent as the first merchant reference
    pub increment_id: String,

    /// Internal order id, optionally sent as the second merchant reference
    pub entity_id: u64,

    pub store_id: u32,

    /// ISO 4217 currency code for all totals
    pub currency: String,

    pub totals: OrderTotals,
    pub lines: Vec<OrderLine>,

    /// Composite shipping method code, `<carrier>_<method>`
    pub shipping_method: Option<String>,

    pub coupon_code: Option<String>,

    pub shipping_address: Option<AddressRecord>,
    pub billing_address: Option<AddressRecord>,

    pub customer: Option<CustomerRecord>,

    /// Email stored on the order itself, used when the customer record
    /// carries none
    pub customer_email: Option<String>,
}
