//! Payload builders for the gateway's request variants.
//!
//! A discriminator selects one of a closed set of builders: `order` for
//! new-order creation, `order-update` for status/shipment resync, and
//! `report` for the daily reconciliation report. All variants share the
//! same fluent staging surface; `build()` is pure and idempotent, so one
//! staged builder can be built repeatedly and always yields the same
//! payload.

pub mod order;
pub mod order_update;
pub mod report;

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::dto::{Address, Cart, Merchant, MerchantReference, Payload};
use crate::entities::{OrderContext, OrderState, PlatformInfo, RequestContext};
use crate::errors::BuilderError;
use crate::services::mapping;
use crate::services::money::PriceConverter;
use crate::services::reconciliation;

pub use order::OrderBuilder;
pub use order_update::OrderUpdateBuilder;
pub use report::ReportBuilder;

/// Discriminator for the payload variants the gateway accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum BuilderKind {
    Order,
    OrderUpdate,
    Report,
}

/// Fluent staging surface shared by every payload builder.
///
/// Builders are stateless across invocations: everything `build()` reads
/// is staged explicitly through these setters, and `build()` itself
/// borrows immutably. Setters return the trait object so glue code can
/// chain calls without knowing the concrete variant.
pub trait PayloadBuilder {
    fn kind(&self) -> BuilderKind;

    fn set_store_id(&mut self, store_id: u32) -> &mut dyn PayloadBuilder;

    /// Caps how many orders a report aggregates; ignored by the other
    /// variants.
    fn set_limit(&mut self, limit: Option<usize>) -> &mut dyn PayloadBuilder;

    /// Overrides the configured merchant reference.
    fn set_merchant_id(&mut self, merchant_id: &str) -> &mut dyn PayloadBuilder;

    /// Stages the order to convert. The report builder accumulates
    /// orders; the other variants replace any previously staged one.
    fn set_order(&mut self, order: OrderContext) -> &mut dyn PayloadBuilder;

    fn set_state(&mut self, state: OrderState) -> &mut dyn PayloadBuilder;

    fn set_request_context(&mut self, request: RequestContext) -> &mut dyn PayloadBuilder;

    /// Whether to correlate by both the order number and the internal id
    /// (the default) or the order number alone.
    fn set_both_references(&mut self, both: bool) -> &mut dyn PayloadBuilder;

    fn build(&self) -> Result<Payload, BuilderError>;
}

/// Creates the builder for a payload variant.
pub fn create_builder(
    kind: BuilderKind,
    config: Arc<GatewayConfig>,
    platform: PlatformInfo,
) -> Box<dyn PayloadBuilder> {
    match kind {
        BuilderKind::Order => Box::new(OrderBuilder::new(config, platform)),
        BuilderKind::OrderUpdate => Box::new(OrderUpdateBuilder::new(config, platform)),
        BuilderKind::Report => Box::new(ReportBuilder::new(config, platform)),
    }
}

/// Staged configuration shared by the builder variants.
#[derive(Clone, Debug)]
pub(crate) struct BuilderState {
    pub config: Arc<GatewayConfig>,
    pub platform: PlatformInfo,
    pub store_id: Option<u32>,
    pub limit: Option<usize>,
    pub merchant_id: Option<String>,
    pub state: Option<OrderState>,
    pub request: Option<RequestContext>,
    pub both_references: bool,
    pub order: Option<OrderContext>,
    pub orders: Vec<OrderContext>,
}

impl BuilderState {
    pub(crate) fn new(config: Arc<GatewayConfig>, platform: PlatformInfo) -> Self {
        Self {
            config,
            platform,
            store_id: None,
            limit: None,
            merchant_id: None,
            state: None,
            request: None,
            both_references: true,
            order: None,
            orders: Vec::new(),
        }
    }

    /// Store scope for configuration lookups: an explicitly staged store
    /// id wins, otherwise the staged order's store applies.
    pub(crate) fn effective_store_id(&self) -> Option<u32> {
        self.store_id
            .or_else(|| self.order.as_ref().map(|o| o.store_id))
            .or_else(|| self.orders.first().map(|o| o.store_id))
    }

    /// Merchant block: staged override first, then configuration for the
    /// effective store scope.
    pub(crate) fn merchant(&self) -> Result<Merchant, BuilderError> {
        let id = self
            .merchant_id
            .clone()
            .or_else(|| {
                self.config
                    .merchant_ref(self.effective_store_id())
                    .map(str::to_string)
            })
            .ok_or_else(|| {
                BuilderError::Configuration(match self.effective_store_id() {
                    Some(store) => {
                        format!("merchant_ref is not configured for store {}", store)
                    }
                    None => "merchant_ref is not configured".to_string(),
                })
            })?;
        Ok(Merchant { id })
    }

    pub(crate) fn merchant_reference(&self, order: &OrderContext) -> MerchantReference {
        MerchantReference {
            order_ref_1: order.increment_id.clone(),
            order_ref_2: self
                .both_references
                .then(|| order.entity_id.to_string()),
        }
    }

    /// Delivery and invoice addresses, each falling back to the other
    /// when the order stores only one.
    pub(crate) fn addresses(
        &self,
        order: &OrderContext,
    ) -> Result<(Address, Address), BuilderError> {
        let shipping = order
            .shipping_address
            .as_ref()
            .or(order.billing_address.as_ref());
        let billing = order
            .billing_address
            .as_ref()
            .or(order.shipping_address.as_ref());

        match (shipping, billing) {
            (Some(shipping), Some(billing)) => {
                Ok((mapping::map_address(shipping), mapping::map_address(billing)))
            }
            _ => Err(BuilderError::Validation(format!(
                "order {} has neither billing nor shipping address",
                order.increment_id
            ))),
        }
    }

    /// Cart block: assembled items, reconciled against the declared
    /// total. Drift the reconciler refuses to absorb fails the build so
    /// a payload the gateway would reject is never emitted.
    pub(crate) fn build_cart(&self, order: &OrderContext) -> Result<Cart, BuilderError> {
        let converter = PriceConverter::default();
        let items = crate::services::items::assemble(order, &self.config, converter);

        let declared = converter.convert(order.totals.grand_total_with_tax);
        let items = reconciliation::reconcile(declared, items);

        let drift = declared - reconciliation::line_total_sum(&items);
        if drift != 0 {
            return Err(BuilderError::TotalsMismatch {
                drift,
                lines: items.len(),
            });
        }

        Ok(Cart {
            currency: order.currency.clone(),
            order_total_without_tax: converter.convert(order.totals.grand_total),
            order_total_with_tax: declared,
            items,
        })
    }
}
