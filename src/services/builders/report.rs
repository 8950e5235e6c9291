use std::sync::Arc;

use tracing::{info, instrument};

use super::{BuilderKind, BuilderState, PayloadBuilder};
use crate::config::GatewayConfig;
use crate::dto::{Payload, ReportOrder};
use crate::entities::{OrderContext, OrderState, PlatformInfo, RequestContext};
use crate::errors::BuilderError;
use crate::services::mapping;

/// Builds the daily reconciliation report: one payload aggregating the
/// carts and references of many orders. The staged limit caps how many
/// orders a single report carries; staging order is preserved.
#[derive(Clone, Debug)]
pub struct ReportBuilder {
    state: BuilderState,
}

impl ReportBuilder {
    pub fn new(config: Arc<GatewayConfig>, platform: PlatformInfo) -> Self {
        Self {
            state: BuilderState::new(config, platform),
        }
    }
}

impl PayloadBuilder for ReportBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Report
    }

    fn set_store_id(&mut self, store_id: u32) -> &mut dyn PayloadBuilder {
        self.state.store_id = Some(store_id);
        self
    }

    fn set_limit(&mut self, limit: Option<usize>) -> &mut dyn PayloadBuilder {
        self.state.limit = limit;
        self
    }

    fn set_merchant_id(&mut self, merchant_id: &str) -> &mut dyn PayloadBuilder {
        self.state.merchant_id = Some(merchant_id.to_string());
        self
    }

    fn set_order(&mut self, order: OrderContext) -> &mut dyn PayloadBuilder {
        self.state.orders.push(order);
        self
    }

    fn set_state(&mut self, state: OrderState) -> &mut dyn PayloadBuilder {
        self.state.state = Some(state);
        self
    }

    fn set_request_context(&mut self, request: RequestContext) -> &mut dyn PayloadBuilder {
        self.state.request = Some(request);
        self
    }

    fn set_both_references(&mut self, both: bool) -> &mut dyn PayloadBuilder {
        self.state.both_references = both;
        self
    }

    #[instrument(skip(self))]
    fn build(&self) -> Result<Payload, BuilderError> {
        let merchant = self.state.merchant()?;
        let state = self.state.state.unwrap_or(OrderState::Confirmed);

        let count = self
            .state
            .limit
            .unwrap_or(self.state.orders.len())
            .min(self.state.orders.len());

        let entries = self.state.orders[..count]
            .iter()
            .map(|order| {
                Ok(ReportOrder {
                    merchant_reference: self.state.merchant_reference(order),
                    state,
                    cart: self.state.build_cart(order)?,
                })
            })
            .collect::<Result<Vec<_>, BuilderError>>()?;

        info!(
            orders = entries.len(),
            staged = self.state.orders.len(),
            "built reconciliation report payload"
        );

        Ok(Payload {
            merchant,
            merchant_reference: None,
            state: None,
            delivery_address: None,
            invoice_address: None,
            customer: None,
            cart: None,
            delivery_method: None,
            gui: None,
            platform: Some(mapping::map_platform(&self.state.platform)),
            orders: Some(entries),
        })
    }
}
