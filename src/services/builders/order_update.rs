use std::sync::Arc;

use tracing::{info, instrument};

use super::{BuilderKind, BuilderState, PayloadBuilder};
use crate::config::GatewayConfig;
use crate::dto::Payload;
use crate::entities::{OrderContext, OrderState, PlatformInfo, RequestContext};
use crate::errors::BuilderError;
use crate::services::mapping;

/// Builds the order-update payload: references and the new lifecycle
/// state, sent when an already-known order changes (shipment, review
/// outcome, cancellation). No item list travels with an update.
#[derive(Clone, Debug)]
pub struct OrderUpdateBuilder {
    state: BuilderState,
}

impl OrderUpdateBuilder {
    pub fn new(config: Arc<GatewayConfig>, platform: PlatformInfo) -> Self {
        Self {
            state: BuilderState::new(config, platform),
        }
    }
}

impl PayloadBuilder for OrderUpdateBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::OrderUpdate
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
        self.state.order = Some(order);
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
        let order = self
            .state
            .order
            .as_ref()
            .ok_or_else(|| BuilderError::missing("order"))?;

        // Updates carry a state transition decided upstream; there is no
        // sensible default to fall back to.
        let state = self
            .state
            .state
            .ok_or_else(|| BuilderError::missing("state"))?;

        let merchant = self.state.merchant()?;

        info!(
            order = %order.increment_id,
            state = %state,
            "built order-update payload"
        );

        Ok(Payload {
            merchant,
            merchant_reference: Some(self.state.merchant_reference(order)),
            state: Some(state),
            delivery_address: None,
            invoice_address: None,
            customer: None,
            cart: None,
            delivery_method: None,
            gui: None,
            platform: Some(mapping::map_platform(&self.state.platform)),
            orders: None,
        })
    }
}
