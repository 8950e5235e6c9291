use std::sync::Arc;

use tracing::{info, instrument};

use super::{BuilderKind, BuilderState, PayloadBuilder};
use crate::config::GatewayConfig;
use crate::dto::Payload;
use crate::entities::{OrderContext, OrderState, PlatformInfo, RequestContext};
use crate::errors::BuilderError;
use crate::services::mapping;

/// Builds the new-order payload: the full picture of a cart at checkout,
/// sent when the gateway first evaluates the order.
#[derive(Clone, Debug)]
pub struct OrderBuilder {
    state: BuilderState,
}

impl OrderBuilder {
    pub fn new(config: Arc<GatewayConfig>, platform: PlatformInfo) -> Self {
        Self {
            state: BuilderState::new(config, platform),
        }
    }
}

impl PayloadBuilder for OrderBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Order
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

        let merchant = self.state.merchant()?;
        // A freshly placed order enters the gateway as confirmed unless
        // the caller staged something else.
        let state = self.state.state.unwrap_or(OrderState::Confirmed);

        let (delivery_address, invoice_address) = self.state.addresses(order)?;
        let customer =
            mapping::map_customer(order.customer.as_ref(), order.customer_email.as_deref());
        let cart = self.state.build_cart(order)?;
        let delivery_method =
            mapping::map_delivery_method(order.shipping_method.as_deref(), &self.state.config);

        let default_request = RequestContext::default();
        let request = self.state.request.as_ref().unwrap_or(&default_request);

        info!(
            order = %order.increment_id,
            state = %state,
            items = cart.items.len(),
            "built new-order payload"
        );

        Ok(Payload {
            merchant,
            merchant_reference: Some(self.state.merchant_reference(order)),
            state: Some(state),
            delivery_address: Some(delivery_address),
            invoice_address: Some(invoice_address),
            customer: Some(customer),
            cart: Some(cart),
            delivery_method,
            gui: Some(mapping::map_gui(request)),
            platform: Some(mapping::map_platform(&self.state.platform)),
            orders: None,
        })
    }
}
