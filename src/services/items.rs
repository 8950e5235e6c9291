use tracing::debug;

use crate::config::GatewayConfig;
use crate::dto::LineItem;
use crate::entities::{OrderContext, OrderLine};
use crate::services::mapping::{self, not_null};
use crate::services::money::PriceConverter;

/// Name carried by the order-level discount line.
pub const DISCOUNT_NAME: &str = "Descuento";

/// Composes the cart's item list: product lines, then the order-level
/// discount (when one applies), then the handling charge (when a carrier
/// resolves). Downstream consumers rely on exactly this group order.
pub fn assemble(
    order: &OrderContext,
    config: &GatewayConfig,
    converter: PriceConverter,
) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = order
        .lines
        .iter()
        .map(|line| product_item(line, converter))
        .collect();
    items.extend(discount_item(order, converter));
    items.extend(handling_item(order, config, converter));

    debug!(
        order = %order.increment_id,
        items = items.len(),
        "assembled cart items"
    );
    items
}

fn product_item(line: &OrderLine, converter: PriceConverter) -> LineItem {
    // Optional catalog fields ride along only when a product record
    // resolved; within a record, absent text normalizes to empty string.
    let (description, product_id, url) = match &line.product {
        Some(product) => (
            Some(not_null(product.description.as_deref())),
            Some(product.id.to_string()),
            Some(not_null(product.url.as_deref())),
        ),
        None => (None, None, None),
    };

    LineItem::Product {
        reference: line.sku.clone(),
        name: line.name.clone(),
        description,
        product_id,
        url,
        quantity: line.qty,
        price_with_tax: converter.convert(line.price_with_tax),
        total_with_tax: converter.convert(line.row_total_with_tax),
        downloadable: line.downloadable,
    }
}

fn discount_item(order: &OrderContext, converter: PriceConverter) -> Option<LineItem> {
    let discount_with_tax = converter.convert(order.totals.discount_with_tax);
    if discount_with_tax >= 0 {
        return None;
    }

    Some(LineItem::Discount {
        reference: not_null(order.coupon_code.as_deref()),
        name: DISCOUNT_NAME.to_string(),
        total_with_tax: discount_with_tax,
    })
}

fn handling_item(
    order: &OrderContext,
    config: &GatewayConfig,
    converter: PriceConverter,
) -> Option<LineItem> {
    let method = mapping::map_delivery_method(order.shipping_method.as_deref(), config)?;

    Some(LineItem::Handling {
        reference: method.provider,
        name: method.name,
        total_with_tax: converter.convert(order.totals.shipping_with_tax),
    })
}
