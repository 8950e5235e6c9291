use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use riskgate_api::config::StoreSettings;
use riskgate_api::entities::{
    AddressRecord, CustomerRecord, OrderContext, OrderLine, OrderTotals, ProductRecord,
};
use riskgate_api::{GatewayConfig, PlatformInfo};

/// Gateway configuration with a root merchant, one store override and a
/// carrier title, matching a small multi-store deployment.
pub fn gateway_config() -> Arc<GatewayConfig> {
    let mut stores = HashMap::new();
    stores.insert(
        "2".to_string(),
        StoreSettings {
            merchant_ref: Some("merchant-pt".to_string()),
            user_secret: None,
        },
    );

    let mut carriers = HashMap::new();
    carriers.insert("ups".to_string(), "United Parcel Service".to_string());

    Arc::new(GatewayConfig {
        core: StoreSettings {
            merchant_ref: Some("merchant-es".to_string()),
            user_secret: Some("root-signing-secret".to_string()),
        },
        stores,
        carriers,
        ..Default::default()
    })
}

pub fn platform_info() -> PlatformInfo {
    PlatformInfo {
        name: "Stateset".to_string(),
        version: "1.4.2".to_string(),
        plugin_version: "0.3.0".to_string(),
        runtime_version: "1.75.0".to_string(),
        os: "Linux".to_string(),
        uname: "Linux commerce-1 6.1.0".to_string(),
        db_name: "postgres".to_string(),
        db_version: "16.2".to_string(),
    }
}

/// A realistic order: three product lines whose tax-inclusive row totals
/// were rounded per line, a coupon discount, a UPS shipment, and a
/// registered customer. The declared grand total sits one cent above the
/// line sum, the classic per-line tax-rounding artifact.
pub fn full_order() -> OrderContext {
    OrderContext {
        increment_id: "100000123".to_string(),
        entity_id: 4711,
        store_id: 1,
        currency: "EUR".to_string(),
        totals: OrderTotals {
            subtotal: dec!(82.63),
            subtotal_with_tax: dec!(99.99),
            tax: dec!(17.36),
            shipping: dec!(4.13),
            shipping_with_tax: dec!(4.99),
            discount: dec!(-8.26),
            discount_with_tax: dec!(-10.00),
            grand_total: dec!(78.50),
            grand_total_with_tax: dec!(94.99),
        },
        lines: vec![
            OrderLine {
                sku: "SKU-A".to_string(),
                name: "Ceramic Mug".to_string(),
                qty: 3,
                price_with_tax: dec!(11.11),
                row_total_with_tax: dec!(33.33),
                downloadable: false,
                product: Some(ProductRecord {
                    id: 101,
                    description: Some("Hand-glazed ceramic mug".to_string()),
                    url: Some("https://shop.example/mug".to_string()),
                }),
            },
            OrderLine {
                sku: "SKU-B".to_string(),
                name: "Linen Tote".to_string(),
                qty: 1,
                price_with_tax: dec!(33.33),
                row_total_with_tax: dec!(33.33),
                downloadable: false,
                product: None,
            },
            OrderLine {
                sku: "SKU-C".to_string(),
                name: "Field Guide (PDF)".to_string(),
                qty: 1,
                price_with_tax: dec!(33.33),
                row_total_with_tax: dec!(33.33),
                downloadable: true,
                product: None,
            },
        ],
        shipping_method: Some("ups_ground".to_string()),
        coupon_code: Some("WELCOME10".to_string()),
        shipping_address: Some(AddressRecord {
            firstname: Some("Ana".to_string()),
            lastname: Some("García".to_string()),
            company: None,
            street: vec!["Calle Mayor 1".to_string(), "3º B".to_string()],
            postcode: Some("28013".to_string()),
            city: Some("Madrid".to_string()),
            country_code: Some("ES".to_string()),
            region: Some("Madrid".to_string()),
            telephone: Some("+34 600 000 001".to_string()),
            fax: None,
            vat_id: None,
        }),
        billing_address: Some(AddressRecord {
            firstname: Some("Ana".to_string()),
            lastname: Some("García".to_string()),
            company: Some("García e Hijas SL".to_string()),
            street: vec!["Gran Vía 44".to_string()],
            postcode: Some("28013".to_string()),
            city: Some("Madrid".to_string()),
            country_code: Some("ES".to_string()),
            region: Some("Madrid".to_string()),
            telephone: Some("+34 600 000 001".to_string()),
            fax: Some("+34 600 000 002".to_string()),
            vat_id: Some("B87654321".to_string()),
        }),
        customer: Some(CustomerRecord {
            firstname: Some("Ana".to_string()),
            lastname: Some("García".to_string()),
            email: Some("ana@example.com".to_string()),
            company: Some("García e Hijas SL".to_string()),
            tax_vat: Some("B87654321".to_string()),
            dob: NaiveDate::from_ymd_opt(1988, 11, 23),
            id: Some(501),
            prefix: Some("Sra.".to_string()),
        }),
        customer_email: Some("ana@example.com".to_string()),
    }
}
