use chrono::NaiveDate;

use crate::config::GatewayConfig;
use crate::dto::{Address, Customer, DeliveryMethod, Gui, Platform};
use crate::entities::{AddressRecord, CustomerRecord, PlatformInfo, RequestContext};
use crate::services::classify;

/// Method label used when a shipping method code has no suffix.
pub const DEFAULT_DELIVERY_NAME: &str = "Envío";

/// Honorific titles the gateway understands, keyed by the normalized
/// host-platform prefix. Unrecognized titles pass through unchanged.
const TITLE_TABLE: [(&str, &str); 5] = [
    ("sra", "mrs"),
    ("dña", "mrs"),
    ("srta", "miss"),
    ("sr", "mr"),
    ("d", "mr"),
];

/// Wire normalization: absent becomes the empty string, never null.
pub fn not_null(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// `YYYY-MM-DD` for the gateway's date fields.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Joins two street lines as `"first, second"`; empty lines count as
/// absent.
fn join_street_pair(first: Option<&String>, second: Option<&String>) -> String {
    match (
        first.filter(|s| !s.is_empty()),
        second.filter(|s| !s.is_empty()),
    ) {
        (Some(first), Some(second)) => format!("{}, {}", first, second),
        (Some(first), None) => first.clone(),
        (None, Some(second)) => second.clone(),
        (None, None) => String::new(),
    }
}

/// Maps a stored address onto the gateway's address block.
///
/// Up to four street lines collapse pairwise into the two address lines
/// the gateway accepts.
pub fn map_address(record: &AddressRecord) -> Address {
    Address {
        given_names: not_null(record.firstname.as_deref()),
        surnames: not_null(record.lastname.as_deref()),
        company: not_null(record.company.as_deref()),
        address_line_1: join_street_pair(record.street.first(), record.street.get(1)),
        address_line_2: join_street_pair(record.street.get(2), record.street.get(3)),
        postal_code: not_null(record.postcode.as_deref()),
        city: not_null(record.city.as_deref()),
        country_code: not_null(record.country_code.as_deref()),
        state: not_null(record.region.as_deref()),
        phone: not_null(record.telephone.as_deref()),
        mobile_phone: not_null(record.fax.as_deref()),
        vat_number: not_null(record.vat_id.as_deref()),
    }
}

/// Normalizes an honorific prefix: lower-cased, stripped of periods,
/// then translated through the gateway's title table. Titles outside the
/// table pass through unchanged.
pub fn normalize_title(raw: &str) -> String {
    let normalized = raw.trim().trim_matches('.').to_lowercase();
    TITLE_TABLE
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(normalized)
}

/// Maps the customer record onto the gateway's customer block.
///
/// The email falls back to the order-level stored email when the record
/// carries none; the tax id is duplicated into both the VAT and
/// national-id fields the gateway accepts.
pub fn map_customer(record: Option<&CustomerRecord>, order_email: Option<&str>) -> Customer {
    let record = record.cloned().unwrap_or_default();

    let mut email = not_null(record.email.as_deref());
    if email.is_empty() {
        email = not_null(order_email);
    }

    Customer {
        given_names: not_null(record.firstname.as_deref()),
        surnames: not_null(record.lastname.as_deref()),
        email,
        company: record.company,
        vat_number: record.tax_vat.clone(),
        nin: record.tax_vat,
        date_of_birth: record.dob.map(format_date),
        reference: record.id.map(|id| id.to_string()).unwrap_or_default(),
        title: record
            .prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(normalize_title),
    }
}

/// Resolves the delivery method from a composite shipping method code.
///
/// The code splits on the first underscore into carrier and method
/// suffix. No carrier means the order has no delivery provider and no
/// handling item is emitted at all.
pub fn map_delivery_method(
    shipping_method: Option<&str>,
    config: &GatewayConfig,
) -> Option<DeliveryMethod> {
    let method = shipping_method.unwrap_or_default();
    let mut parts = method.splitn(2, '_');
    let provider = parts.next().unwrap_or_default();
    if provider.is_empty() {
        return None;
    }

    Some(DeliveryMethod {
        name: parts
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_DELIVERY_NAME.to_string()),
        days: not_null(config.carrier_title(provider)),
        provider: provider.to_string(),
    })
}

/// GUI block for the buyer's device.
pub fn map_gui(request: &RequestContext) -> Gui {
    Gui {
        layout: classify::layout_for(request),
    }
}

/// Platform block from host-application metadata.
pub fn map_platform(info: &PlatformInfo) -> Platform {
    Platform {
        name: info.name.clone(),
        version: info.version.clone(),
        plugin_version: info.plugin_version.clone(),
        runtime_version: info.runtime_version.clone(),
        os: info.os.clone(),
        uname: info.uname.clone(),
        db_name: info.db_name.clone(),
        db_version: info.db_version.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn address_record(street: &[&str]) -> AddressRecord {
        AddressRecord {
            firstname: Some("Ana".to_string()),
            lastname: Some("García".to_string()),
            street: street.iter().map(|s| s.to_string()).collect(),
            postcode: Some("28001".to_string()),
            city: Some("Madrid".to_string()),
            country_code: Some("ES".to_string()),
            ..Default::default()
        }
    }

    // ==================== Address mapping ====================

    #[test]
    fn test_street_lines_join_pairwise() {
        let mapped = map_address(&address_record(&["Main St", "Apt 4", "", ""]));
        assert_eq!(mapped.address_line_1, "Main St, Apt 4");
        assert_eq!(mapped.address_line_2, "");
    }

    #[test]
    fn test_single_street_line() {
        let mapped = map_address(&address_record(&["Main St"]));
        assert_eq!(mapped.address_line_1, "Main St");
        assert_eq!(mapped.address_line_2, "");
    }

    #[test]
    fn test_four_street_lines() {
        let mapped = map_address(&address_record(&["A", "B", "C", "D"]));
        assert_eq!(mapped.address_line_1, "A, B");
        assert_eq!(mapped.address_line_2, "C, D");
    }

    #[test]
    fn test_absent_address_fields_become_empty_strings() {
        let mapped = map_address(&AddressRecord::default());
        assert_eq!(mapped.given_names, "");
        assert_eq!(mapped.company, "");
        assert_eq!(mapped.vat_number, "");
        assert_eq!(mapped.address_line_1, "");
    }

    // ==================== Title normalization ====================

    #[test_case("Sra.", "mrs")]
    #[test_case("DÑA.", "mrs")]
    #[test_case("Srta.", "miss")]
    #[test_case("Sr.", "mr"; "sr with period")]
    #[test_case("D.", "mr")]
    #[test_case("sr", "mr"; "sr without period")]
    fn test_known_titles_are_translated(raw: &str, expected: &str) {
        assert_eq!(normalize_title(raw), expected);
    }

    #[test_case("Dr.", "dr")]
    #[test_case("Prof.", "prof")]
    fn test_unknown_titles_pass_through_normalized(raw: &str, expected: &str) {
        assert_eq!(normalize_title(raw), expected);
    }

    // ==================== Customer mapping ====================

    #[test]
    fn test_customer_email_falls_back_to_order_email() {
        let record = CustomerRecord {
            firstname: Some("Ana".to_string()),
            email: None,
            ..Default::default()
        };
        let mapped = map_customer(Some(&record), Some("ana@example.com"));
        assert_eq!(mapped.email, "ana@example.com");

        let record = CustomerRecord {
            email: Some("stored@example.com".to_string()),
            ..Default::default()
        };
        let mapped = map_customer(Some(&record), Some("ana@example.com"));
        assert_eq!(mapped.email, "stored@example.com");
    }

    #[test]
    fn test_tax_id_feeds_both_vat_and_nin() {
        let record = CustomerRecord {
            tax_vat: Some("B12345678".to_string()),
            ..Default::default()
        };
        let mapped = map_customer(Some(&record), None);
        assert_eq!(mapped.vat_number.as_deref(), Some("B12345678"));
        assert_eq!(mapped.nin.as_deref(), Some("B12345678"));
    }

    #[test]
    fn test_absent_optionals_stay_absent() {
        let mapped = map_customer(Some(&CustomerRecord::default()), None);
        assert!(mapped.company.is_none());
        assert!(mapped.vat_number.is_none());
        assert!(mapped.date_of_birth.is_none());
        assert!(mapped.title.is_none());
        assert_eq!(mapped.reference, "");
    }

    #[test]
    fn test_date_of_birth_iso_format() {
        let record = CustomerRecord {
            dob: NaiveDate::from_ymd_opt(1985, 3, 7),
            ..Default::default()
        };
        let mapped = map_customer(Some(&record), None);
        assert_eq!(mapped.date_of_birth.as_deref(), Some("1985-03-07"));
    }

    #[test]
    fn test_guest_checkout_has_no_customer_record() {
        let mapped = map_customer(None, Some("guest@example.com"));
        assert_eq!(mapped.email, "guest@example.com");
        assert_eq!(mapped.given_names, "");
    }

    // ==================== Delivery method ====================

    #[test]
    fn test_delivery_method_splits_on_first_underscore() {
        let mut config = GatewayConfig::default();
        config
            .carriers
            .insert("ups".to_string(), "United Parcel Service".to_string());

        let method = map_delivery_method(Some("ups_ground_saver"), &config).unwrap();
        assert_eq!(method.provider, "ups");
        assert_eq!(method.name, "ground_saver");
        assert_eq!(method.days, "United Parcel Service");
    }

    #[test]
    fn test_delivery_method_without_suffix_gets_default_name() {
        let config = GatewayConfig::default();
        let method = map_delivery_method(Some("flatrate"), &config).unwrap();
        assert_eq!(method.provider, "flatrate");
        assert_eq!(method.name, DEFAULT_DELIVERY_NAME);
        assert_eq!(method.days, "");
    }

    #[test]
    fn test_missing_shipping_method_resolves_to_none() {
        let config = GatewayConfig::default();
        assert!(map_delivery_method(None, &config).is_none());
        assert!(map_delivery_method(Some(""), &config).is_none());
    }
}
