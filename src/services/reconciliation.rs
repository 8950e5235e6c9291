use tracing::{debug, warn};

use crate::dto::LineItem;

/// Reference and name carried by a rounding-adjustment line.
pub const ADJUSTMENT_REFERENCE: &str = "Ajuste";

/// Sum of line totals-with-tax in minor units.
pub fn line_total_sum(items: &[LineItem]) -> i64 {
    items.iter().map(LineItem::total_with_tax).sum()
}

/// Reconciles per-line tax-rounding drift against the declared cart total.
///
/// Tax-inclusive line totals are rounded per line by the host platform,
/// so their sum can disagree with the independently stored cart total by
/// up to one minor unit per line. Such drift is absorbed by appending an
/// adjustment line (`"Ajuste"`), a discount when the lines overshoot and
/// a handling charge when they fall short.
///
/// Anything larger than one minor unit per line is a genuine mismatch,
/// not rounding noise: the items are returned unchanged so the caller can
/// surface the discrepancy instead of masking it.
pub fn reconcile(declared_total_with_tax: i64, mut items: Vec<LineItem>) -> Vec<LineItem> {
    let drift = declared_total_with_tax - line_total_sum(&items);
    if drift == 0 {
        return items;
    }

    if drift.unsigned_abs() > items.len() as u64 {
        warn!(
            drift,
            lines = items.len(),
            "cart total drift exceeds one minor unit per line, leaving items unreconciled"
        );
        return items;
    }

    let adjustment = if drift < 0 {
        LineItem::Discount {
            reference: ADJUSTMENT_REFERENCE.to_string(),
            name: ADJUSTMENT_REFERENCE.to_string(),
            total_with_tax: drift,
        }
    } else {
        LineItem::Handling {
            reference: ADJUSTMENT_REFERENCE.to_string(),
            name: ADJUSTMENT_REFERENCE.to_string(),
            total_with_tax: drift,
        }
    };

    debug!(drift, "appended rounding adjustment line");
    items.push(adjustment);
    items
}
