//! Advisory arithmetic checks over an extracted order.
//!
//! Opt-in only: extraction itself performs no cross-validation between
//! header totals and line items, and these checks never alter the
//! extracted values. They parse the verbatim amount strings and report
//! mismatches as human-readable warnings.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::order::PurchaseOrder;

/// Check line-item arithmetic and the grand total against the item sum.
///
/// Returns one message per finding; an empty list means every parseable
/// amount was consistent. Values that do not parse as decimals are
/// reported rather than guessed at.
pub fn check_totals(order: &PurchaseOrder) -> Vec<String> {
    let mut findings = Vec::new();

    let Some(products) = order.products.as_ref() else {
        return findings;
    };

    let mut item_sum = Decimal::ZERO;
    let mut sum_complete = true;

    for (index, product) in products.iter().enumerate() {
        let row = index + 1;

        let quantity = parse_amount(&product.quantity);
        let unit_price = parse_amount(&product.unit_price);
        let total_value = parse_amount(&product.total_value);

        match total_value {
            Some(total) => item_sum += total,
            None => {
                sum_complete = false;
                findings.push(format!(
                    "row {row} ({}): unparseable total value {:?}",
                    product.product_code, product.total_value
                ));
            }
        }

        if let (Some(qty), Some(price), Some(total)) = (quantity, unit_price, total_value) {
            let expected = qty * price;
            if expected != total {
                findings.push(format!(
                    "row {row} ({}): {} x {} = {expected}, document says {total}",
                    product.product_code, product.quantity, product.unit_price
                ));
            }
        }
    }

    if let Some(grand_total) = order.header.grand_total.as_deref() {
        match parse_amount(grand_total) {
            Some(grand) if sum_complete => {
                // Documents with a separate VAT line legitimately differ by
                // exactly that amount; anything else is flagged.
                let vat = order
                    .header
                    .vat
                    .as_deref()
                    .and_then(parse_amount)
                    .unwrap_or(Decimal::ZERO);
                if grand != item_sum && grand != item_sum + vat {
                    findings.push(format!(
                        "grand total {grand} does not match item sum {item_sum} (vat {vat})"
                    ));
                }
            }
            Some(_) => {}
            None => {
                findings.push(format!("unparseable grand total {grand_total:?}"));
            }
        }
    }

    findings
}

/// Parse a verbatim amount string, dropping comma grouping.
fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', "")).ok()
}
