//! Header field extraction.
//!
//! Six independent label-anchored lookups over the whole document text.
//! Each uses the first match in document order; no field's lookup depends
//! on another field's match location. A field whose pattern does not match
//! is omitted - that is not an error.

use crate::models::order::OrderHeader;

use super::collapse_whitespace;
use super::patterns::{DELIVERY_DATE, GRAND_TOTAL, ORDER_DATE, PO_NUMBER, SUPPLIER, VAT};

/// Extract all recognized header fields from document text.
///
/// Every captured value is trimmed. The supplier value additionally has
/// internal whitespace runs (including embedded newlines) collapsed to
/// single spaces, since it is the one field that may span physical lines.
pub fn extract_header(text: &str) -> OrderHeader {
    OrderHeader {
        po_number: capture(&PO_NUMBER, text),
        date: capture(&ORDER_DATE, text),
        supplier: capture(&SUPPLIER, text).map(|v| collapse_whitespace(&v)),
        delivery_date: capture(&DELIVERY_DATE, text),
        grand_total: capture(&GRAND_TOTAL, text),
        vat: capture(&VAT, text),
    }
}

/// First match of `pattern` against `text`, group 1, trimmed.
fn capture(pattern: &regex::Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_po_number() {
        let header = extract_header("P/O No: PO123/24\n");
        assert_eq!(header.po_number.as_deref(), Some("PO123/24"));
    }

    #[test]
    fn extracts_all_six_fields() {
        let text = "\
P/O No: PO2712/24
Date: 01/02/2024
To: Acme
  Supplies Ltd
Delivery Date: 15/02/2024
Grand Total 1,234.50
SVAT18 18.00% 188.31
";
        let header = extract_header(text);
        assert_eq!(header.po_number.as_deref(), Some("PO2712/24"));
        assert_eq!(header.date.as_deref(), Some("01/02/2024"));
        assert_eq!(header.supplier.as_deref(), Some("Acme Supplies Ltd"));
        assert_eq!(header.delivery_date.as_deref(), Some("15/02/2024"));
        assert_eq!(header.grand_total.as_deref(), Some("1,234.50"));
        assert_eq!(header.vat.as_deref(), Some("188.31"));
    }

    #[test]
    fn supplier_whitespace_is_collapsed() {
        let header = extract_header("To: Acme\n  Supplies   Ltd\nDelivery Date: 15/02/2024");
        assert_eq!(header.supplier.as_deref(), Some("Acme Supplies Ltd"));
    }

    #[test]
    fn label_and_value_may_be_split_across_lines() {
        // The date anchor tolerates the value on the same line only; the
        // supplier anchor crosses line breaks via (?s).
        let header = extract_header("To:\n  Acme Supplies\nGrand Total 10.00");
        assert_eq!(header.supplier.as_deref(), Some("Acme Supplies"));
    }

    #[test]
    fn date_anchor_takes_first_match_in_document_order() {
        // `Date` also anchors inside `Delivery Date`, so when the delivery
        // line comes first both fields read it. Reference behavior.
        let text = "Delivery Date: 15/02/2024\nDate: 01/02/2024\n";
        let header = extract_header(text);
        assert_eq!(header.date.as_deref(), Some("15/02/2024"));
        assert_eq!(header.delivery_date.as_deref(), Some("15/02/2024"));
    }

    #[test]
    fn grand_total_kept_verbatim_with_comma() {
        let header = extract_header("Grand Total 1,234.50");
        assert_eq!(header.grand_total.as_deref(), Some("1,234.50"));
    }

    #[test]
    fn unmatched_fields_are_none() {
        let header = extract_header("nothing recognizable here");
        assert!(header.is_empty());
    }

    #[test]
    fn vat_requires_the_literal_rate_token() {
        let header = extract_header("SVAT18 18.00% 188.31");
        assert_eq!(header.vat.as_deref(), Some("188.31"));

        let header = extract_header("SVAT18 8.00% 188.31");
        assert_eq!(header.vat, None);
    }
}
