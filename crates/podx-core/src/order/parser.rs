//! Rule-based purchase-order parser.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::order::PurchaseOrder;

use super::rules::{extract_header, extract_line_items};

/// Result of purchase-order extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted order data.
    pub order: PurchaseOrder,
    /// Extraction warnings (missing fields, empty item table).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for purchase-order parsing.
///
/// Parsing is infallible by construction: missing or malformed data is
/// represented by omission, never by an error. Terminal failures belong to
/// the document reader, not here.
pub trait OrderParser {
    /// Parse a purchase order from flattened document text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser for purchase-order documents.
///
/// Runs the header extractor and the line-item extractor over the same
/// text; the two are independent and order-insensitive. Each call is a
/// pure, deterministic computation over the input string, so one parser
/// can be shared across threads for independent documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoParser;

impl PoParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl OrderParser for PoParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("parsing purchase order from {} characters of text", text.len());

        let header = extract_header(text);
        let items = extract_line_items(text);

        let mut warnings: Vec<String> = header
            .missing_fields()
            .iter()
            .map(|field| format!("could not extract {field}"))
            .collect();

        // An empty item list is represented by omitting the key entirely.
        let products = if items.is_empty() {
            warnings.push("could not extract line items".to_string());
            None
        } else {
            Some(items)
        };

        let order = PurchaseOrder { header, products };

        debug!(
            "extracted {} header fields and {} line items",
            6 - order.header.missing_fields().len(),
            order.product_count()
        );

        ExtractionResult {
            order,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Purchase Order
P/O No: PO2712/24
Date: 01/02/2024
To: Acme
  Supplies Ltd
Delivery Date: 15/02/2024

Seq No Product Description Qty Unit Price Total
1 ABC/1 Widget kit 10 NOS 2.50 25.00
2 DEF/2 Gadget housing,
anodized 4 NOS 50.00 200.00
Sub Total 225.00
SVAT18 18.00% 40.50
Grand Total 265.50
";

    #[test]
    fn parses_complete_document() {
        let result = PoParser::new().parse(SAMPLE);
        let order = &result.order;

        assert_eq!(order.header.po_number.as_deref(), Some("PO2712/24"));
        assert_eq!(order.header.date.as_deref(), Some("01/02/2024"));
        assert_eq!(order.header.supplier.as_deref(), Some("Acme Supplies Ltd"));
        assert_eq!(order.header.delivery_date.as_deref(), Some("15/02/2024"));
        assert_eq!(order.header.grand_total.as_deref(), Some("265.50"));
        assert_eq!(order.header.vat.as_deref(), Some("40.50"));

        let products = order.products.as_ref().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].description, "Gadget housing, anodized");
        assert_eq!(products[1].total_value, "200.00");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unrecognizable_text_yields_empty_order() {
        let result = PoParser::new().parse("completely unrelated prose");
        assert!(result.order.is_empty());
        assert_eq!(
            serde_json::to_value(&result.order).unwrap(),
            serde_json::json!({})
        );
        // One warning per header field plus one for the item table.
        assert_eq!(result.warnings.len(), 7);
    }

    #[test]
    fn extraction_is_idempotent() {
        let parser = PoParser::new();
        let a = serde_json::to_string(&parser.parse(SAMPLE).order).unwrap();
        let b = serde_json::to_string(&parser.parse(SAMPLE).order).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_region_omits_products_key() {
        let result = PoParser::new().parse("P/O No: PO123/24\nDate: 01/02/2024\n");
        assert_eq!(result.order.products, None);
        let json = serde_json::to_value(&result.order).unwrap();
        assert!(json.get("products").is_none());
    }

    #[test]
    fn header_and_items_are_independent() {
        // No header labels at all, but a valid item table.
        let text = "Seq No\n1 ABC/1 Widget kit 10 NOS 2.50 25.00\nSub Total";
        let result = PoParser::new().parse(text);
        assert!(result.order.header.is_empty());
        assert_eq!(result.order.product_count(), 1);
    }

    #[test]
    fn serialized_keys_match_the_wire_contract() {
        let result = PoParser::new().parse(SAMPLE);
        let json = serde_json::to_value(&result.order).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "po_number",
            "date",
            "supplier",
            "delivery_date",
            "grand_total",
            "vat",
            "products",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        let product = json["products"][0].as_object().unwrap();
        for key in ["product_code", "description", "quantity", "unit_price", "total_value"] {
            assert!(product.contains_key(key), "missing product key {key}");
        }
        // The row sequence number is not surfaced.
        assert!(!product.contains_key("seq_no"));
    }
}
