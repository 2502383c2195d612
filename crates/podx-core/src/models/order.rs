//! Purchase-order data models.
//!
//! All field values are kept verbatim as captured from the document text:
//! dates stay in their `DD/MM/YYYY` form and amounts keep their comma
//! grouping. Absent fields are `None` and are omitted from serialized
//! output rather than defaulted to empty strings.

use serde::{Deserialize, Serialize};

/// Header metadata extracted from a purchase-order document.
///
/// Each field is independent: one failing to match does not affect the
/// others. Fields appear in serialized output only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHeader {
    /// Purchase-order number (e.g. "PO123/24").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    /// Order date, verbatim DD/MM/YYYY.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Supplier name, whitespace-collapsed (the one field that may span
    /// multiple physical lines in the source).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Delivery date, verbatim DD/MM/YYYY.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    /// Grand total, verbatim amount string (e.g. "1,234.50").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<String>,

    /// VAT amount from the SVAT18 18.00% line, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
}

impl OrderHeader {
    /// Names of header fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.po_number.is_none() {
            missing.push("po_number");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.supplier.is_none() {
            missing.push("supplier");
        }
        if self.delivery_date.is_none() {
            missing.push("delivery_date");
        }
        if self.grand_total.is_none() {
            missing.push("grand_total");
        }
        if self.vat.is_none() {
            missing.push("vat");
        }
        missing
    }

    /// Check whether no header field matched at all.
    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == 6
    }
}

/// A single line item from the order's product table.
///
/// The row's sequence number is matched during extraction but deliberately
/// not carried on this record; row ordering is the list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code (uppercase letters, digits, `/`).
    pub product_code: String,

    /// Description, whitespace-collapsed (may wrap across lines in the
    /// source).
    pub description: String,

    /// Quantity, verbatim numeric string.
    pub quantity: String,

    /// Unit price, verbatim numeric string.
    pub unit_price: String,

    /// Total value, verbatim amount string with two fraction digits.
    pub total_value: String,
}

/// Complete extraction result for one document.
///
/// Serializes to a flat JSON object: the header fields first, then a
/// `products` array that is present if and only if at least one line item
/// matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Header metadata, flattened into the top-level object.
    #[serde(flatten)]
    pub header: OrderHeader,

    /// Line items in document order. `None` (key omitted) when the item
    /// table was not found or contained no parseable rows - never an empty
    /// list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl PurchaseOrder {
    /// Number of extracted line items.
    pub fn product_count(&self) -> usize {
        self.products.as_ref().map_or(0, Vec::len)
    }

    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.products.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let order = PurchaseOrder {
            header: OrderHeader {
                po_number: Some("PO123/24".to_string()),
                ..OrderHeader::default()
            },
            products: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json, serde_json::json!({ "po_number": "PO123/24" }));
    }

    #[test]
    fn products_key_present_only_with_items() {
        let mut order = PurchaseOrder::default();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json, serde_json::json!({}));

        order.products = Some(vec![Product {
            product_code: "ABC/1".to_string(),
            description: "Widget kit".to_string(),
            quantity: "10".to_string(),
            unit_price: "2.50".to_string(),
            total_value: "25.00".to_string(),
        }]);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["products"][0]["product_code"], "ABC/1");
    }

    #[test]
    fn missing_fields_lists_unmatched_names() {
        let header = OrderHeader {
            date: Some("01/02/2024".to_string()),
            grand_total: Some("1,234.50".to_string()),
            ..OrderHeader::default()
        };
        assert_eq!(
            header.missing_fields(),
            vec!["po_number", "supplier", "delivery_date", "vat"]
        );
    }
}
