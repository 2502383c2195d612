//! Line-item table extraction.
//!
//! Two stages: isolate the table region between the `Seq No` and
//! `Sub Total` markers, then repeatedly match the row pattern inside it,
//! non-overlapping, in order of appearance. Text inside the region that
//! does not conform to the row shape is skipped silently - that tolerates
//! stray whitespace, page-break artifacts and subtotal-adjacent text.

use tracing::debug;

use crate::models::order::Product;

use super::collapse_whitespace;
use super::patterns::{ITEM_REGION, ITEM_ROW};

/// Locate the item table region: the text strictly between the first
/// `Seq No` marker and the first `Sub Total` marker that follows it.
/// Returns `None` when either marker is absent.
pub fn isolate_item_region(text: &str) -> Option<&str> {
    ITEM_REGION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract line items from document text, preserving document order.
///
/// Returns an empty list when the table region cannot be located or
/// contains no parseable rows; neither case is an error.
pub fn extract_line_items(text: &str) -> Vec<Product> {
    let Some(region) = isolate_item_region(text) else {
        debug!("item table markers not found, no line items");
        return Vec::new();
    };

    let items: Vec<Product> = ITEM_ROW
        .captures_iter(region)
        .map(|caps| Product {
            // Group 1 is the row's sequence number; matched and dropped.
            product_code: caps[2].trim().to_string(),
            description: collapse_whitespace(&caps[3]),
            quantity: caps[4].trim().to_string(),
            unit_price: caps[5].trim().to_string(),
            total_value: caps[6].trim().to_string(),
        })
        .collect();

    debug!("extracted {} line items", items.len());
    items
}
