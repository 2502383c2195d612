//! Compiled regex patterns for purchase-order extraction.
//!
//! Every header pattern is label-anchored and applied to the entire
//! document text; the first match in document order wins. `(?s)` makes `.`
//! match newlines, so labels and values separated by line breaks still
//! match. Labels are case-sensitive with an optional colon and variable
//! surrounding space.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Order number: run of uppercase letters, digits and `/`, terminated
    /// by the first whitespace.
    pub static ref PO_NUMBER: Regex = Regex::new(
        r"P/O No\s*:? *([A-Z0-9/]+)"
    ).unwrap();

    /// Order date, fixed-width DD/MM/YYYY. Note this anchor also matches
    /// inside a `Delivery Date` label if that appears first; the behavior
    /// is intentional and matched to the reference extraction.
    pub static ref ORDER_DATE: Regex = Regex::new(
        r"Date\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    /// Supplier: free text after `To:`, possibly spanning several lines,
    /// running up to the first line break that is immediately followed by a
    /// non-whitespace character (the start of the next block). The boundary
    /// is consumed rather than looked ahead at; only group 1 is read and
    /// only the first match is taken, so the captured value is identical.
    pub static ref SUPPLIER: Regex = Regex::new(
        r"(?s)To\s*:\s*(.*?)\n\S"
    ).unwrap();

    /// Delivery date, fixed-width DD/MM/YYYY.
    pub static ref DELIVERY_DATE: Regex = Regex::new(
        r"Delivery Date\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    /// Grand total: digits with optional comma grouping, exactly two
    /// fraction digits.
    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"Grand Total\s*([\d,]+\.\d{2})"
    ).unwrap();

    /// VAT amount on the `SVAT18 18.00%` line.
    pub static ref VAT: Regex = Regex::new(
        r"SVAT18\s*18\.00%\s*([\d,]+\.\d{2})"
    ).unwrap();

    /// Item table region: everything strictly between the first `Seq No`
    /// marker (flexible internal whitespace) and the first `Sub Total`
    /// marker that follows it.
    pub static ref ITEM_REGION: Regex = Regex::new(
        r"(?s)Seq\s*No(.*?)Sub Total"
    ).unwrap();

    /// One item row: sequence number, product code, lazy multi-line
    /// description, quantity suffixed by the literal unit token `NOS`,
    /// unit price, and the two-decimal total value that terminates the
    /// row. The lazy description takes the shortest expansion that lets
    /// the fixed-shape tail match, so a numeral inside the description
    /// cannot swallow the quantity.
    pub static ref ITEM_ROW: Regex = Regex::new(
        r"(?s)(\d+)\s+([A-Z0-9/]+)\s+(.*?)\s+([\d,.]+)\s+NOS\s+([\d.]+)\s+([\d,]+\.\d{2})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn po_number_stops_at_whitespace() {
        let caps = PO_NUMBER.captures("P/O No: PO123/24 something").unwrap();
        assert_eq!(&caps[1], "PO123/24");
    }

    #[test]
    fn po_number_colon_is_optional() {
        let caps = PO_NUMBER.captures("P/O No PO999").unwrap();
        assert_eq!(&caps[1], "PO999");
    }

    #[test]
    fn supplier_value_spans_indented_continuation_lines() {
        let caps = SUPPLIER.captures("To: Acme\n  Supplies Ltd\nNextBlock:").unwrap();
        assert_eq!(&caps[1], "Acme\n  Supplies Ltd");
    }

    #[test]
    fn supplier_value_ends_at_flush_left_line() {
        let caps = SUPPLIER.captures("To: Acme\nNextBlock:").unwrap();
        assert_eq!(&caps[1], "Acme");
    }

    #[test]
    fn grand_total_keeps_comma_grouping() {
        let caps = GRAND_TOTAL.captures("Grand Total 1,234.50").unwrap();
        assert_eq!(&caps[1], "1,234.50");
    }

    #[test]
    fn region_marker_allows_internal_whitespace() {
        assert!(ITEM_REGION.is_match("Seq  No\nrows here\nSub Total"));
        assert!(ITEM_REGION.is_match("SeqNo\nrows\nSub Total"));
    }
}
