//! Rule-based field extractors for purchase-order text.

pub mod header;
pub mod items;
pub mod patterns;

pub use header::extract_header;
pub use items::{extract_line_items, isolate_item_region};
pub use patterns::*;

/// Collapse every internal whitespace run (spaces, tabs, newlines) to a
/// single space and trim the ends. Used for the fields that may wrap
/// across physical lines in the source text.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_handles_newlines_and_runs() {
        assert_eq!(collapse_whitespace("Acme\nSupplies   Ltd "), "Acme Supplies Ltd");
        assert_eq!(collapse_whitespace("  one\t\ntwo  "), "one two");
        assert_eq!(collapse_whitespace(""), "");
    }
}
