//! Purchase-order field extraction module.

mod parser;
pub mod rules;
pub mod validate;

pub use parser::{ExtractionResult, OrderParser, PoParser};
pub use validate::check_totals;
