//! Core library for purchase-order document extraction.
//!
//! This crate provides:
//! - PDF text reading (pages flattened into a single string)
//! - Rule-based extraction of order metadata (order number, dates, supplier, totals)
//! - Line-item table extraction (product code, description, quantity, prices)
//! - Serializable order data models

pub mod error;
pub mod models;
pub mod order;
pub mod pdf;

pub use error::{PodxError, Result};
pub use models::order::{Product, PurchaseOrder};
pub use order::{ExtractionResult, OrderParser, PoParser};
pub use pdf::{PdfProcessor, PdfReader};
