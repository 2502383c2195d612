//! Data models for purchase-order extraction.

pub mod config;
pub mod order;
