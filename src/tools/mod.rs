//! UUC Tools module
//!
//! MCP tool implementations for the Universal Unit Converter.

pub mod conversions;
pub mod status;
