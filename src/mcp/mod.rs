//! MCP server module
//!
//! Exposes the conversion engine over the Model Context Protocol.

mod server;

pub use server::UucService;
