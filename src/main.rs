//! Universal Unit Converter (UUC)
//!
//! An MCP server for unit conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod convert;
mod mcp;
mod tools;

use convert::ConversionGraph;
use mcp::UucService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("uuc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Load the standard unit set
    let graph = ConversionGraph::with_standard_units();
    eprintln!(
        "Loaded {} units with {} conversion rules",
        graph.unit_count(),
        graph.conversion_count()
    );

    // Create the UUC service
    let service = UucService::new(graph);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
