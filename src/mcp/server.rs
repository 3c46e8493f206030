//! UUC MCP Server Implementation
//!
//! Implements the MCP server with all UUC tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::convert::ConversionGraph;
use crate::tools::conversions;
use crate::tools::status::StatusTracker;

/// UUC MCP Service
#[derive(Clone)]
pub struct UucService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// Conversion graph shared by all tool calls. One coarse lock guards
    /// both queries and rule registration, since a query walks the adjacency
    /// structure a registration would mutate.
    graph: Arc<std::sync::Mutex<ConversionGraph>>,
    tool_router: ToolRouter<UucService>,
}

impl UucService {
    pub fn new(graph: ConversionGraph) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            graph: Arc::new(std::sync::Mutex::new(graph)),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Source unit name (e.g., "meter"); case-insensitive
    pub from_unit: String,
    /// Target unit name (e.g., "kilometer"); case-insensitive
    pub to_unit: String,
    /// Value to convert, expressed in the source unit
    pub value: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddConversionParams {
    /// Source unit name; created if not yet known
    pub from_unit: String,
    /// Target unit name; created if not yet known
    pub to_unit: String,
    /// Multiplicative factor (value_in_target = value_in_source * factor).
    /// Overwrites any existing rule for this exact pair.
    pub factor: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListConversionsParams {
    /// Only list rules whose source is this unit (optional)
    pub from_unit: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UucService {
    // --- Status ---

    #[tool(description = "Get the current status of the UUC service including build info, conversion graph size, and process information")]
    async fn uuc_status(&self) -> Result<CallToolResult, McpError> {
        let (unit_count, conversion_count) = {
            let graph = self.graph.lock().unwrap();
            (graph.unit_count(), graph.conversion_count())
        };

        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(unit_count, conversion_count);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for unit conversion. Call this when starting a conversion session or when unsure how to use the conversion tools.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Conversions ---

    #[tool(description = "Convert a value from one unit to another. Composes registered conversion rules when no direct rule exists; celsius/fahrenheit uses the affine temperature formula.")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let graph = self.graph.lock().unwrap();
        let result = conversions::convert_units(&graph, &p.from_unit, &p.to_unit, p.value)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Register or overwrite a conversion rule between two units. Rules are one-directional; register the reverse rule separately if needed.")]
    fn add_conversion(&self, Parameters(p): Parameters<AddConversionParams>) -> Result<CallToolResult, McpError> {
        let mut graph = self.graph.lock().unwrap();
        let result = conversions::add_conversion(&mut graph, &p.from_unit, &p.to_unit, p.factor)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List all registered unit names")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let graph = self.graph.lock().unwrap();
        let result = conversions::list_units(&graph);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List registered conversion rules, optionally filtered to rules out of one source unit")]
    fn list_conversions(&self, Parameters(p): Parameters<ListConversionsParams>) -> Result<CallToolResult, McpError> {
        let graph = self.graph.lock().unwrap();
        let result = conversions::list_conversions(&graph, p.from_unit.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UucService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "uuc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Universal Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Universal Unit Converter (UUC) - Converts values between named units over a \
                 directed graph of conversion rules. \
                 IMPORTANT: Call conversion_instructions before a conversion session. \
                 Convert: convert_units. \
                 Rules: add_conversion (one-directional, overwrites existing pair). \
                 Discovery: list_units, list_conversions. \
                 Status: uuc_status. \
                 celsius/fahrenheit is handled by the affine temperature formula, not a factor."
                    .into(),
            ),
        }
    }
}
