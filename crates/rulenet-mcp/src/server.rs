//! `graph_search` MCP server.

use std::collections::BTreeMap;
use std::future::Future;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, PaginatedRequestParam, Prompt, PromptArgument, PromptMessage,
        PromptMessageContent, PromptMessageRole, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use rulenet_core::cypher::{ensure_limit, is_read_only, truncate_for_log};
use rulenet_core::McpSettings;
use rulenet_graph::{GraphClient, GraphError};

use crate::prompt::{render_agent_prompt, PROMPT_NAME, QUESTION_ARGUMENT};

pub const SERVER_NAME: &str = "graph_search";

pub const NAME_PROPERTY_RULE: &str =
    "Use `label` property for node names (n.label CONTAINS '...') when present.";
pub const REFUSED: &str = "Refused: only read-only Cypher is allowed.";
pub const NO_RESULTS: &str = "No results found.";

const DEFAULT_SAMPLE_LIMIT: u32 = 5;

const INSTRUCTIONS: &str = "Read-only access to a Neo4j knowledge graph. \
Call get_graph_schema first, then query_runner with plain Cypher. \
The cypher_agent_prompt prompt describes the full workflow.";

#[derive(Deserialize, JsonSchema)]
struct SampleNodesRequest {
    /// Node label to sample (exact, case-sensitive)
    label: String,
    /// Number of nodes to return (default 5)
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Deserialize, JsonSchema)]
struct QueryRunnerRequest {
    /// Read-only Cypher query, without markdown fences
    cypher_q: String,
}

/// Schema report returned by `get_graph_schema`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSchema {
    pub labels: Vec<String>,
    pub relationship_types: Vec<String>,
    pub property_keys: Vec<String>,
    pub label_properties: BTreeMap<String, Vec<String>>,
    pub name_property_rule: String,
}

#[derive(Clone)]
pub struct GraphSearchServer {
    graph: GraphClient,
    settings: McpSettings,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GraphSearchServer {
    pub fn new(graph: GraphClient, settings: McpSettings) -> Self {
        Self {
            graph,
            settings,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Returns graph schema info: node labels, relationship types, and common properties (best-effort)."
    )]
    async fn get_graph_schema(&self) -> Result<CallToolResult, McpError> {
        let labels = self.graph.labels().await.map_err(tool_error)?;
        let relationship_types = self.graph.relationship_types().await.map_err(tool_error)?;
        let property_keys = self.graph.property_keys().await.map_err(tool_error)?;

        let mut label_properties = BTreeMap::new();
        for label in labels.iter().take(self.settings.schema_label_cap) {
            let keys = self
                .graph
                .label_property_keys(
                    label,
                    self.settings.schema_sample_size,
                    self.settings.schema_property_cap,
                )
                .await
                .map_err(tool_error)?;
            label_properties.insert(label.clone(), keys);
        }

        let schema = GraphSchema {
            labels,
            relationship_types,
            property_keys,
            label_properties,
            name_property_rule: NAME_PROPERTY_RULE.to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(pretty(&schema)?)]))
    }

    #[tool(description = "Returns node/edge counts.")]
    async fn get_graph_stats(&self) -> Result<CallToolResult, McpError> {
        let nodes = self.graph.count_nodes().await.map_err(tool_error)?;
        let edges = self.graph.count_relationships().await.map_err(tool_error)?;
        let stats = json!({ "nodeCount": nodes, "edgeCount": edges });
        Ok(CallToolResult::success(vec![Content::text(pretty(&stats)?)]))
    }

    #[tool(description = "Returns sample nodes for a given label. Optional: limit (default 5).")]
    async fn sample_nodes(
        &self,
        params: Parameters<SampleNodesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;
        let limit = clamp_sample_limit(request.limit, self.settings.sample_limit_max);
        let nodes = self
            .graph
            .sample_nodes(&request.label, limit)
            .await
            .map_err(tool_error)?;
        Ok(CallToolResult::success(vec![Content::text(pretty(&nodes)?)]))
    }

    #[tool(description = "Runs READ-ONLY Cypher and returns results, one JSON row per line.")]
    async fn query_runner(
        &self,
        params: Parameters<QueryRunnerRequest>,
    ) -> Result<CallToolResult, McpError> {
        let Some(cypher) = prepare_query(&params.0.cypher_q, self.settings.default_row_limit)
        else {
            tracing::warn!(
                query = %truncate_for_log(&params.0.cypher_q, 120),
                "Refused write query"
            );
            return Ok(CallToolResult::success(vec![Content::text(REFUSED)]));
        };

        tracing::debug!(query = %truncate_for_log(&cypher, 120), "Running agent query");
        let rows = self.graph.read_rows(&cypher).await.map_err(tool_error)?;
        Ok(CallToolResult::success(vec![Content::text(format_rows(&rows))]))
    }
}

#[tool_handler]
impl ServerHandler for GraphSearchServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListPromptsResult {
                prompts: vec![Prompt {
                    name: PROMPT_NAME.to_string(),
                    title: Some("Cypher agent".to_string()),
                    description: Some(
                        "Turn a natural-language question into read-only Cypher using the graph tools."
                            .to_string(),
                    ),
                    arguments: Some(vec![PromptArgument {
                        name: QUESTION_ARGUMENT.to_string(),
                        title: None,
                        description: Some("The question to answer from the graph".to_string()),
                        required: Some(true),
                    }]),
                    icons: None,
                }],
                next_cursor: None,
            })
        }
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move {
            if request.name != PROMPT_NAME {
                return Err(McpError::invalid_params(
                    format!("Unknown prompt: {}", request.name),
                    None,
                ));
            }

            let question = request
                .arguments
                .as_ref()
                .and_then(|args| args.get(QUESTION_ARGUMENT))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    McpError::invalid_params(
                        format!("Missing required argument: {QUESTION_ARGUMENT}"),
                        None,
                    )
                })?;

            Ok(GetPromptResult {
                description: Some("Cypher query generation for a Neo4j knowledge graph".to_string()),
                messages: vec![PromptMessage {
                    role: PromptMessageRole::User,
                    content: PromptMessageContent::text(render_agent_prompt(question)),
                }],
            })
        }
    }
}

/// Guard and bound an agent query. `None` means the query writes.
pub fn prepare_query(cypher: &str, default_limit: u32) -> Option<String> {
    if !is_read_only(cypher) {
        return None;
    }
    Some(ensure_limit(cypher, default_limit))
}

/// One compact JSON object per line.
pub fn format_rows(rows: &[Value]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }
    rows.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn clamp_sample_limit(requested: Option<u32>, max: u32) -> u32 {
    requested
        .unwrap_or(DEFAULT_SAMPLE_LIMIT)
        .clamp(1, max.max(1))
}

fn pretty<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {e}"), None))
}

fn tool_error(err: GraphError) -> McpError {
    tracing::error!(error = %err, "Tool call failed");
    match err {
        GraphError::Cypher(e) => McpError::invalid_params(e.to_string(), None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_query_refuses_writes() {
        assert_eq!(prepare_query("MATCH (n) DETACH DELETE n", 25), None);
        assert_eq!(prepare_query("CREATE (n:Rule)", 25), None);
        assert_eq!(prepare_query("call dbms.components()", 25), None);
        assert_eq!(prepare_query("CALL db.createLabel('Injected')", 25), None);
    }

    #[test]
    fn test_prepare_query_adds_limit() {
        assert_eq!(
            prepare_query("MATCH (n:Rule) RETURN n.label", 25).as_deref(),
            Some("MATCH (n:Rule) RETURN n.label\nLIMIT 25")
        );
        assert_eq!(
            prepare_query("MATCH (n) RETURN n LIMIT 3", 25).as_deref(),
            Some("MATCH (n) RETURN n LIMIT 3")
        );
    }

    #[test]
    fn test_format_rows() {
        assert_eq!(format_rows(&[]), NO_RESULTS);
        let rows = vec![json!({"name": "a"}), json!({"name": "b"})];
        assert_eq!(format_rows(&rows), "{\"name\":\"a\"}\n{\"name\":\"b\"}");
    }

    #[test]
    fn test_clamp_sample_limit() {
        assert_eq!(clamp_sample_limit(None, 100), 5);
        assert_eq!(clamp_sample_limit(Some(0), 100), 1);
        assert_eq!(clamp_sample_limit(Some(500), 100), 100);
        assert_eq!(clamp_sample_limit(Some(7), 0), 1);
    }

    #[test]
    fn test_schema_serializes_camel_case() {
        let schema = GraphSchema {
            labels: vec!["Rule".to_string()],
            relationship_types: vec!["TRIGGERS".to_string()],
            property_keys: vec!["label".to_string()],
            label_properties: BTreeMap::from([("Rule".to_string(), vec!["label".to_string()])]),
            name_property_rule: NAME_PROPERTY_RULE.to_string(),
        };
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["relationshipTypes"][0], "TRIGGERS");
        assert_eq!(value["labelProperties"]["Rule"][0], "label");
        assert_eq!(value["namePropertyRule"], NAME_PROPERTY_RULE);
        assert!(value.get("propertyKeys").is_some());
    }
}
