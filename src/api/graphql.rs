use super::AppState;
use crate::error::{ApiError, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql::{BatchRequest, BatchResponse, Request, Variables};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Deserialize)]
pub struct GraphQlParams {
    pub query: Option<String>,
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
    pub variables: Option<String>,
}

/// Execute a JSON request body, either a single request or a batch.
pub async fn graphql_post(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response> {
    let batch: BatchRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidRequest {
            message: format!("Body is not a valid GraphQL request: {}", e),
        })?;

    let operations = match &batch {
        BatchRequest::Single(_) => 1,
        BatchRequest::Batch(requests) => requests.len(),
    };
    debug!("Executing GraphQL POST with {} operation(s)", operations);

    let response = state.schema.execute_batch(batch).await;
    let status = match &response {
        BatchResponse::Single(single) => status_for(single),
        BatchResponse::Batch(_) => StatusCode::OK,
    };
    Ok((status, Json(response)).into_response())
}

/// Execute a query from URL parameters, or serve GraphiQL when no query is given.
pub async fn graphql_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GraphQlParams>,
) -> Result<Response> {
    let Some(query) = params.query else {
        if state.graphiql {
            return Ok(graphiql_page().into_response());
        }
        return Err(ApiError::InvalidRequest {
            message: "Must provide query string.".to_string(),
        });
    };

    if selects_mutation(&query, params.operation_name.as_deref()) {
        return Err(ApiError::MethodNotAllowed {
            message: "Can only perform a mutation operation from a POST request.".to_string(),
        });
    }

    let mut request = Request::new(query);

    if let Some(name) = params.operation_name {
        request = request.operation_name(name);
    }

    if let Some(raw) = params.variables.filter(|v| !v.trim().is_empty()) {
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| ApiError::InvalidRequest {
                message: format!("Variables are invalid JSON: {}", e),
            })?;
        request = request.variables(Variables::from_json(value));
    }

    debug!("Executing GraphQL GET");

    let response = state.schema.execute(request).await;
    Ok((status_for(&response), Json(response)).into_response())
}

/// A response carrying errors and no data failed before execution produced
/// anything (syntax or validation) and is answered with 400.
fn status_for(response: &async_graphql::Response) -> StatusCode {
    if response.is_err() && response.data == async_graphql::Value::Null {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    }
}

fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Whether the operation that would run is a mutation. Documents that fail
/// to parse report `false` and are left to the executor to reject.
fn selects_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = parse_query(query) else {
        return false;
    };

    document.operations.iter().any(|(name, operation)| {
        let selected = match operation_name {
            Some(wanted) => name.map(|n| n.as_str() == wanted).unwrap_or(false),
            None => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}
