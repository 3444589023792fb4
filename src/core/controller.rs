use std::sync::Arc;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::{Method, StatusCode, Uri};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

pub(crate) type ServerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ErrorResponse { error: message.to_string() }))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// extractor rejections keep the json error envelope
pub(crate) fn path_to_server_error(err: PathRejection) -> ServerError {
    server_error(err.status(), err.body_text().as_str())
}

pub(crate) fn query_to_server_error(err: QueryRejection) -> ServerError {
    server_error(err.status(), err.body_text().as_str())
}

pub(crate) async fn route_not_found(uri: Uri) -> ServerError {
    server_error(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()).as_str())
}

pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ServerError {
    server_error(StatusCode::METHOD_NOT_ALLOWED,
                 format!("method {} not allowed for {}", method, uri.path()).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidInput { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.to_string().as_str())
            }
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.to_string().as_str())
            }
            CommandError::Internal { .. } => {
                tracing::error!(error = %err, "internal catalog failure");
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string().as_str())
            }
        }
    }
}
