//! HTTP handlers for the history endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ApiError;
use crate::application::{
    DeleteHistoryCommand, DeleteHistoryHandler, GetHistoryHandler, GetHistoryQuery,
    ListHistoryHandler, ListHistoryQuery,
};
use crate::domain::foundation::TranscriptId;
use crate::ports::TranscriptStoreError;

use super::dto::{DeleteResponse, HistoryNotFound};

#[derive(Clone)]
pub struct HistoryHandlers {
    list_handler: Arc<ListHistoryHandler>,
    get_handler: Arc<GetHistoryHandler>,
    delete_handler: Arc<DeleteHistoryHandler>,
}

impl HistoryHandlers {
    pub fn new(
        list_handler: Arc<ListHistoryHandler>,
        get_handler: Arc<GetHistoryHandler>,
        delete_handler: Arc<DeleteHistoryHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            delete_handler,
        }
    }
}

/// GET /history - Transcript names, newest first
pub async fn list_history(
    State(handlers): State<HistoryHandlers>,
) -> Result<impl IntoResponse, ApiError> {
    let ids = handlers.list_handler.handle(ListHistoryQuery).await?;
    let names: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
    Ok(Json(names))
}

/// GET /history/:filename - Entries of one transcript
pub async fn get_history(
    State(handlers): State<HistoryHandlers>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let query = GetHistoryQuery {
        transcript_id: TranscriptId::parse(filename)?,
    };

    match handlers.get_handler.handle(query).await {
        Ok(entries) => Ok(Json(entries).into_response()),
        Err(TranscriptStoreError::NotFound(_)) => {
            Ok((StatusCode::NOT_FOUND, Json(HistoryNotFound::new())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /delete_history/:filename - Remove one transcript
pub async fn delete_history(
    State(handlers): State<HistoryHandlers>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let cmd = DeleteHistoryCommand {
        transcript_id: TranscriptId::parse(filename)?,
    };

    let response = match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(DeleteResponse::success())),
        Err(TranscriptStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(DeleteResponse::error("File not found")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete transcript");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteResponse::error("Could not delete file")),
            )
        }
    };
    Ok(response.into_response())
}
