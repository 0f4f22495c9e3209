//! Operation history handlers. The ledger is append-only: there is no
//! update or delete route.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{AddHistoryRecordRequest, HistoryQuery, HistoryRecordDto};
use crate::application::HistoryService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, ApiResult, ErrorResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct HistoryHandlerState {
    pub history: Arc<HistoryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/rus/{ru_id}/history",
    tag = "History",
    security(("bearer_auth" = [])),
    params(
        ("ru_id" = String, Path, description = "Unit ID"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Records, newest first", body = ApiResponse<Vec<HistoryRecordDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_history(
    State(state): State<HistoryHandlerState>,
    Path(ru_id): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> ApiResult<Vec<HistoryRecordDto>> {
    let records = state
        .history
        .query(&ru_id, params.bound())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        records.into_iter().map(HistoryRecordDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/rus/{ru_id}/history",
    tag = "History",
    security(("bearer_auth" = [])),
    params(("ru_id" = String, Path, description = "Unit ID")),
    request_body = AddHistoryRecordRequest,
    responses(
        (status = 201, description = "Record stored", body = ApiResponse<HistoryRecordDto>),
        (status = 404, description = "Unit not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn add_history(
    State(state): State<HistoryHandlerState>,
    Path(ru_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddHistoryRecordRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HistoryRecordDto>>), ErrorResponse> {
    let record = state
        .history
        .append(&ru_id, request.into())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(HistoryRecordDto::from(record))),
    ))
}
