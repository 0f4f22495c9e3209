//! Equipment registry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CellDto, CreateCellsRequest, CreateRuRequest, RuDetailsDto, RuDto, UpdateCellInfoRequest,
    UpdateCellStatusRequest, UpdateRuStatusRequest,
};
use crate::application::EquipmentService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, ApiResult, ErrorResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct EquipmentHandlerState {
    pub equipment: Arc<EquipmentService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/rus",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All units", body = ApiResponse<Vec<RuDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_units(State(state): State<EquipmentHandlerState>) -> ApiResult<Vec<RuDto>> {
    let units = state.equipment.list_units().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        units.into_iter().map(RuDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/rus/{ru_id}",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    params(("ru_id" = String, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit with its cells", body = ApiResponse<RuDetailsDto>),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_unit(
    State(state): State<EquipmentHandlerState>,
    Path(ru_id): Path<String>,
) -> ApiResult<RuDetailsDto> {
    let unit = state.equipment.get_unit(&ru_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(RuDetailsDto::from(unit))))
}

#[utoipa::path(
    put,
    path = "/api/v1/rus/{ru_id}/cells/{cell_id}/status",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    params(
        ("ru_id" = String, Path, description = "Unit ID"),
        ("cell_id" = i32, Path, description = "Cell ID within the unit")
    ),
    request_body = UpdateCellStatusRequest,
    responses(
        (status = 200, description = "Cell updated", body = ApiResponse<CellDto>),
        (status = 404, description = "No such cell in this unit"),
        (status = 409, description = "Concurrent modification")
    )
)]
pub async fn update_cell_status(
    State(state): State<EquipmentHandlerState>,
    Path((ru_id, cell_id)): Path<(String, i32)>,
    ValidatedJson(request): ValidatedJson<UpdateCellStatusRequest>,
) -> ApiResult<CellDto> {
    let cell = state
        .equipment
        .update_cell_status(&ru_id, cell_id, request.status, request.is_grounded)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(CellDto::from(cell))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/rus/{ru_id}/cells/{cell_id}/info",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    params(
        ("ru_id" = String, Path, description = "Unit ID"),
        ("cell_id" = i32, Path, description = "Cell ID within the unit")
    ),
    request_body = UpdateCellInfoRequest,
    responses(
        (status = 200, description = "Cell updated", body = ApiResponse<CellDto>),
        (status = 404, description = "No such cell in this unit"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_cell_info(
    State(state): State<EquipmentHandlerState>,
    Path((ru_id, cell_id)): Path<(String, i32)>,
    ValidatedJson(request): ValidatedJson<UpdateCellInfoRequest>,
) -> ApiResult<CellDto> {
    let cell = state
        .equipment
        .update_cell_info(&ru_id, cell_id, request.into())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(CellDto::from(cell))))
}

#[utoipa::path(
    put,
    path = "/api/v1/rus/{ru_id}/status",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    params(("ru_id" = String, Path, description = "Unit ID")),
    request_body = UpdateRuStatusRequest,
    responses(
        (status = 200, description = "Unit updated", body = ApiResponse<RuDto>),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn update_unit_status(
    State(state): State<EquipmentHandlerState>,
    Path(ru_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRuStatusRequest>,
) -> ApiResult<RuDto> {
    let unit = state
        .equipment
        .update_unit_status(&ru_id, &request.status)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(RuDto::from(unit))))
}

// ── Provisioning (admin) ────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/v1/admin/rus",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    request_body = CreateRuRequest,
    responses(
        (status = 201, description = "Unit created", body = ApiResponse<RuDto>),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Unit id already exists")
    )
)]
pub async fn create_unit(
    State(state): State<EquipmentHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateRuRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RuDto>>), ErrorResponse> {
    let unit = state
        .equipment
        .create_unit(request.into())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(RuDto::from(unit)))))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/rus/{ru_id}/cells",
    tag = "Equipment",
    security(("bearer_auth" = [])),
    params(("ru_id" = String, Path, description = "Unit ID")),
    request_body = CreateCellsRequest,
    responses(
        (status = 201, description = "Cells created", body = ApiResponse<Vec<CellDto>>),
        (status = 404, description = "Unit not found"),
        (status = 409, description = "Cell id already used in this unit")
    )
)]
pub async fn add_cells(
    State(state): State<EquipmentHandlerState>,
    Path(ru_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCellsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<CellDto>>>), ErrorResponse> {
    let cells = state
        .equipment
        .add_cells(&ru_id, request.cells.into_iter().map(Into::into).collect())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            cells.into_iter().map(CellDto::from).collect(),
        )),
    ))
}
