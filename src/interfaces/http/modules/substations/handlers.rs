//! Substation handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{ReassignUnitsRequest, ReassignmentDto, SubstationDto};
use crate::application::EquipmentService;
use crate::interfaces::http::common::{error_response, ApiResponse, ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct SubstationHandlerState {
    pub equipment: Arc<EquipmentService>,
}

/// Public read-only view used by the overview display.
#[utoipa::path(
    get,
    path = "/api/v1/substations/{substation_id}",
    tag = "Substations",
    params(("substation_id" = String, Path, description = "Substation ID")),
    responses(
        (status = 200, description = "Units assigned to the substation", body = ApiResponse<SubstationDto>)
    )
)]
pub async fn get_substation(
    State(state): State<SubstationHandlerState>,
    Path(substation_id): Path<String>,
) -> ApiResult<SubstationDto> {
    let units = state
        .equipment
        .substation_units(&substation_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(SubstationDto::new(substation_id, units))))
}

/// Missing or failing units are reported per item; the batch never aborts.
#[utoipa::path(
    put,
    path = "/api/v1/substations/{substation_id}/rus",
    tag = "Substations",
    security(("bearer_auth" = [])),
    params(("substation_id" = String, Path, description = "Target substation ID")),
    request_body = ReassignUnitsRequest,
    responses(
        (status = 200, description = "Per-unit manifest", body = ApiResponse<ReassignmentDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn reassign_units(
    State(state): State<SubstationHandlerState>,
    Path(substation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReassignUnitsRequest>,
) -> ApiResult<ReassignmentDto> {
    let report = state
        .equipment
        .reassign_substation(&substation_id, &request.ru_ids)
        .await;

    Ok(Json(ApiResponse::success(ReassignmentDto::new(substation_id, report))))
}
