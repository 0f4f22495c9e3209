//! Account administration handlers
//!
//! Mounted behind the admin role gate. Delegates to `AccountAdminService`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::AccountAdminService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, ApiResult, ErrorResponse, MessageData, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub admin: Arc<AccountAdminService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All accounts", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> ApiResult<Vec<UserDto>> {
    let users = state.admin.list_users().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Weak password or unknown role"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ErrorResponse> {
    let user = state
        .admin
        .create_user(request.into())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserDto::from(user))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Account ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Unknown role"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    let user = state
        .admin
        .update_user(&id, request.into())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(UserDto::from(user))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = ApiResponse<MessageData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<MessageData> {
    state.admin.delete_user(&id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(MessageData::new("user deleted"))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/password",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Account ID")),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<MessageData>),
        (status = 400, description = "Weak password"),
        (status = 404, description = "Not found")
    )
)]
pub async fn change_password(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<MessageData> {
    state
        .admin
        .change_password(&id, &request.new_password)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(MessageData::new("password changed"))))
}
