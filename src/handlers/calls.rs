// src/handlers/calls.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        call::{Call, CallPayload},
        query::SearchParams,
    },
};

// GET /api/calls
#[utoipa::path(
    get,
    path = "/api/calls",
    tag = "Calls",
    params(SearchParams),
    responses(
        (status = 200, description = "Lista de chamadas (mais recentes primeiro)", body = Vec<Call>)
    )
)]
pub async fn list_calls(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.call_service.list(&params).await?;
    Ok((StatusCode::OK, Json(items)))
}

// POST /api/calls
#[utoipa::path(
    post,
    path = "/api/calls",
    tag = "Calls",
    request_body = CallPayload,
    responses(
        (status = 201, description = "Chamada criada", body = Call),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Oportunidade não encontrada")
    )
)]
pub async fn create_call(
    State(app_state): State<AppState>,
    Json(payload): Json<CallPayload>,
) -> Result<impl IntoResponse, AppError> {
    let created = app_state.call_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/calls/{id}
#[utoipa::path(
    get,
    path = "/api/calls/{id}",
    tag = "Calls",
    params(("id" = Uuid, Path, description = "ID da Chamada")),
    responses(
        (status = 200, description = "Chamada", body = Call),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_call(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state.call_service.get(id).await?;
    Ok((StatusCode::OK, Json(item)))
}

// PUT /api/calls/{id}
#[utoipa::path(
    put,
    path = "/api/calls/{id}",
    tag = "Calls",
    params(("id" = Uuid, Path, description = "ID da Chamada")),
    request_body = CallPayload,
    responses(
        (status = 200, description = "Chamada atualizada", body = Call),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_call(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CallPayload>,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state.call_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(updated)))
}

// DELETE /api/calls/{id}
#[utoipa::path(
    delete,
    path = "/api/calls/{id}",
    tag = "Calls",
    params(("id" = Uuid, Path, description = "ID da Chamada")),
    responses(
        (status = 204, description = "Removida"),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn delete_call(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.call_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
