// src/handlers/tasks.rs

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
        task::{Task, TaskPayload},
        query::SearchParams,
    },
};

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    params(SearchParams),
    responses(
        (status = 200, description = "Lista de tarefas", body = Vec<Task>)
    )
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.task_service.list(&params).await?;
    Ok((StatusCode::OK, Json(items)))
}

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Tarefa criada", body = Task),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Oportunidade não encontrada")
    )
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    let created = app_state.task_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/tasks/{id}
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da Tarefa")),
    responses(
        (status = 200, description = "Tarefa", body = Task),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state.task_service.get(id).await?;
    Ok((StatusCode::OK, Json(item)))
}

// PUT /api/tasks/{id}
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da Tarefa")),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Tarefa atualizada", body = Task),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state.task_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(updated)))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da Tarefa")),
    responses(
        (status = 204, description = "Removida"),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.task_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
