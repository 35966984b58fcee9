// src/handlers/pipelines.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::pipeline::{Process, Stage},
};

// GET /api/processes
#[utoipa::path(
    get,
    path = "/api/processes",
    tag = "Pipeline",
    responses(
        (status = 200, description = "Processos de venda configurados", body = Vec<Process>)
    )
)]
pub async fn list_processes(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.catalog.processes().to_vec())
}

// GET /api/processes/{id}/stages
#[utoipa::path(
    get,
    path = "/api/processes/{id}/stages",
    tag = "Pipeline",
    params(
        ("id" = Uuid, Path, description = "ID do Processo")
    ),
    responses(
        (status = 200, description = "Etapas do processo, em ordem", body = Vec<Stage>),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn list_stages(
    State(app_state): State<AppState>,
    Path(process_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if app_state.catalog.process(process_id).is_none() {
        return Err(AppError::NotFound("Process".into()));
    }

    let stages: Vec<Stage> = app_state
        .catalog
        .stages_for(process_id)
        .into_iter()
        .cloned()
        .collect();

    Ok((StatusCode::OK, Json(stages)))
}
