// src/handlers/import.rs

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::import::{ImportOutcome, ImportStatus},
};

// POST /api/opportunities/import
// O corpo é o próprio arquivo CSV (text/csv), sem multipart.
#[utoipa::path(
    post,
    path = "/api/opportunities/import",
    tag = "Import",
    request_body(content = String, content_type = "text/csv", description = "Arquivo CSV com cabeçalho nombre,telefono,proceso_ventas,etapa"),
    responses(
        (status = 201, description = "Ao menos uma oportunidade importada", body = ImportOutcome),
        (status = 422, description = "Nenhuma linha importada ou cabeçalho inválido", body = ImportOutcome),
        (status = 400, description = "Arquivo vazio ou ilegível"),
        (status = 413, description = "Arquivo maior que MAX_IMPORT_BYTES")
    )
)]
pub async fn import_opportunities(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Rejeições do corpo também saem no envelope {"error": ...}
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::ImportTooLarge(app_state.config.max_import_bytes)
        } else {
            AppError::ImportUnreadable
        }
    })?;

    let outcome = app_state.import_service.import_bytes(&body).await?;

    let status = match outcome.status {
        ImportStatus::Failed => StatusCode::UNPROCESSABLE_ENTITY,
        ImportStatus::Success | ImportStatus::Partial => StatusCode::CREATED,
    };

    Ok((status, Json(outcome)))
}

// GET /api/opportunities/import/template
#[utoipa::path(
    get,
    path = "/api/opportunities/import/template",
    tag = "Import",
    responses(
        (status = 200, description = "Modelo CSV para download", content_type = "text/csv", body = String)
    )
)]
pub async fn download_template(State(app_state): State<AppState>) -> Response {
    let template = app_state.import_service.template();

    // Headers para o navegador baixar o arquivo
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", template.file_name),
        ),
    ];

    (headers, template.content).into_response()
}
