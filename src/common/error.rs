// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0} not found.")]
    NotFound(String),

    // Regra de negócio violada (ex: etapa de outro processo)
    #[error("{0}")]
    InvariantViolation(String),

    // --- Importação CSV (erros fatais para o lote inteiro) ---

    #[error("File is empty or unreadable.")]
    ImportFileEmpty,

    #[error("Failed to read the file.")]
    ImportUnreadable,

    #[error("File exceeds the maximum import size of {0} bytes.")]
    ImportTooLarge(usize),

    #[error("CSV file is empty or has no data rows.")]
    ImportNoData,

    #[error("CSV is missing required headers: {}.", .0.join(", "))]
    ImportMissingHeaders(Vec<String>),

    // Catálogo de processos/etapas inconsistente (só na inicialização)
    #[error("Configuração de pipeline inválida: {0}")]
    InvalidPipelineConfig(String),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvariantViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ImportFileEmpty | AppError::ImportUnreadable => StatusCode::BAD_REQUEST,
            AppError::ImportTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ImportNoData => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ImportMissingHeaders(missing) => {
                let body = Json(json!({
                    "error": self.to_string(),
                    "missingHeaders": missing,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            // O resto vira 500; o detalhe fica só no log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                let body = Json(json!({ "error": "An unexpected error occurred." }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
