// src/handlers/opportunities.rs

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
        opportunity::{Opportunity, OpportunityPayload},
        query::SearchParams,
    },
};

// GET /api/opportunities
#[utoipa::path(
    get,
    path = "/api/opportunities",
    tag = "Opportunities",
    params(SearchParams),
    responses(
        (status = 200, description = "Lista de oportunidades", body = Vec<Opportunity>)
    )
)]
pub async fn list_opportunities(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let opportunities = app_state.opportunity_service.list(&params).await?;
    Ok((StatusCode::OK, Json(opportunities)))
}

// POST /api/opportunities
#[utoipa::path(
    post,
    path = "/api/opportunities",
    tag = "Opportunities",
    request_body = OpportunityPayload,
    responses(
        (status = 201, description = "Oportunidade criada", body = Opportunity),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Etapa não pertence ao processo")
    )
)]
pub async fn create_opportunity(
    State(app_state): State<AppState>,
    Json(payload): Json<OpportunityPayload>,
) -> Result<impl IntoResponse, AppError> {
    let opportunity = app_state.opportunity_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(opportunity)))
}

// GET /api/opportunities/{id}
#[utoipa::path(
    get,
    path = "/api/opportunities/{id}",
    tag = "Opportunities",
    params(("id" = Uuid, Path, description = "ID da Oportunidade")),
    responses(
        (status = 200, description = "Oportunidade", body = Opportunity),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_opportunity(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let opportunity = app_state.opportunity_service.get(id).await?;
    Ok((StatusCode::OK, Json(opportunity)))
}

// PUT /api/opportunities/{id}
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}",
    tag = "Opportunities",
    params(("id" = Uuid, Path, description = "ID da Oportunidade")),
    request_body = OpportunityPayload,
    responses(
        (status = 200, description = "Oportunidade atualizada", body = Opportunity),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_opportunity(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OpportunityPayload>,
) -> Result<impl IntoResponse, AppError> {
    let opportunity = app_state.opportunity_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(opportunity)))
}

// DELETE /api/opportunities/{id}
#[utoipa::path(
    delete,
    path = "/api/opportunities/{id}",
    tag = "Opportunities",
    params(("id" = Uuid, Path, description = "ID da Oportunidade")),
    responses(
        (status = 204, description = "Removida"),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn delete_opportunity(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.opportunity_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
