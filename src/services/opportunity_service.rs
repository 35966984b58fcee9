// src/services/opportunity_service.rs

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{PipelineCatalog, Repository},
    models::{
        client::Client,
        opportunity::{Opportunity, OpportunityPayload},
        query::{matches, SearchParams},
    },
};

#[derive(Clone)]
pub struct OpportunityService {
    repo: Arc<dyn Repository<Opportunity>>,
    clients: Arc<dyn Repository<Client>>,
    catalog: Arc<PipelineCatalog>,
    default_assignee: String,
}

// Nomes desnormalizados resolvidos a partir dos IDs do payload
struct Links {
    client_name: Option<String>,
    process_name: Option<String>,
    stage_name: Option<String>,
}

impl OpportunityService {
    pub fn new(
        repo: Arc<dyn Repository<Opportunity>>,
        clients: Arc<dyn Repository<Client>>,
        catalog: Arc<PipelineCatalog>,
        default_assignee: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            clients,
            catalog,
            default_assignee: default_assignee.into(),
        }
    }

    /// Busca por nome, cliente, status ou etapa.
    pub async fn list(&self, params: &SearchParams) -> Result<Vec<Opportunity>, AppError> {
        let opportunities = self.repo.list().await?;
        let Some(term) = params.term() else {
            return Ok(opportunities);
        };

        Ok(opportunities
            .into_iter()
            .filter(|o| {
                matches(Some(&o.name), &term)
                    || matches(o.client_name.as_deref(), &term)
                    || matches(Some(o.status.as_str()), &term)
                    || matches(o.stage_name.as_deref(), &term)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Opportunity, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opportunity".into()))
    }

    pub async fn create(&self, payload: OpportunityPayload) -> Result<Opportunity, AppError> {
        payload.validate()?;
        let links = self.resolve_links(&payload).await?;
        let now = Utc::now();

        let opportunity = Opportunity {
            id: Uuid::new_v4(),
            name: payload.name,
            client_id: payload.client_id,
            client_name: links.client_name,
            primary_contact_phone: payload.primary_contact_phone,
            last_call_date: payload.last_call_date,
            billing_amount_eur: payload.billing_amount_eur,
            collected_amount_eur: payload.collected_amount_eur,
            status: payload.status.unwrap_or_default(),
            proposal_status: payload.proposal_status,
            process_id: payload.process_id,
            process_name: links.process_name,
            stage_id: payload.stage_id,
            stage_name: links.stage_name,
            value: payload.value,
            close_date: payload.close_date.unwrap_or(now),
            description: payload.description,
            assigned_to: payload
                .assigned_to
                .unwrap_or_else(|| self.default_assignee.clone()),
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(opportunity).await?;
        tracing::info!(id = %created.id, "Oportunidade criada");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: OpportunityPayload,
    ) -> Result<Opportunity, AppError> {
        payload.validate()?;
        let current = self.get(id).await?;
        let links = self.resolve_links(&payload).await?;

        let updated = Opportunity {
            id: current.id,
            name: payload.name,
            client_id: payload.client_id,
            client_name: links.client_name,
            primary_contact_phone: payload.primary_contact_phone,
            last_call_date: payload.last_call_date,
            billing_amount_eur: payload.billing_amount_eur,
            collected_amount_eur: payload.collected_amount_eur,
            status: payload.status.unwrap_or(current.status),
            proposal_status: payload.proposal_status,
            process_id: payload.process_id,
            process_name: links.process_name,
            stage_id: payload.stage_id,
            stage_name: links.stage_name,
            value: payload.value,
            close_date: payload.close_date.unwrap_or(current.close_date),
            description: payload.description,
            assigned_to: payload.assigned_to.unwrap_or(current.assigned_to),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        self.repo.update(updated).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Opportunity".into()));
        }
        tracing::info!(%id, "Oportunidade removida");
        Ok(())
    }

    // --- REGRAS ---
    // Valor não negativo; etapa só dentro do processo escolhido.
    async fn resolve_links(&self, payload: &OpportunityPayload) -> Result<Links, AppError> {
        if payload.value < Decimal::ZERO {
            return Err(AppError::InvariantViolation(
                "Opportunity value cannot be negative.".into(),
            ));
        }

        let process = match payload.process_id {
            Some(pid) => Some(
                self.catalog
                    .process(pid)
                    .ok_or_else(|| AppError::NotFound("Process".into()))?,
            ),
            None => None,
        };

        let stage = match payload.stage_id {
            Some(sid) => {
                let stage = self
                    .catalog
                    .stage(sid)
                    .ok_or_else(|| AppError::NotFound("Stage".into()))?;
                if process.map(|p| p.id) != Some(stage.process_id) {
                    return Err(AppError::InvariantViolation(format!(
                        "Stage '{}' does not belong to the selected process.",
                        stage.name
                    )));
                }
                Some(stage)
            }
            None => None,
        };

        let client_name = match payload.client_id {
            Some(cid) => Some(
                self.clients
                    .find_by_id(cid)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Client".into()))?
                    .name,
            ),
            None => None,
        };

        Ok(Links {
            client_name,
            process_name: process.map(|p| p.name.clone()),
            stage_name: stage.map(|s| s.name.clone()),
        })
    }
}
