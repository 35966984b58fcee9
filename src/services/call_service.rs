// src/services/call_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::Repository,
    models::{
        call::{Call, CallPayload},
        opportunity::Opportunity,
        query::{matches, SearchParams},
    },
};

#[derive(Clone)]
pub struct CallService {
    repo: Arc<dyn Repository<Call>>,
    opportunities: Arc<dyn Repository<Opportunity>>,
}

impl CallService {
    pub fn new(
        repo: Arc<dyn Repository<Call>>,
        opportunities: Arc<dyn Repository<Opportunity>>,
    ) -> Self {
        Self { repo, opportunities }
    }

    /// Chamadas mais recentes primeiro.
    pub async fn list(&self, params: &SearchParams) -> Result<Vec<Call>, AppError> {
        let mut calls = self.repo.list().await?;
        if let Some(term) = params.term() {
            calls.retain(|c| {
                matches(Some(&c.summary), &term)
                    || matches(c.opportunity_name.as_deref(), &term)
                    || matches(c.notes.as_deref(), &term)
                    || matches(c.call_type.as_ref().map(|t| t.as_str()), &term)
            });
        }
        calls.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        Ok(calls)
    }

    pub async fn get(&self, id: Uuid) -> Result<Call, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call".into()))
    }

    pub async fn create(&self, payload: CallPayload) -> Result<Call, AppError> {
        payload.validate()?;
        let opportunity_name = self.opportunity_name(payload.opportunity_id).await?;
        let now = Utc::now();

        let call = Call {
            id: Uuid::new_v4(),
            opportunity_id: payload.opportunity_id,
            opportunity_name: Some(opportunity_name),
            date_time: payload.date_time,
            summary: payload.summary,
            participants: clean_participants(payload.participants),
            recording_url: payload.recording_url,
            notes: payload.notes,
            attended: payload.attended,
            duration: payload.duration,
            call_type: Some(payload.call_type.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(call).await?;
        tracing::info!(id = %created.id, opportunity = %created.opportunity_id, "Chamada registrada");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, payload: CallPayload) -> Result<Call, AppError> {
        payload.validate()?;
        let current = self.get(id).await?;
        let opportunity_name = self.opportunity_name(payload.opportunity_id).await?;

        self.repo
            .update(Call {
                id: current.id,
                opportunity_id: payload.opportunity_id,
                opportunity_name: Some(opportunity_name),
                date_time: payload.date_time,
                summary: payload.summary,
                participants: clean_participants(payload.participants),
                recording_url: payload.recording_url,
                notes: payload.notes,
                attended: payload.attended,
                duration: payload.duration,
                call_type: Some(payload.call_type.unwrap_or_default()),
                created_at: current.created_at,
                updated_at: Utc::now(),
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Call".into()));
        }
        Ok(())
    }

    async fn opportunity_name(&self, id: Uuid) -> Result<String, AppError> {
        self.opportunities
            .find_by_id(id)
            .await?
            .map(|o| o.name)
            .ok_or_else(|| AppError::NotFound("Opportunity".into()))
    }
}

fn clean_participants(participants: Vec<String>) -> Vec<String> {
    participants
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
