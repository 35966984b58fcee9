// src/services/client_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::Repository,
    models::{
        client::{Client, ClientPayload},
        query::{matches, SearchParams},
    },
};

#[derive(Clone)]
pub struct ClientService {
    repo: Arc<dyn Repository<Client>>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn Repository<Client>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, params: &SearchParams) -> Result<Vec<Client>, AppError> {
        let clients = self.repo.list().await?;
        let Some(term) = params.term() else {
            return Ok(clients);
        };

        Ok(clients
            .into_iter()
            .filter(|c| {
                matches(Some(&c.name), &term)
                    || matches(Some(&c.email), &term)
                    || matches(c.company.as_deref(), &term)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client".into()))
    }

    pub async fn create(&self, payload: ClientPayload) -> Result<Client, AppError> {
        payload.validate()?;
        let now = Utc::now();

        let client = Client {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            company: payload.company,
            address: payload.address,
            financial_data: payload.financial_data,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(client).await?;
        tracing::info!(id = %created.id, "Cliente criado");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, payload: ClientPayload) -> Result<Client, AppError> {
        payload.validate()?;
        let current = self.get(id).await?;

        self.repo
            .update(Client {
                id: current.id,
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                company: payload.company,
                address: payload.address,
                financial_data: payload.financial_data,
                created_at: current.created_at,
                updated_at: Utc::now(),
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Client".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryRepository;

    fn payload(name: &str, email: &str, company: Option<&str>) -> ClientPayload {
        ClientPayload {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: company.map(Into::into),
            address: None,
            financial_data: None,
        }
    }

    fn service() -> ClientService {
        ClientService::new(Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let err = service()
            .create(payload("Innovate", "not-an-email", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn search_covers_name_email_and_company() {
        let service = service();
        service
            .create(payload("Innovate Corp", "contact@innovate.com", Some("Innovate")))
            .await
            .unwrap();
        service
            .create(payload("Synergy", "info@synergy.com", Some("Synergy Ltd")))
            .await
            .unwrap();

        let by_email = service
            .list(&SearchParams { search: Some("INNOVATE.COM".into()) })
            .await
            .unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Innovate Corp");

        let by_company = service
            .list(&SearchParams { search: Some("ltd".into()) })
            .await
            .unwrap();
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].name, "Synergy");

        let all = service.list(&SearchParams { search: Some("  ".into()) }).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_then_delete() {
        let service = service();
        let created = service
            .create(payload("Old", "old@example.com", None))
            .await
            .unwrap();

        let updated = service
            .update(created.id, payload("New", "new@example.com", None))
            .await
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.created_at, created.created_at);

        service.delete(created.id).await.unwrap();
        assert!(matches!(service.get(created.id).await, Err(AppError::NotFound(_))));
    }
}
