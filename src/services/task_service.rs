// src/services/task_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::Repository,
    models::{
        opportunity::Opportunity,
        query::{matches, SearchParams},
        task::{Task, TaskPayload},
    },
};

#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn Repository<Task>>,
    opportunities: Arc<dyn Repository<Opportunity>>,
    default_assignee: String,
}

impl TaskService {
    pub fn new(
        repo: Arc<dyn Repository<Task>>,
        opportunities: Arc<dyn Repository<Opportunity>>,
        default_assignee: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            opportunities,
            default_assignee: default_assignee.into(),
        }
    }

    pub async fn list(&self, params: &SearchParams) -> Result<Vec<Task>, AppError> {
        let tasks = self.repo.list().await?;
        let Some(term) = params.term() else {
            return Ok(tasks);
        };

        Ok(tasks
            .into_iter()
            .filter(|t| {
                matches(Some(&t.title), &term)
                    || matches(t.description.as_deref(), &term)
                    || matches(t.related_opportunity_name.as_deref(), &term)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Task, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task".into()))
    }

    pub async fn create(&self, payload: TaskPayload) -> Result<Task, AppError> {
        payload.validate()?;
        let related_name = self.related_name(payload.related_opportunity_id).await?;
        let now = Utc::now();

        let task = Task {
            id: Uuid::new_v4(),
            title: payload.title,
            due_date: payload.due_date,
            status: payload.status,
            related_opportunity_id: payload.related_opportunity_id,
            related_opportunity_name: related_name,
            assigned_to: payload
                .assigned_to
                .unwrap_or_else(|| self.default_assignee.clone()),
            description: payload.description,
            task_type: payload.task_type,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(task).await?;
        tracing::info!(id = %created.id, "Tarefa criada");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, payload: TaskPayload) -> Result<Task, AppError> {
        payload.validate()?;
        let current = self.get(id).await?;
        let related_name = self.related_name(payload.related_opportunity_id).await?;

        self.repo
            .update(Task {
                id: current.id,
                title: payload.title,
                due_date: payload.due_date,
                status: payload.status,
                related_opportunity_id: payload.related_opportunity_id,
                related_opportunity_name: related_name,
                assigned_to: payload.assigned_to.unwrap_or(current.assigned_to),
                description: payload.description,
                task_type: payload.task_type,
                created_at: current.created_at,
                updated_at: Utc::now(),
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Task".into()));
        }
        Ok(())
    }

    // Oportunidade relacionada é opcional, mas se vier precisa existir
    async fn related_name(&self, id: Option<Uuid>) -> Result<Option<String>, AppError> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.opportunities
            .find_by_id(id)
            .await?
            .map(|o| Some(o.name))
            .ok_or_else(|| AppError::NotFound("Opportunity".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{InMemoryRepository, PipelineCatalog, SampleData};
    use crate::models::task::{TaskStatus, TaskType};

    fn service() -> (TaskService, Opportunity) {
        let sample = SampleData::build(&PipelineCatalog::sample(), "user1");
        let opportunity = sample.opportunities[0].clone();
        let service = TaskService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::with_rows(sample.opportunities)),
            "user1",
        );
        (service, opportunity)
    }

    fn payload(title: &str, related: Option<Uuid>) -> TaskPayload {
        TaskPayload {
            title: title.into(),
            due_date: Utc::now(),
            status: TaskStatus::default(),
            related_opportunity_id: related,
            assigned_to: None,
            description: None,
            task_type: TaskType::default(),
        }
    }

    #[tokio::test]
    async fn standalone_task_uses_defaults() {
        let (service, _) = service();
        let task = service.create(payload("Call back", None)).await.unwrap();

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.task_type, TaskType::Task);
        assert_eq!(task.assigned_to, "user1");
        assert!(task.related_opportunity_name.is_none());
    }

    #[tokio::test]
    async fn related_opportunity_must_exist() {
        let (service, _) = service();
        let err = service
            .create(payload("Orphan", Some(Uuid::new_v4())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_matches_related_opportunity_name() {
        let (service, opportunity) = service();
        service
            .create(payload("Send proposal", Some(opportunity.id)))
            .await
            .unwrap();
        service.create(payload("Unrelated", None)).await.unwrap();

        let term = opportunity.name.to_uppercase();
        let found = service
            .list(&SearchParams { search: Some(term) })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Send proposal");
    }
}
