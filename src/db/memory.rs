// src/db/memory.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{call::Call, client::Client, opportunity::Opportunity, task::Task},
};

/// Entidade armazenável: só precisamos saber o ID.
pub trait Record: Clone + Send + Sync + 'static {
    /// Nome usado nas mensagens de "não encontrado".
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

impl Record for Opportunity {
    const KIND: &'static str = "Opportunity";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Client {
    const KIND: &'static str = "Client";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Call {
    const KIND: &'static str = "Call";
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Task {
    const KIND: &'static str = "Task";
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Interface CRUD usada pelos services. Registros novos entram no início
/// da coleção (mais recentes primeiro).
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, AppError>;

    async fn insert(&self, record: T) -> Result<T, AppError>;

    /// Insere o lote inteiro numa única escrita, preservando a ordem do lote.
    async fn insert_many(&self, records: Vec<T>) -> Result<usize, AppError>;

    async fn update(&self, record: T) -> Result<T, AppError>;

    /// Retorna `true` se algo foi removido.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct InMemoryRepository<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: T) -> Result<T, AppError> {
        self.rows.write().await.insert(0, record.clone());
        Ok(record)
    }

    async fn insert_many(&self, records: Vec<T>) -> Result<usize, AppError> {
        let count = records.len();
        if count == 0 {
            return Ok(0);
        }

        let mut rows = self.rows.write().await;
        rows.splice(0..0, records);
        Ok(count)
    }

    async fn update(&self, record: T) -> Result<T, AppError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| AppError::NotFound(T::KIND.to_string()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() != before)
    }
}
