// src/models/task.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TaskType {
    #[default]
    Task,
    Notification,
    #[serde(rename = "Call Reminder")]
    CallReminder,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    #[schema(example = "Prepare Innovate Proposal")]
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub related_opportunity_id: Option<Uuid>,
    pub related_opportunity_name: Option<String>,
    #[schema(example = "user1")]
    pub assigned_to: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub status: TaskStatus,
    pub related_opportunity_id: Option<Uuid>,
    pub assigned_to: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub task_type: TaskType,
}
