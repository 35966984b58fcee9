// src/models/call.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CallType {
    Descubrimiento1,
    Descubrimiento2,
    Descubrimiento3,
    Cierre1,
    Cierre2,
    Cierre3,
    #[default]
    General,
    #[serde(rename = "Follow-up")]
    FollowUp,
    Demo,
    Other,
}

impl CallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::Descubrimiento1 => "Descubrimiento1",
            CallType::Descubrimiento2 => "Descubrimiento2",
            CallType::Descubrimiento3 => "Descubrimiento3",
            CallType::Cierre1 => "Cierre1",
            CallType::Cierre2 => "Cierre2",
            CallType::Cierre3 => "Cierre3",
            CallType::General => "General",
            CallType::FollowUp => "Follow-up",
            CallType::Demo => "Demo",
            CallType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub opportunity_name: Option<String>,
    pub date_time: DateTime<Utc>,
    #[schema(example = "Initial discovery call with Synergy.")]
    pub summary: String,
    #[schema(example = json!(["Sales Rep", "Synergy VP Sales"]))]
    pub participants: Vec<String>,
    pub recording_url: Option<String>,
    pub notes: Option<String>,
    pub attended: Option<bool>,
    // Duração em minutos
    #[schema(example = 30)]
    pub duration: Option<u32>,
    pub call_type: Option<CallType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallPayload {
    pub opportunity_id: Uuid,
    pub date_time: DateTime<Utc>,

    #[validate(length(min = 1, message = "required"))]
    pub summary: String,

    #[serde(default)]
    pub participants: Vec<String>,

    #[validate(url(message = "invalid_url"))]
    pub recording_url: Option<String>,
    pub notes: Option<String>,
    pub attended: Option<bool>,
    pub duration: Option<u32>,
    pub call_type: Option<CallType>,
}
