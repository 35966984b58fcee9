// src/models/opportunity.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OpportunityStatus {
    #[default]
    Activa,
    Ganada,
    Perdida,
}

impl OpportunityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Activa => "Activa",
            OpportunityStatus::Ganada => "Ganada",
            OpportunityStatus::Perdida => "Perdida",
        }
    }
}

// Ausência de valor equivale a "N/A"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProposalStatus {
    Creada,
    Presentada,
}

// --- Oportunidade ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: Uuid,
    #[schema(example = "Acme Deal")]
    pub name: String,

    // Opcional: o CSV de importação não vincula cliente
    pub client_id: Option<Uuid>,
    pub client_name: Option<String>,

    #[schema(example = "555-9999")]
    pub primary_contact_phone: Option<String>,
    pub last_call_date: Option<DateTime<Utc>>,

    #[serde(rename = "billingAmountEUR")]
    #[schema(example = "25000.00")]
    pub billing_amount_eur: Option<Decimal>,
    #[serde(rename = "collectedAmountEUR")]
    #[schema(example = "5000.00")]
    pub collected_amount_eur: Option<Decimal>,

    pub status: OpportunityStatus,
    pub proposal_status: Option<ProposalStatus>,

    // Campos desnormalizados copiados do catálogo
    pub process_id: Option<Uuid>,
    pub process_name: Option<String>,
    pub stage_id: Option<Uuid>,
    pub stage_name: Option<String>,

    #[schema(example = "0")]
    pub value: Decimal,
    pub close_date: DateTime<Utc>,
    pub description: Option<String>,
    #[schema(example = "user1")]
    pub assigned_to: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Payloads ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Innovate Upgrade Project")]
    pub name: String,

    pub client_id: Option<Uuid>,
    pub primary_contact_phone: Option<String>,
    pub last_call_date: Option<DateTime<Utc>>,

    #[serde(rename = "billingAmountEUR")]
    pub billing_amount_eur: Option<Decimal>,
    #[serde(rename = "collectedAmountEUR")]
    pub collected_amount_eur: Option<Decimal>,

    pub status: Option<OpportunityStatus>,
    pub proposal_status: Option<ProposalStatus>,

    pub process_id: Option<Uuid>,
    pub stage_id: Option<Uuid>,

    #[schema(example = "25000")]
    pub value: Decimal,
    pub close_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
}
