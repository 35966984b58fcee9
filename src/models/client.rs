// src/models/client.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[schema(example = "5000000")]
    pub annual_revenue: Option<Decimal>,
    #[schema(example = "50000")]
    pub contract_value: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    #[schema(example = "Innovate Corp")]
    pub name: String,
    #[schema(example = "contact@innovate.com")]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub financial_data: Option<FinancialData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Innovate Corp")]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "contact@innovate.com")]
    pub email: String,

    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub financial_data: Option<FinancialData>,
}
