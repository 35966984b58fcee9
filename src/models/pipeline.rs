// src/models/pipeline.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Structs de Configuração ---

/// Um funil de vendas nomeado (ex: "Proceso de Ventas Estándar").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Proceso de Ventas Estándar")]
    pub name: String,
}

/// Etapa ordenada que pertence a exatamente um `Process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: Uuid,
    pub process_id: Uuid,
    #[schema(example = "Calificación")]
    pub name: String,
    // Única dentro do mesmo process_id
    #[schema(example = 2)]
    pub order: i32,
}

// --- Formato do arquivo PIPELINE_CONFIG_PATH ---

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfigFile {
    pub processes: Vec<ProcessConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfig {
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    pub id: Option<Uuid>,
    pub name: String,
    // Se ausente, usa a posição (1-based) na lista
    pub order: Option<i32>,
}
