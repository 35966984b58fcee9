// src/models/import.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::opportunity::Opportunity;

/// Linha bruta do CSV, já mapeada pelos cabeçalhos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    // Número da linha no arquivo (1-based, o cabeçalho é a linha 1)
    pub line_number: usize,
    // Texto original, usado no relatório de erros
    pub raw: String,
    pub nombre: String,
    pub telefono: String,
    pub proceso_ventas: String,
    pub etapa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRow {
    #[schema(example = ",555-0000,Proceso SMB,Oferta")]
    pub row_data: String,
    #[schema(example = "Missing 'nombre' (Opportunity Name).")]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    Partial,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notification {
    #[schema(example = "Import Partially Successful")]
    pub title: String,
    pub description: String,
}

/// Um arquivo CSV pronto para download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsvDocument {
    #[schema(example = "reporte_errores_importacion.csv")]
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub status: ImportStatus,
    pub imported: Vec<Opportunity>,
    pub errors: Vec<ErrorRow>,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_report: Option<CsvDocument>,
}
