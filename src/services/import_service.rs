// src/services/import_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PipelineCatalog, Repository},
    models::{
        import::{CsvDocument, ErrorRow, ImportOutcome, ImportRow, ImportStatus, Notification},
        opportunity::{Opportunity, OpportunityStatus},
    },
    services::csv_import::{self, ResolvedRow},
};

/// Resultado da validação, antes de gravar qualquer coisa.
#[derive(Debug, Clone)]
pub struct ImportBatch {
    pub opportunities: Vec<Opportunity>,
    pub errors: Vec<ErrorRow>,
}

#[derive(Clone)]
pub struct ImportService {
    catalog: Arc<PipelineCatalog>,
    opportunities: Arc<dyn Repository<Opportunity>>,
    default_assignee: String,
}

impl ImportService {
    pub fn new(
        catalog: Arc<PipelineCatalog>,
        opportunities: Arc<dyn Repository<Opportunity>>,
        default_assignee: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            opportunities,
            default_assignee: default_assignee.into(),
        }
    }

    /// Valida o texto linha a linha. Só falha nos erros fatais do cabeçalho;
    /// linhas ruins viram `ErrorRow` e o processamento continua.
    pub fn build_batch(&self, text: &str, now: DateTime<Utc>) -> Result<ImportBatch, AppError> {
        let rows = csv_import::parse_rows(text)?;

        let mut opportunities = Vec::new();
        let mut errors = Vec::new();

        for row in rows {
            match csv_import::validate_row(&row, &self.catalog) {
                Ok(resolved) => {
                    opportunities.push(self.opportunity_from_row(&row, resolved, now));
                }
                Err(rejection) => {
                    tracing::debug!(line = row.line_number, reason = %rejection, "Linha rejeitada na importação");
                    errors.push(ErrorRow {
                        row_data: row.raw,
                        reason: rejection.to_string(),
                    });
                }
            }
        }

        Ok(ImportBatch {
            opportunities,
            errors,
        })
    }

    /// Importa o corpo bruto do upload. Corpo que não é UTF-8 é um erro de leitura.
    pub async fn import_bytes(&self, body: &[u8]) -> Result<ImportOutcome, AppError> {
        let text = std::str::from_utf8(body).map_err(|_| AppError::ImportUnreadable)?;
        self.import_csv(text).await
    }

    pub async fn import_csv(&self, text: &str) -> Result<ImportOutcome, AppError> {
        let batch = self.build_batch(text, Utc::now())?;
        let imported_count = batch.opportunities.len();
        let failed_count = batch.errors.len();

        // Uma única escrita para o lote inteiro
        if imported_count > 0 {
            self.opportunities
                .insert_many(batch.opportunities.clone())
                .await?;
        }

        let error_report = if failed_count > 0 {
            Some(csv_import::error_report(&batch.errors)?)
        } else {
            None
        };

        let (status, notification) = summarize(imported_count, failed_count);

        tracing::info!(
            imported = imported_count,
            failed = failed_count,
            status = ?status,
            "Importação de oportunidades concluída"
        );

        Ok(ImportOutcome {
            status,
            imported: batch.opportunities,
            errors: batch.errors,
            notification,
            error_report,
        })
    }

    pub fn template(&self) -> CsvDocument {
        csv_import::template()
    }

    fn opportunity_from_row(
        &self,
        row: &ImportRow,
        resolved: ResolvedRow<'_>,
        now: DateTime<Utc>,
    ) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            name: row.nombre.clone(),
            client_id: None,
            client_name: None,
            primary_contact_phone: Some(row.telefono.clone()).filter(|t| !t.is_empty()),
            last_call_date: None,
            billing_amount_eur: None,
            collected_amount_eur: None,
            status: OpportunityStatus::Activa,
            proposal_status: None,
            process_id: Some(resolved.process.id),
            process_name: Some(resolved.process.name.clone()),
            stage_id: Some(resolved.stage.id),
            stage_name: Some(resolved.stage.name.clone()),
            value: Decimal::ZERO,
            close_date: now,
            description: None,
            assigned_to: self.default_assignee.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Classifica o resultado: sucesso total, parcial ou falha.
pub fn summarize(imported: usize, failed: usize) -> (ImportStatus, Notification) {
    if imported == 0 {
        (
            ImportStatus::Failed,
            Notification {
                title: "Import Failed".into(),
                description: format!(
                    "No opportunities imported. {failed} rows had issues. Check the attached error report."
                ),
            },
        )
    } else if failed > 0 {
        (
            ImportStatus::Partial,
            Notification {
                title: "Import Partially Successful".into(),
                description: format!(
                    "{imported} opportunities imported. {failed} rows had errors. Error report attached."
                ),
            },
        )
    } else {
        (
            ImportStatus::Success,
            Notification {
                title: "Import Successful".into(),
                description: format!("{imported} opportunities imported successfully."),
            },
        )
    }
}
