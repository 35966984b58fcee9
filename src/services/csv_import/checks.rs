// src/services/csv_import/checks.rs

use thiserror::Error;

use crate::{
    db::catalog::PipelineCatalog,
    models::{
        import::ImportRow,
        pipeline::{Process, Stage},
    },
};

/// Motivo da rejeição de uma linha. O `Display` é o texto que vai para o
/// relatório de erros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("Missing 'nombre' (Opportunity Name).")]
    MissingName,

    #[error("Process '{0}' not found in configuration.")]
    UnknownProcess(String),

    #[error("Stage '{stage}' not found in process '{process}'.")]
    UnknownStage { stage: String, process: String },
}

/// Uma verificação aplicada a cada linha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCheck {
    RequireName,
    ResolveProcess,
    ResolveStage,
}

/// Ordem de execução: a primeira verificação que falhar define o único
/// motivo reportado para a linha.
pub const ROW_CHECKS: [RowCheck; 3] = [
    RowCheck::RequireName,
    RowCheck::ResolveProcess,
    RowCheck::ResolveStage,
];

/// Linha aprovada, com as entidades do catálogo que ela referencia.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRow<'a> {
    pub process: &'a Process,
    pub stage: &'a Stage,
}

#[derive(Default)]
struct Resolution<'a> {
    process: Option<&'a Process>,
    stage: Option<&'a Stage>,
}

impl RowCheck {
    fn apply<'a>(
        self,
        row: &ImportRow,
        catalog: &'a PipelineCatalog,
        resolution: &mut Resolution<'a>,
    ) -> Result<(), RowRejection> {
        match self {
            RowCheck::RequireName => {
                if row.nombre.is_empty() {
                    return Err(RowRejection::MissingName);
                }
            }
            RowCheck::ResolveProcess => {
                let process = catalog
                    .find_process_by_name(&row.proceso_ventas)
                    .ok_or_else(|| unknown_process(row))?;
                resolution.process = Some(process);
            }
            RowCheck::ResolveStage => {
                let process = resolution.process.ok_or_else(|| unknown_process(row))?;
                let stage = catalog
                    .find_stage_by_name(process.id, &row.etapa)
                    .ok_or_else(|| unknown_stage(row))?;
                resolution.stage = Some(stage);
            }
        }
        Ok(())
    }
}

fn unknown_process(row: &ImportRow) -> RowRejection {
    RowRejection::UnknownProcess(row.proceso_ventas.clone())
}

fn unknown_stage(row: &ImportRow) -> RowRejection {
    RowRejection::UnknownStage {
        stage: row.etapa.clone(),
        process: row.proceso_ventas.clone(),
    }
}

/// Roda `ROW_CHECKS` em ordem e para na primeira falha.
pub fn validate_row<'a>(
    row: &ImportRow,
    catalog: &'a PipelineCatalog,
) -> Result<ResolvedRow<'a>, RowRejection> {
    let mut resolution = Resolution::default();
    for check in ROW_CHECKS {
        check.apply(row, catalog, &mut resolution)?;
    }

    let process = resolution.process.ok_or_else(|| unknown_process(row))?;
    let stage = resolution.stage.ok_or_else(|| unknown_stage(row))?;
    Ok(ResolvedRow { process, stage })
}
