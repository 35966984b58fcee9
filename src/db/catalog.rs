// src/db/catalog.rs

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pipeline::{PipelineConfigFile, Process, Stage},
};

/// Configuração estática de processos e etapas. Somente leitura depois de
/// carregada.
#[derive(Debug, Clone)]
pub struct PipelineCatalog {
    processes: Vec<Process>,
    stages: Vec<Stage>,
}

impl PipelineCatalog {
    /// Monta o catálogo validando as invariantes:
    /// toda etapa aponta para um processo existente e `order` é única por processo.
    pub fn new(processes: Vec<Process>, stages: Vec<Stage>) -> Result<Self, AppError> {
        let process_ids: HashSet<Uuid> = processes.iter().map(|p| p.id).collect();
        let mut seen_orders: HashSet<(Uuid, i32)> = HashSet::new();

        for stage in &stages {
            if !process_ids.contains(&stage.process_id) {
                return Err(AppError::InvalidPipelineConfig(format!(
                    "stage '{}' references unknown process {}",
                    stage.name, stage.process_id
                )));
            }
            if !seen_orders.insert((stage.process_id, stage.order)) {
                return Err(AppError::InvalidPipelineConfig(format!(
                    "duplicate order {} in process {}",
                    stage.order, stage.process_id
                )));
            }
        }

        Ok(Self { processes, stages })
    }

    pub fn from_config(config: PipelineConfigFile) -> Result<Self, AppError> {
        let mut processes = Vec::with_capacity(config.processes.len());
        let mut stages = Vec::new();

        for process_cfg in config.processes {
            let process_id = process_cfg.id.unwrap_or_else(Uuid::new_v4);

            for (index, stage_cfg) in process_cfg.stages.into_iter().enumerate() {
                stages.push(Stage {
                    id: stage_cfg.id.unwrap_or_else(Uuid::new_v4),
                    process_id,
                    name: stage_cfg.name,
                    order: stage_cfg.order.unwrap_or(index as i32 + 1),
                });
            }

            processes.push(Process {
                id: process_id,
                name: process_cfg.name,
            });
        }

        Self::new(processes, stages)
    }

    /// Lê o JSON de `path` (ver `PipelineConfigFile`).
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler o catálogo em {}", path.display()))?;
        let config: PipelineConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("JSON de catálogo inválido em {}", path.display()))?;
        Ok(Self::from_config(config)?)
    }

    /// Catálogo de exemplo do CRM.
    pub fn sample() -> Self {
        let sample = [
            (
                "Proceso de Ventas Estándar",
                &[
                    "Contacto Inicial",
                    "Calificación",
                    "Propuesta Enviada",
                    "Negociación",
                    "Cerrado Ganado",
                    "Cerrado Perdido",
                ][..],
            ),
            (
                "Proceso Enterprise",
                &[
                    "Descubrimiento Profundo",
                    "Presentación Solución",
                    "Prueba de Concepto (PoC)",
                    "Revisión Legal",
                    "Firma Contrato",
                ][..],
            ),
            (
                "Proceso SMB",
                &["Lead Caliente", "Demo Rápida", "Oferta", "Cierre Venta"][..],
            ),
        ];

        let mut processes = Vec::new();
        let mut stages = Vec::new();
        for (process_name, stage_names) in sample {
            let process = Process {
                id: Uuid::new_v4(),
                name: process_name.to_string(),
            };
            stages.extend(stage_names.iter().enumerate().map(|(i, name)| Stage {
                id: Uuid::new_v4(),
                process_id: process.id,
                name: name.to_string(),
                order: i as i32 + 1,
            }));
            processes.push(process);
        }

        Self { processes, stages }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn process(&self, id: Uuid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    pub fn stage(&self, id: Uuid) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Etapas de um processo, ordenadas por `order`.
    pub fn stages_for(&self, process_id: Uuid) -> Vec<&Stage> {
        let mut stages: Vec<&Stage> = self
            .stages
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect();
        stages.sort_by_key(|s| s.order);
        stages
    }

    // Busca linear, comparação case-insensitive; o primeiro que casar vence.
    pub fn find_process_by_name(&self, name: &str) -> Option<&Process> {
        let wanted = name.to_lowercase();
        self.processes.iter().find(|p| p.name.to_lowercase() == wanted)
    }

    pub fn find_stage_by_name(&self, process_id: Uuid, name: &str) -> Option<&Stage> {
        let wanted = name.to_lowercase();
        self.stages
            .iter()
            .find(|s| s.process_id == process_id && s.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pipeline::{ProcessConfig, StageConfig};

    #[test]
    fn sample_catalog_has_three_processes_and_fifteen_stages() {
        let catalog = PipelineCatalog::sample();
        assert_eq!(catalog.processes().len(), 3);
        assert_eq!(catalog.stages().len(), 15);
    }

    #[test]
    fn lookups_ignore_case_including_accents() {
        let catalog = PipelineCatalog::sample();
        let process = catalog
            .find_process_by_name("PROCESO DE VENTAS ESTÁNDAR")
            .expect("process");
        let stage = catalog
            .find_stage_by_name(process.id, "calificación")
            .expect("stage");
        assert_eq!(stage.name, "Calificación");
        assert_eq!(stage.process_id, process.id);
    }

    #[test]
    fn stage_lookup_is_scoped_to_process() {
        let catalog = PipelineCatalog::sample();
        let smb = catalog.find_process_by_name("Proceso SMB").unwrap();
        assert!(catalog.find_stage_by_name(smb.id, "Calificación").is_none());
    }

    #[test]
    fn stages_for_returns_them_in_order() {
        let process = Process { id: Uuid::new_v4(), name: "P".into() };
        let stage = |name: &str, order| Stage {
            id: Uuid::new_v4(),
            process_id: process.id,
            name: name.into(),
            order,
        };
        let catalog =
            PipelineCatalog::new(vec![process.clone()], vec![stage("Second", 2), stage("First", 1)])
                .unwrap();

        let names: Vec<_> = catalog.stages_for(process.id).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn rejects_duplicate_order_within_process() {
        let config = PipelineConfigFile {
            processes: vec![ProcessConfig {
                id: None,
                name: "P".into(),
                stages: vec![
                    StageConfig { id: None, name: "A".into(), order: Some(1) },
                    StageConfig { id: None, name: "B".into(), order: Some(1) },
                ],
            }],
        };
        let err = PipelineCatalog::from_config(config).unwrap_err();
        assert!(matches!(err, AppError::InvalidPipelineConfig(_)));
    }

    #[test]
    fn rejects_stage_of_unknown_process() {
        let stage = Stage {
            id: Uuid::new_v4(),
            process_id: Uuid::new_v4(),
            name: "Orphan".into(),
            order: 1,
        };
        assert!(PipelineCatalog::new(vec![], vec![stage]).is_err());
    }

    #[test]
    fn config_defaults_order_to_position() {
        let config: PipelineConfigFile = serde_json::from_str(
            r#"{"processes":[{"name":"Renovaciones","stages":[{"name":"Aviso"},{"name":"Firma"}]}]}"#,
        )
        .unwrap();
        let catalog = PipelineCatalog::from_config(config).unwrap();
        let process = catalog.find_process_by_name("renovaciones").unwrap();
        let orders: Vec<_> = catalog.stages_for(process.id).iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn load_reads_json_file_and_reports_missing_path() {
        let path = std::env::temp_dir().join(format!("pipeline-{}.json", Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"processes":[{"name":"Canal Partner","stages":[{"name":"Registro","order":1}]}]}"#,
        )
        .unwrap();

        let catalog = PipelineCatalog::load(&path).unwrap();
        assert_eq!(catalog.processes().len(), 1);
        assert_eq!(catalog.stages()[0].name, "Registro");

        std::fs::remove_file(&path).unwrap();
        let err = PipelineCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("Falha ao ler o catálogo"));
    }
}
