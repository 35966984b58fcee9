// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use anyhow::Context;

use crate::{
    db::{InMemoryRepository, PipelineCatalog, SampleData},
    services::{CallService, ClientService, ImportService, OpportunityService, TaskService},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ASSIGNEE: &str = "user1";
const DEFAULT_MAX_IMPORT_BYTES: usize = 5 * 1024 * 1024;

/// Configuração lida das variáveis de ambiente (com `.env` opcional).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub pipeline_config_path: Option<PathBuf>,
    pub seed_sample_data: bool,
    pub default_assignee: String,
    pub max_import_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            pipeline_config_path: None,
            seed_sample_data: true,
            default_assignee: DEFAULT_ASSIGNEE.to_string(),
            max_import_bytes: DEFAULT_MAX_IMPORT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Monta a configuração a partir de uma função de leitura de variáveis.
    /// Valores inválidos abortam a inicialização.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("SEED_SAMPLE_DATA deve ser true ou false, veio '{raw}'"))?,
            None => defaults.seed_sample_data,
        };

        let max_import_bytes = match lookup("MAX_IMPORT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MAX_IMPORT_BYTES deve ser um número, veio '{raw}'"))?,
            None => defaults.max_import_bytes,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            pipeline_config_path: lookup("PIPELINE_CONFIG_PATH").map(PathBuf::from),
            seed_sample_data,
            default_assignee: lookup("DEFAULT_ASSIGNEE").unwrap_or(defaults.default_assignee),
            max_import_bytes,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<PipelineCatalog>,
    pub import_service: ImportService,
    pub opportunity_service: OpportunityService,
    pub client_service: ClientService,
    pub call_service: CallService,
    pub task_service: TaskService,
}

impl AppState {
    /// Carrega o catálogo (arquivo JSON ou o de exemplo) e monta os services.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = match &config.pipeline_config_path {
            Some(path) => PipelineCatalog::load(path)?,
            None => PipelineCatalog::sample(),
        };

        tracing::info!(
            processes = catalog.processes().len(),
            stages = catalog.stages().len(),
            "✅ Catálogo de pipeline carregado"
        );

        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: Config, catalog: PipelineCatalog) -> Self {
        let catalog = Arc::new(catalog);

        let sample = if config.seed_sample_data {
            SampleData::build(&catalog, &config.default_assignee)
        } else {
            SampleData::default()
        };

        // --- Monta o gráfico de dependências ---
        let opportunities = Arc::new(InMemoryRepository::with_rows(sample.opportunities));
        let clients = Arc::new(InMemoryRepository::with_rows(sample.clients));
        let calls = Arc::new(InMemoryRepository::with_rows(sample.calls));
        let tasks = Arc::new(InMemoryRepository::with_rows(sample.tasks));

        let assignee = config.default_assignee.clone();

        Self {
            import_service: ImportService::new(catalog.clone(), opportunities.clone(), &assignee),
            opportunity_service: OpportunityService::new(
                opportunities.clone(),
                clients.clone(),
                catalog.clone(),
                &assignee,
            ),
            client_service: ClientService::new(clients),
            call_service: CallService::new(calls, opportunities.clone()),
            task_service: TaskService::new(tasks, opportunities, &assignee),
            catalog,
            config: Arc::new(config),
        }
    }
}
