// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "CRM Backend", description = "Oportunidades, clientes, chamadas, tarefas e importação CSV"),
    paths(
        // --- Pipeline ---
        handlers::pipelines::list_processes,
        handlers::pipelines::list_stages,

        // --- Opportunities ---
        handlers::opportunities::list_opportunities,
        handlers::opportunities::create_opportunity,
        handlers::opportunities::get_opportunity,
        handlers::opportunities::update_opportunity,
        handlers::opportunities::delete_opportunity,

        // --- Import ---
        handlers::import::import_opportunities,
        handlers::import::download_template,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Calls ---
        handlers::calls::list_calls,
        handlers::calls::create_call,
        handlers::calls::get_call,
        handlers::calls::update_call,
        handlers::calls::delete_call,

        // --- Tasks ---
        handlers::tasks::list_tasks,
        handlers::tasks::create_task,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,
    ),
    components(
        schemas(
            // --- Pipeline ---
            models::pipeline::Process,
            models::pipeline::Stage,

            // --- Opportunities ---
            models::opportunity::OpportunityStatus,
            models::opportunity::ProposalStatus,
            models::opportunity::Opportunity,
            models::opportunity::OpportunityPayload,

            // --- Import ---
            models::import::ErrorRow,
            models::import::ImportStatus,
            models::import::Notification,
            models::import::CsvDocument,
            models::import::ImportOutcome,

            // --- Clients ---
            models::client::FinancialData,
            models::client::Client,
            models::client::ClientPayload,

            // --- Calls ---
            models::call::CallType,
            models::call::Call,
            models::call::CallPayload,

            // --- Tasks ---
            models::task::TaskStatus,
            models::task::TaskType,
            models::task::Task,
            models::task::TaskPayload,
        )
    ),
    tags(
        (name = "Pipeline", description = "Processos de venda e suas etapas"),
        (name = "Opportunities", description = "Gestão de Oportunidades"),
        (name = "Import", description = "Importação de oportunidades via CSV"),
        (name = "Clients", description = "Gestão de Clientes"),
        (name = "Calls", description = "Registro de Chamadas"),
        (name = "Tasks", description = "Tarefas e lembretes")
    )
)]
pub struct ApiDoc;
