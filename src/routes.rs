// src/routes.rs

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

/// Monta o router completo da API.
pub fn app(app_state: AppState) -> Router {
    let max_import_bytes = app_state.config.max_import_bytes;

    let pipeline_routes = Router::new()
        .route("/", get(handlers::pipelines::list_processes))
        .route("/{id}/stages", get(handlers::pipelines::list_stages));

    let opportunity_routes = Router::new()
        .route("/"
               ,get(handlers::opportunities::list_opportunities)
               .post(handlers::opportunities::create_opportunity)
        )
        // Rotas fixas antes de "/{id}"
        .route("/import"
               ,post(handlers::import::import_opportunities)
               .layer(DefaultBodyLimit::max(max_import_bytes))
        )
        .route("/import/template", get(handlers::import::download_template))
        .route("/{id}"
               ,get(handlers::opportunities::get_opportunity)
               .put(handlers::opportunities::update_opportunity)
               .delete(handlers::opportunities::delete_opportunity)
        );

    let client_routes = Router::new()
        .route("/"
               ,get(handlers::clients::list_clients)
               .post(handlers::clients::create_client)
        )
        .route("/{id}"
               ,get(handlers::clients::get_client)
               .put(handlers::clients::update_client)
               .delete(handlers::clients::delete_client)
        );

    let call_routes = Router::new()
        .route("/"
               ,get(handlers::calls::list_calls)
               .post(handlers::calls::create_call)
        )
        .route("/{id}"
               ,get(handlers::calls::get_call)
               .put(handlers::calls::update_call)
               .delete(handlers::calls::delete_call)
        );

    let task_routes = Router::new()
        .route("/"
               ,get(handlers::tasks::list_tasks)
               .post(handlers::tasks::create_task)
        )
        .route("/{id}"
               ,get(handlers::tasks::get_task)
               .put(handlers::tasks::update_task)
               .delete(handlers::tasks::delete_task)
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/processes", pipeline_routes)
        .nest("/api/opportunities", opportunity_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/calls", call_routes)
        .nest("/api/tasks", task_routes)
        .with_state(app_state)
}
