use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crm_backend::{
    config::{AppState, Config},
    db::PipelineCatalog,
    routes,
};

const BODY_LIMIT: usize = 1024 * 1024;

fn app(seed: bool) -> Router {
    app_with(Config {
        seed_sample_data: seed,
        ..Config::default()
    })
}

fn app_with(config: Config) -> Router {
    routes::app(AppState::with_catalog(config, PipelineCatalog::sample()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn import_request(csv: impl Into<Body>) -> Request<Body> {
    Request::post("/api/opportunities/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(csv.into())
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let app = app(false);
    let (status, body) = send(&app, Request::get("/api/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn import_then_list_shows_new_opportunity_first() {
    let app = app(true);
    let csv = "nombre,telefono,proceso_ventas,etapa\nAcme Deal,555-9999,Proceso de Ventas Estándar,Calificación\n";

    let (status, outcome) = send_json(&app, import_request(csv)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(outcome["status"], "success");
    assert_eq!(outcome["imported"][0]["name"], "Acme Deal");
    assert_eq!(outcome["imported"][0]["status"], "Activa");
    assert_eq!(outcome["imported"][0]["value"], 0.0);
    assert_eq!(outcome["notification"]["title"], "Import Successful");
    assert!(outcome.get("errorReport").is_none());

    let (status, list) = send_json(
        &app,
        Request::get("/api/opportunities").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["name"], "Acme Deal");
    assert_eq!(list[0]["stageName"], "Calificación");
}

#[tokio::test]
async fn partial_import_returns_error_report() {
    let app = app(false);
    let csv = "nombre,telefono,proceso_ventas,etapa\n\
               Good,1,Proceso SMB,Oferta\n\
               Bad,2,Proceso Fantasma,Oferta\n";

    let (status, outcome) = send_json(&app, import_request(csv)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(outcome["status"], "partial");
    assert_eq!(outcome["errors"][0]["rowData"], "Bad,2,Proceso Fantasma,Oferta");
    assert_eq!(
        outcome["errors"][0]["reason"],
        "Process 'Proceso Fantasma' not found in configuration."
    );
    assert_eq!(outcome["errorReport"]["fileName"], "reporte_errores_importacion.csv");
    assert_eq!(
        outcome["errorReport"]["content"],
        "RowData,Reason\n\"Bad,2,Proceso Fantasma,Oferta\",\"Process 'Proceso Fantasma' not found in configuration.\""
    );
}

#[tokio::test]
async fn import_with_no_valid_rows_is_unprocessable() {
    let app = app(false);
    let csv = "nombre,telefono,proceso_ventas,etapa\n,1,Proceso SMB,Oferta\n";

    let (status, outcome) = send_json(&app, import_request(csv)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(outcome["status"], "failed");
    assert_eq!(outcome["errors"][0]["reason"], "Missing 'nombre' (Opportunity Name).");
}

#[tokio::test]
async fn missing_header_is_reported_in_error_envelope() {
    let app = app(false);
    let csv = "nombre,telefono,proceso_ventas\nAcme,1,Proceso SMB\n";

    let (status, body) = send_json(&app, import_request(csv)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "CSV is missing required headers: etapa.");
    assert_eq!(body["missingHeaders"][0], "etapa");

    let (_, list) = send_json(
        &app,
        Request::get("/api/opportunities").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_and_binary_bodies_are_bad_requests() {
    let app = app(false);

    let (status, body) = send_json(&app, import_request("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File is empty or unreadable.");

    let (status, body) = send_json(&app, import_request(vec![0xffu8, 0xfe, 0x41])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to read the file.");
}

#[tokio::test]
async fn template_download_round_trips_through_import() {
    let app = app(false);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/opportunities/import/template")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("plantilla_oportunidades.csv"));
    let template = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();

    let (status, outcome) = send_json(&app, import_request(template.to_vec())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(outcome["imported"].as_array().unwrap().len(), 1);
    assert_eq!(outcome["errors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stages_endpoint_lists_stages_in_order() {
    let app = app(false);
    let (_, processes) = send_json(&app, Request::get("/api/processes").body(Body::empty()).unwrap()).await;
    let smb = processes
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Proceso SMB")
        .unwrap();
    let uri = format!("/api/processes/{}/stages", smb["id"].as_str().unwrap());

    let (status, stages) = send_json(&app, Request::get(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    let orders: Vec<i64> = stages
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
    assert!(!orders.is_empty());
}

#[tokio::test]
async fn create_client_then_search_it() {
    let app = app(false);
    let payload = r#"{"name":"Innovate Corp","email":"contact@innovate.com","company":"Innovate"}"#;

    let (status, created) = send_json(
        &app,
        Request::post("/api/clients")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Innovate Corp");

    let (status, found) = send_json(
        &app,
        Request::get("/api/clients?search=innovate").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_client_email_returns_validation_details() {
    let app = app(false);
    let payload = r#"{"name":"Broken","email":"nope"}"#;

    let (status, body) = send_json(
        &app,
        Request::post("/api/clients")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["email"][0], "invalid_email");
}

#[tokio::test]
async fn unknown_opportunity_is_not_found() {
    let app = app(false);
    let uri = format!("/api/opportunities/{}", uuid::Uuid::new_v4());
    let (status, body) = send_json(&app, Request::get(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Opportunity not found.");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app(false);
    let (status, doc) = send_json(
        &app,
        Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/opportunities/import").is_some());
}

#[tokio::test]
async fn import_over_body_limit_is_rejected_with_error_envelope() {
    let app = app_with(Config {
        seed_sample_data: false,
        max_import_bytes: 64,
        ..Config::default()
    });
    let mut csv = String::from("nombre,telefono,proceso_ventas,etapa\n");
    for i in 0..10 {
        csv.push_str(&format!("Deal {i},555,Proceso SMB,Oferta\n"));
    }
    assert!(csv.len() > 64);

    let (status, body) = send_json(&app, import_request(csv)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File exceeds the maximum import size of 64 bytes.");

    let (_, list) = send_json(
        &app,
        Request::get("/api/opportunities").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn call_created_over_http_defaults_to_general_type() {
    let app = app(true);
    let (_, opportunities) = send_json(
        &app,
        Request::get("/api/opportunities").body(Body::empty()).unwrap(),
    )
    .await;
    let opportunity_id = opportunities[0]["id"].as_str().unwrap();
    let payload = format!(
        r#"{{"opportunityId":"{opportunity_id}","dateTime":"2026-03-01T10:00:00Z","summary":"Kickoff"}}"#
    );

    let (status, call) = send_json(
        &app,
        Request::post("/api/calls")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(call["callType"], "General");
    assert_eq!(call["opportunityName"], opportunities[0]["name"]);
}
