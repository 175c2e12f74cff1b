use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use regex::Regex;
use serde_json::{json, Value};
use tower::ServiceExt;

use ms_distribution::config::EnvironmentConfig;
use ms_distribution::routes::create_api_router;
use ms_distribution::state::AppState;

// Función helper para crear la app de test sobre el almacén en memoria
fn create_test_app() -> Router {
    let config = EnvironmentConfig::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some("memory".to_string()),
        "ENVIRONMENT" => Some("test".to_string()),
        _ => None,
    })
    .expect("memory config");

    create_api_router(&AppState::in_memory(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn route_body(name: &str) -> Value {
    json!({
        "organizationId": "org-1",
        "routeName": name,
        "zones": [
            { "zoneId": "zoneA", "order": 1, "estimatedDuration": 2 },
            { "zoneId": "zoneB", "order": 2, "estimatedDuration": 3 }
        ],
        "totalEstimatedDuration": 5,
        "responsibleUserId": "user-1"
    })
}

fn program_body(date: &str) -> Value {
    json!({
        "organizationId": "org-1",
        "scheduleId": "sch-1",
        "routeId": "rt-1",
        "zoneId": "zone-1",
        "programDate": date,
        "plannedStartTime": "08:00",
        "plannedEndTime": "12:00",
        "status": "PLANNED",
        "responsibleUserId": "user-1"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ms-distribution");
    assert_eq!(body["environment"], "test");
}

#[tokio::test]
async fn test_create_route_and_get_it_back() {
    let app = create_test_app();
    let (status, created) = send(&app, Method::POST, "/api/v2/routes", Some(route_body("Ruta Norte"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    let code = created["data"]["routeCode"].as_str().unwrap();
    assert_eq!(code, "RUT001");
    assert!(Regex::new(r"^RUT\d{3,}$").unwrap().is_match(code));
    assert_eq!(created["data"]["status"], "ACTIVE");

    let id = created["data"]["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/v2/routes/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    let zones = fetched["data"]["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0]["zoneId"], "zoneA");
    assert_eq!(zones[0]["order"], 1);
    assert_eq!(zones[0]["estimatedDuration"], 2);
    assert_eq!(zones[1]["zoneId"], "zoneB");
    assert_eq!(zones[1]["estimatedDuration"], 3);
    assert_eq!(fetched["data"]["createdAt"], created["data"]["createdAt"]);
}

#[tokio::test]
async fn test_codes_are_sequential_per_kind() {
    let app = create_test_app();
    send(&app, Method::POST, "/api/v2/routes", Some(route_body("A"))).await;
    let (_, second) = send(&app, Method::POST, "/api/v2/routes", Some(route_body("B"))).await;
    let (_, fare) = send(
        &app,
        Method::POST,
        "/api/v2/fare",
        Some(json!({
            "organizationId": "org-1",
            "fareName": "Tarifa diaria",
            "fareType": "DIARIA",
            "fareAmount": 12.5
        })),
    )
    .await;

    assert_eq!(second["data"]["routeCode"], "RUT002");
    assert_eq!(fare["data"]["fareCode"], "TAR001");
}

#[tokio::test]
async fn test_delete_then_get_returns_not_found_envelope() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/api/v2/routes", Some(route_body("Ruta Sur"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v2/routes/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &format!("/api/v2/routes/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["errorCode"], 404);
    assert_eq!(body["data"]["message"], "Route not found");
    assert_eq!(
        body["data"]["details"],
        format!("Route with id {} does not exist", id)
    );
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::DELETE, "/api/v2/schedules/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["message"], "Schedule not found");
}

#[tokio::test]
async fn test_deactivate_moves_record_to_inactive_listing() {
    let app = create_test_app();
    let (_, first) = send(&app, Method::POST, "/api/v2/routes", Some(route_body("Uno"))).await;
    send(&app, Method::POST, "/api/v2/routes", Some(route_body("Dos"))).await;
    let id = first["data"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v2/routes/{}/deactivate", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "INACTIVE");

    let (_, inactive) = send(&app, Method::GET, "/api/v2/routes/inactive", None).await;
    let inactive = inactive["data"].as_array().unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0]["id"], id);

    let (_, active) = send(&app, Method::GET, "/api/v2/routes/active", None).await;
    assert_eq!(active["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v2/routes/{}/activate", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ACTIVE");
}

#[tokio::test]
async fn test_update_keeps_identity_fields() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/api/v2/routes", Some(route_body("Inicial"))).await;
    let id = created["data"]["id"].as_str().unwrap();

    let mut changed = route_body("Renombrada");
    changed["zones"] = json!([{ "zoneId": "zoneC", "order": 1, "estimatedDuration": 4 }]);
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v2/routes/{}", id),
        Some(changed),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["routeName"], "Renombrada");
    assert_eq!(updated["data"]["zones"].as_array().unwrap().len(), 1);
    assert_eq!(updated["data"]["id"], created["data"]["id"]);
    assert_eq!(updated["data"]["routeCode"], created["data"]["routeCode"]);
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);
}

#[tokio::test]
async fn test_program_keeps_request_status_and_date() {
    let app = create_test_app();
    let (status, created) = send(&app, Method::POST, "/api/v2/programs", Some(program_body("2024-03-15"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["programCode"], "PROG001");
    assert_eq!(created["data"]["programDate"], "2024-03-15");
    assert_eq!(created["data"]["status"], "PLANNED");
}

#[tokio::test]
async fn test_program_with_bad_date_is_internal_error() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::POST, "/api/v2/programs", Some(program_body("15/03/2024"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["errorCode"], 500);
    assert_eq!(body["data"]["message"], "Error interno del servidor");

    let (_, listed) = send(&app, Method::GET, "/api/v2/programs", None).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_programs_have_no_status_listings() {
    let app = create_test_app();
    send(&app, Method::POST, "/api/v2/programs", Some(program_body("2024-03-15"))).await;

    let (status, body) = send(&app, Method::GET, "/api/v2/programs/active", None).await;

    // "active" se interpreta como id
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["message"], "Program not found");
}

#[tokio::test]
async fn test_fare_amount_is_serialized_as_number() {
    let app = create_test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v2/fare",
        Some(json!({
            "organizationId": "org-1",
            "fareName": "Tarifa mensual",
            "fareType": "MENSUAL",
            "fareAmount": 45.75
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["data"]["fareAmount"].is_number());
    assert_eq!(created["data"]["fareAmount"].as_f64(), Some(45.75));
}

#[tokio::test]
async fn test_schedule_days_keep_order() {
    let app = create_test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v2/schedules",
        Some(json!({
            "organizationId": "org-1",
            "zoneId": "zone-1",
            "scheduleName": "Mañanas",
            "daysOfWeek": ["LUNES", "MIERCOLES", "VIERNES"],
            "startTime": "06:00",
            "endTime": "10:00",
            "durationHours": 4
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["scheduleCode"], "HOR001");
    assert_eq!(
        created["data"]["daysOfWeek"],
        json!(["LUNES", "MIERCOLES", "VIERNES"])
    );
}

#[tokio::test]
async fn test_security_headers_are_present() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.get("server").is_none());
}

fn schedule_body() -> Value {
    json!({
        "organizationId": "org-1",
        "zoneId": "zone-1",
        "scheduleName": "Tardes",
        "daysOfWeek": ["MARTES", "JUEVES"],
        "startTime": "14:00",
        "endTime": "18:00",
        "durationHours": 4
    })
}

fn fare_body(amount: f64) -> Value {
    json!({
        "organizationId": "org-1",
        "fareName": "Tarifa semanal",
        "fareType": "SEMANAL",
        "fareAmount": amount
    })
}

#[tokio::test]
async fn test_every_kind_reads_back_its_input() {
    let app = create_test_app();
    let cases = [
        ("/api/v2/routes", "routeCode", "RUT", route_body("Ruta Este")),
        ("/api/v2/schedules", "scheduleCode", "HOR", schedule_body()),
        ("/api/v2/fare", "fareCode", "TAR", fare_body(10.125)),
        ("/api/v2/programs", "programCode", "PROG", program_body("2024-07-01")),
    ];

    for (base, code_field, prefix, input) in cases {
        let (status, created) = send(&app, Method::POST, base, Some(input.clone())).await;
        assert_eq!(status, StatusCode::CREATED, "{}", base);

        let id = created["data"]["id"].as_str().unwrap();
        let (status, fetched) = send(&app, Method::GET, &format!("{}/{}", base, id), None).await;
        assert_eq!(status, StatusCode::OK, "{}", base);

        let code = fetched["data"][code_field].as_str().unwrap();
        let pattern = Regex::new(&format!(r"^{}\d{{3,}}$", prefix)).unwrap();
        assert!(pattern.is_match(code), "{} -> {}", base, code);

        for (key, value) in input.as_object().unwrap() {
            assert_eq!(&fetched["data"][key], value, "{} field {}", base, key);
        }
    }
}

#[tokio::test]
async fn test_invalid_body_is_rejected_with_envelope() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v2/routes",
        Some(json!({ "organizationId": "org-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["errorCode"], 400);
    assert_eq!(body["data"]["message"], "Validation error");
    assert!(body["data"]["details"].as_str().unwrap().contains("routeName"));

    let (_, listed) = send(&app, Method::GET, "/api/v2/routes", None).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected_with_envelope() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v2/fare")
        .header("content-type", "application/json")
        .body(Body::from("{\"fareName\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["errorCode"], 400);
}

#[tokio::test]
async fn test_program_update_reparses_date() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/api/v2/programs", Some(program_body("2024-03-15"))).await;
    let id = created["data"]["id"].as_str().unwrap();
    let uri = format!("/api/v2/programs/{}", id);

    let mut changed = program_body("2024-04-20");
    changed["status"] = json!("COMPLETED");
    changed["observations"] = json!("Entrega completa");
    let (status, updated) = send(&app, Method::PUT, &uri, Some(changed)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["programDate"], "2024-04-20");
    assert_eq!(updated["data"]["status"], "COMPLETED");
    assert_eq!(updated["data"]["observations"], "Entrega completa");
    assert_eq!(updated["data"]["programCode"], created["data"]["programCode"]);
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(program_body("20-04-2024"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["data"]["errorCode"], 500);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["data"]["programDate"], "2024-04-20");
    assert_eq!(fetched["data"]["status"], "COMPLETED");
}
