//! End-to-end API tests
//!
//! Each test spins up the full router over a temporary SQLite database and
//! drives it through `tower::ServiceExt::oneshot`, the same way the real
//! server serves requests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use boda_server::auth::JwtConfig;
use boda_server::db::DbService;
use boda_server::{Config, ServerState, build_app};

const ADMIN_EMAIL: &str = "admin@bodasuite.com";
const ADMIN_PASSWORD: &str = "admin123";

async fn setup() -> (Router, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let work_dir = dir.path().to_string_lossy().into_owned();

    let config = Config {
        work_dir: work_dir.clone(),
        port: 0,
        environment: "development".to_string(),
        jwt: JwtConfig {
            secret: "clave-de-prueba-para-los-tests-de-api".to_string(),
            expiration_minutes: 60,
            issuer: "boda-server".to_string(),
            audience: "boda-dashboard".to_string(),
        },
    };

    let db_path = dir.path().join("boda_suite.db");
    let db = DbService::new(&db_path.to_string_lossy())
        .await
        .expect("database");
    db.seed_default_admin().await.expect("seed admin");

    let state = ServerState::with_pool(config, db.pool).expect("state");
    (build_app(state), dir)
}

async fn body_json(response: http::Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("encode")))
        .expect("request")
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/login",
            None,
            &json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        ))
        .await
        .expect("login response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["token"].as_str().expect("token").to_string()
}

/// Create a room and return its id
async fn create_room(app: &Router, token: &str, nombre: &str, precio: f64) -> i64 {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/habitaciones",
            Some(token),
            &json!({
                "nombre": nombre,
                "precio": precio,
                "capacidad": 2,
                "cupos_disponibles": 2
            }),
        ))
        .await
        .expect("room response");
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().expect("room id")
}

/// Create a guest and return their id
async fn create_guest(app: &Router, token: &str, nombre: &str, habitacion_id: Option<i64>) -> i64 {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/invitados",
            Some(token),
            &json!({
                "nombre": nombre,
                "contacto": "contacto@example.com",
                "habitacion_id": habitacion_id
            }),
        ))
        .await
        .expect("guest response");
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().expect("guest id")
}

async fn create_payment(app: &Router, token: &str, invitado_id: i64, monto: f64) -> Value {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/pagos",
            Some(token),
            &json!({
                "invitado_id": invitado_id,
                "monto": monto,
                "metodo_pago": "Transferencia",
                "fecha_pago": "2026-06-01"
            }),
        ))
        .await
        .expect("payment response");
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Fetch a guest row from the listing by id
async fn guest_row(app: &Router, token: &str, id: i64) -> Value {
    let response = app
        .clone()
        .oneshot(get("/api/invitados", Some(token)))
        .await
        .expect("guest list");
    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    rows.as_array()
        .expect("array")
        .iter()
        .find(|g| g["id"].as_i64() == Some(id))
        .cloned()
        .expect("guest present")
}

#[tokio::test]
async fn test_health_is_public() {
    let (app, _dir) = setup().await;

    let response = app.oneshot(get("/api/health", None)).await.expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn test_endpoints_require_token() {
    let (app, _dir) = setup().await;

    // Missing token -> 401
    for uri in [
        "/api/invitados",
        "/api/habitaciones",
        "/api/pagos",
        "/api/auditoria",
        "/api/dashboard/stats",
        "/api/configuracion",
        "/api/hotel",
    ] {
        let response = app.clone().oneshot(get(uri, None)).await.expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    // Garbage token -> 403
    let response = app
        .clone()
        .oneshot(get("/api/invitados", Some("no-es-un-token")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A rejected mutation must not reach the store
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/habitaciones",
            None,
            &json!({ "nombre": "X", "precio": 1.0, "capacidad": 1, "cupos_disponibles": 1 }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let response = app
        .clone()
        .oneshot(get("/api/habitaciones", Some(&token)))
        .await
        .expect("response");
    let rooms = body_json(response).await;
    assert_eq!(rooms.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (app, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/login",
            None,
            &json!({ "email": ADMIN_EMAIL, "password": "incorrecta" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Credenciales inválidas");

    // Missing fields -> 400
    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/login", None, &json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let (app, _dir) = setup().await;

    // Duplicate email -> 400
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/register",
            None,
            &json!({ "email": ADMIN_EMAIL, "password": "secreta1" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "El usuario ya existe");

    // Short password -> 400
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/register",
            None,
            &json!({ "email": "otro@example.com", "password": "corta" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid registration issues a working token
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/register",
            None,
            &json!({ "email": "otro@example.com", "password": "secreta1" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().expect("token");

    let response = app
        .clone()
        .oneshot(get("/api/verify-token", Some(token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["email"], "otro@example.com");
}

#[tokio::test]
async fn test_payment_reconciliation_scenario() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let guest_id = create_guest(&app, &token, "Ana", Some(room_id)).await;

    // No payments yet
    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Pendiente");
    assert_eq!(row["saldo_pendiente"], 500.0);

    // Partial payment
    let body = create_payment(&app, &token, guest_id, 200.0).await;
    assert!(body["recibo"]["fileName"]
        .as_str()
        .expect("receipt name")
        .starts_with("recibo_"));
    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Parcial");
    assert_eq!(row["saldo_pendiente"], 300.0);
    assert_eq!(row["total_pagado"], 200.0);

    // Remaining payment settles the balance
    create_payment(&app, &token, guest_id, 300.0).await;
    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Pagado");
    assert_eq!(row["saldo_pendiente"], 0.0);

    // Guest payment history, newest first
    let response = app
        .clone()
        .oneshot(get(&format!("/api/invitados/{guest_id}/pagos"), Some(&token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let pagos = body_json(response).await;
    assert_eq!(pagos.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_overpayment_clamps_to_zero() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite B", 500.0).await;
    let guest_id = create_guest(&app, &token, "Luis", Some(room_id)).await;

    create_payment(&app, &token, guest_id, 700.0).await;

    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Pagado");
    assert_eq!(row["saldo_pendiente"], 0.0);

    // The surplus also never shows up in the global payment listing
    let response = app
        .clone()
        .oneshot(get("/api/pagos", Some(&token)))
        .await
        .expect("response");
    let pagos = body_json(response).await;
    assert_eq!(pagos[0]["saldo_pendiente"], 0.0);
}

#[tokio::test]
async fn test_reconcile_is_idempotent() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite C", 400.0).await;
    let guest_id = create_guest(&app, &token, "Marta", Some(room_id)).await;
    create_payment(&app, &token, guest_id, 150.0).await;

    let first = guest_row(&app, &token, guest_id).await;
    let second = guest_row(&app, &token, guest_id).await;
    assert_eq!(first["estado_pago"], second["estado_pago"]);
    assert_eq!(first["saldo_pendiente"], second["saldo_pendiente"]);

    // Payment rows are untouched by repeated reconciliation
    let response = app
        .clone()
        .oneshot(get(&format!("/api/invitados/{guest_id}/pagos"), Some(&token)))
        .await
        .expect("response");
    let pagos = body_json(response).await;
    assert_eq!(pagos.as_array().expect("array").len(), 1);
    assert_eq!(pagos[0]["monto"], 150.0);
}

#[tokio::test]
async fn test_guest_without_room_stays_pendiente() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let guest_id = create_guest(&app, &token, "Sin Habitación", None).await;
    create_payment(&app, &token, guest_id, 100.0).await;

    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Pendiente");
    assert_eq!(row["saldo_pendiente"], 0.0);
}

#[tokio::test]
async fn test_room_price_change_reconciles_guests() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite D", 500.0).await;
    let guest_id = create_guest(&app, &token, "Pedro", Some(room_id)).await;
    create_payment(&app, &token, guest_id, 300.0).await;

    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Parcial");

    // Dropping the price below the paid total settles the guest
    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/habitaciones/{room_id}"),
            Some(&token),
            &json!({ "nombre": "Suite D", "precio": 250.0, "capacidad": 2, "cupos_disponibles": 2 }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let row = guest_row(&app, &token, guest_id).await;
    assert_eq!(row["estado_pago"], "Pagado");
    assert_eq!(row["saldo_pendiente"], 0.0);
}

#[tokio::test]
async fn test_room_delete_guard() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let guest_id = create_guest(&app, &token, "Ana", Some(room_id)).await;

    // Delete is rejected while the guest is assigned
    let response = app
        .clone()
        .oneshot(get_delete(&format!("/api/habitaciones/{room_id}"), &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The room row is still present
    let response = app
        .clone()
        .oneshot(get("/api/habitaciones", Some(&token)))
        .await
        .expect("response");
    let rooms = body_json(response).await;
    assert_eq!(rooms.as_array().expect("array").len(), 1);

    // Removing the guest first unblocks the delete
    let response = app
        .clone()
        .oneshot(get_delete(&format!("/api/invitados/{guest_id}"), &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_delete(&format!("/api/habitaciones/{room_id}"), &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["changes"], 1);
}

fn get_delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn test_audit_trail_records_mutations() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let guest_id = create_guest(&app, &token, "Ana", Some(room_id)).await;
    create_payment(&app, &token, guest_id, 200.0).await;

    // Freeing the room exercises the delete path too
    let response = app
        .clone()
        .oneshot(get_delete(&format!("/api/invitados/{guest_id}"), &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let response = app
        .clone()
        .oneshot(get_delete(&format!("/api/habitaciones/{room_id}"), &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    // The audit write is asynchronous; give the worker a moment
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let response = app
        .clone()
        .oneshot(get("/api/auditoria", Some(&token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().expect("array");

    let count = |tabla: &str, accion: &str| {
        entries
            .iter()
            .filter(|e| e["tabla"] == tabla && e["accion"] == accion)
            .count()
    };

    assert_eq!(count("habitaciones", "CREATE"), 1);
    assert_eq!(count("invitados", "CREATE"), 1);
    assert_eq!(count("pagos", "CREATE"), 1);
    assert_eq!(count("invitados", "DELETE"), 1);
    assert_eq!(count("habitaciones", "DELETE"), 1);

    // Entries carry the acting user
    assert_eq!(entries[0]["usuario_email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn test_singleton_config_upsert() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    for (novia, novio) in [("Ana", "Luis"), ("Carmen", "Jorge")] {
        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/configuracion",
                Some(&token),
                &json!({
                    "nombre_novia": novia,
                    "nombre_novio": novio,
                    "fecha_boda": "2026-09-12",
                    "hora_boda": "17:00",
                    "lugar_boda": "Jardín Botánico"
                }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], 1);
    }

    let response = app
        .clone()
        .oneshot(get("/api/configuracion", Some(&token)))
        .await
        .expect("response");
    let config = body_json(response).await;
    assert_eq!(config["nombre_novia"], "Carmen");
    assert_eq!(config["id"], 1);
}

#[tokio::test]
async fn test_hotel_services_round_trip() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/hotel",
            Some(&token),
            &json!({
                "nombre": "Hotel Miramar",
                "direccion": "Av. del Mar 12",
                "servicios_incluidos": ["Desayuno", "Piscina"]
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get("/api/hotel", Some(&token)))
        .await
        .expect("response");
    let hotel = body_json(response).await;
    assert_eq!(hotel["servicios_incluidos"], json!(["Desayuno", "Piscina"]));
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let other_room = create_room(&app, &token, "Suite B", 300.0).await;
    let ana = create_guest(&app, &token, "Ana", Some(room_id)).await;
    let luis = create_guest(&app, &token, "Luis", Some(other_room)).await;
    create_guest(&app, &token, "Marta", None).await;

    create_payment(&app, &token, ana, 500.0).await;
    create_payment(&app, &token, luis, 100.0).await;

    let response = app
        .clone()
        .oneshot(get("/api/dashboard/stats", Some(&token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;

    assert_eq!(stats["totalInvitados"], 3);
    assert_eq!(stats["invitadosPagados"], 1);
    assert_eq!(stats["invitadosParciales"], 1);
    assert_eq!(stats["invitadosPendientes"], 1);
    assert_eq!(stats["totalRecaudado"], 600.0);
    assert_eq!(stats["totalPendiente"], 200.0);
    // 2 assigned guests over 4 slots
    assert_eq!(stats["ocupacionHotel"], 50);
}

#[tokio::test]
async fn test_payment_for_unknown_guest_is_404() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/pagos",
            Some(&token),
            &json!({
                "invitado_id": 999,
                "monto": 100.0,
                "metodo_pago": "Efectivo",
                "fecha_pago": "2026-06-01"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Payment history for an unknown guest is also a 404
    let guest_response = app
        .clone()
        .oneshot(get("/api/invitados/999/pagos", Some(&token)))
        .await
        .expect("response");
    assert_eq!(guest_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_requires_positive_amount() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let guest_id = create_guest(&app, &token, "Ana", Some(room_id)).await;

    for monto in [0.0, -50.0] {
        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/pagos",
                Some(&token),
                &json!({
                    "invitado_id": guest_id,
                    "monto": monto,
                    "metodo_pago": "Efectivo",
                    "fecha_pago": "2026-06-01"
                }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Nothing was recorded against the guest
    let response = app
        .clone()
        .oneshot(get(&format!("/api/invitados/{guest_id}/pagos"), Some(&token)))
        .await
        .expect("response");
    let pagos = body_json(response).await;
    assert_eq!(pagos.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_receipt_download_and_regenerate() {
    let (app, _dir) = setup().await;
    let token = login(&app).await;

    let room_id = create_room(&app, &token, "Suite A", 500.0).await;
    let guest_id = create_guest(&app, &token, "Ana Garcia", Some(room_id)).await;
    let body = create_payment(&app, &token, guest_id, 200.0).await;

    let pago_id = body["id"].as_i64().expect("payment id");
    let file_name = body["recibo"]["fileName"].as_str().expect("file name");

    // Download the rendered receipt
    let response = app
        .clone()
        .oneshot(get(&format!("/api/recibos/{file_name}"), Some(&token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("RECIBO DE PAGO"));
    assert!(text.contains("Ana Garcia"));

    // Regenerate for the same payment
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/pagos/regenerar-recibo",
            Some(&token),
            &json!({ "pagoId": pago_id }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["recibo"]["relativePath"]
        .as_str()
        .expect("path")
        .starts_with("/recibos/"));

    // Unknown payment -> 404
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/pagos/regenerar-recibo",
            Some(&token),
            &json!({ "pagoId": 9999 }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unknown receipt file -> 404
    let response = app
        .clone()
        .oneshot(get("/api/recibos/no_existe.txt", Some(&token)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
