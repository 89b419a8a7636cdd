#[path = "common/mod.rs"]
mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

use tallerdev::routes::api_router;

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };
    let res = app.clone().oneshot(req).await.expect("request failed");
    let status = res.status();
    let bytes = to_bytes(res.into_body(), 1024 * 1024)
        .await
        .expect("body read failed");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn clientes_crud_round_trip() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    // POST válido: 201 y el registro devuelto refleja lo enviado más id y fecha.
    let (status, creado) = send(
        &app,
        "POST",
        "/api/clientes",
        Some(json!({
            "nombre": "Juan",
            "apellido": "Pérez",
            "dni": "12345678",
            "telefono": "11-5555-0001",
            "email": "juan@example.com",
            "direccion": "Av. Siempreviva 742"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(creado["nombre"], "Juan");
    assert_eq!(creado["apellido"], "Pérez");
    assert_eq!(creado["dni"], "12345678");
    let id = creado["id"].as_str().expect("id faltante").to_string();
    assert!(!id.is_empty());
    assert!(!creado["fechaRegistro"].as_str().unwrap().is_empty());

    // Campos obligatorios ausentes: 400 con cuerpo de error.
    let (status, cuerpo) = send(
        &app,
        "POST",
        "/api/clientes",
        Some(json!({ "nombre": "Sin", "apellido": "Dni" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cuerpo["error"].is_string());

    // DNI duplicado: 400.
    let (status, cuerpo) = send(
        &app,
        "POST",
        "/api/clientes",
        Some(json!({
            "nombre": "Otro",
            "apellido": "Cliente",
            "dni": "12345678",
            "telefono": "11-5555-0002"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cuerpo["error"].is_string());

    // La validación reporta el duplicado, salvo que se excluya al dueño.
    let (status, cuerpo) = send(&app, "GET", "/api/validaciones/dni?dni=12345678", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["exists"], true);
    let (status, cuerpo) = send(
        &app,
        "GET",
        &format!("/api/validaciones/dni?dni=12345678&excludeId={id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["exists"], false);

    // GET por id y listado.
    let (status, cuerpo) = send(&app, "GET", &format!("/api/clientes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["dni"], "12345678");
    let (status, lista) = send(&app, "GET", "/api/clientes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        lista
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["dni"] == "12345678")
    );

    // Id inexistente: 404.
    let fantasma = ObjectId::new().to_hex();
    let (status, _) = send(&app, "GET", &format!("/api/clientes/{fantasma}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // PUT parcial: success, y el cambio queda persistido.
    let (status, cuerpo) = send(
        &app,
        "PUT",
        &format!("/api/clientes/{id}"),
        Some(json!({ "telefono": "11-7777-0001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["success"], true);
    let (_, cuerpo) = send(&app, "GET", &format!("/api/clientes/{id}"), None).await;
    assert_eq!(cuerpo["telefono"], "11-7777-0001");

    // PUT que pisa el DNI de otro cliente: 400. Blanquearlo tampoco se
    // permite, ni siquiera con espacios.
    let (status, otro) = send(
        &app,
        "POST",
        "/api/clientes",
        Some(json!({
            "nombre": "Luis",
            "apellido": "Martínez",
            "dni": "87654321",
            "telefono": "11-5555-0003"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let otro_id = otro["id"].as_str().unwrap().to_string();
    let (status, cuerpo) = send(
        &app,
        "PUT",
        &format!("/api/clientes/{otro_id}"),
        Some(json!({ "dni": "12345678" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cuerpo["error"].is_string());
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/clientes/{otro_id}"),
        Some(json!({ "dni": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, cuerpo) = send(&app, "GET", &format!("/api/clientes/{otro_id}"), None).await;
    assert_eq!(cuerpo["dni"], "87654321");

    // PUT sobre un id inexistente: 500 (comportamiento heredado, no 404).
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/clientes/{fantasma}"),
        Some(json!({ "telefono": "11-0000-0000" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // DELETE idempotente a nivel de respuesta.
    let (status, cuerpo) = send(&app, "DELETE", &format!("/api/clientes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["success"], true);
    let (status, cuerpo) = send(&app, "DELETE", &format!("/api/clientes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["success"], true);
    let (status, _) = send(&app, "GET", &format!("/api/clientes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    db.finish().await;
}

#[tokio::test]
async fn turnos_se_filtran_por_fecha() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    let (status, cliente) = send(
        &app,
        "POST",
        "/api/clientes",
        Some(json!({
            "nombre": "Ana",
            "apellido": "García",
            "dni": "20111222",
            "telefono": "11-4444-0001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let cliente_id = cliente["id"].as_str().unwrap().to_string();

    let (status, turno) = send(
        &app,
        "POST",
        "/api/turnos",
        Some(json!({
            "clienteId": cliente_id,
            "fecha": "2025-03-10",
            "hora": "10:30",
            "motivo": "Ruido en la suspensión"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(turno["fecha"], "2025-03-10");
    assert_eq!(turno["estado"], "pendiente");
    let turno_id = turno["id"].as_str().unwrap().to_string();

    let (status, lista) = send(&app, "GET", "/api/turnos?fecha=2025-03-10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        lista
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t["id"] == turno_id.as_str())
    );

    let (status, lista) = send(&app, "GET", "/api/turnos?fecha=2025-03-11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(lista.as_array().unwrap().is_empty());

    let (status, _) = send(&app, "GET", "/api/turnos?fecha=no-es-fecha", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    db.finish().await;
}

#[tokio::test]
async fn ordenes_toman_checklist_de_plantilla() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    // La plantilla "Service básico" viene sembrada.
    let (status, plantillas) = send(&app, "GET", "/api/plantillas-tareas", None).await;
    assert_eq!(status, StatusCode::OK);
    let plantilla = &plantillas.as_array().unwrap()[0];
    let plantilla_id = plantilla["id"].as_str().unwrap().to_string();
    let cantidad_tareas = plantilla["tareas"].as_array().unwrap().len();
    assert!(cantidad_tareas > 0);

    let cliente_id = ObjectId::new().to_hex();
    let vehiculo_id = ObjectId::new().to_hex();
    let (status, orden) = send(
        &app,
        "POST",
        "/api/ordenes",
        Some(json!({
            "numero": "OT-1001",
            "clienteId": cliente_id,
            "vehiculoId": vehiculo_id,
            "plantillaId": plantilla_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(orden["estado"], "pendiente");
    let tareas = orden["tareas"].as_array().unwrap();
    assert_eq!(tareas.len(), cantidad_tareas);
    assert!(tareas.iter().all(|t| t["completada"] == false));
    let orden_id = orden["id"].as_str().unwrap().to_string();

    // Número duplicado: 400, y la validación lo reporta.
    let (status, _) = send(
        &app,
        "POST",
        "/api/ordenes",
        Some(json!({
            "numero": "OT-1001",
            "clienteId": cliente_id,
            "vehiculoId": vehiculo_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, cuerpo) = send(
        &app,
        "GET",
        "/api/validaciones/numero-orden?numero=OT-1001",
        None,
    )
    .await;
    assert_eq!(cuerpo["exists"], true);

    // Marcar un ítem del checklist.
    let (status, cuerpo) = send(
        &app,
        "PUT",
        &format!("/api/ordenes/{orden_id}/tareas"),
        Some(json!({ "indice": 0, "completada": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["success"], true);
    let (_, orden) = send(&app, "GET", &format!("/api/ordenes/{orden_id}"), None).await;
    assert_eq!(orden["tareas"][0]["completada"], true);
    assert_eq!(orden["tareas"][1]["completada"], false);

    // Índice fuera de rango: 400.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/ordenes/{orden_id}/tareas"),
        Some(json!({ "indice": 99, "completada": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Cambio de estado por PUT parcial.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/ordenes/{orden_id}"),
        Some(json!({ "estado": "en_proceso" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, orden) = send(&app, "GET", &format!("/api/ordenes/{orden_id}"), None).await;
    assert_eq!(orden["estado"], "en_proceso");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/ordenes/{orden_id}"),
        Some(json!({ "estado": "volando" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    db.finish().await;
}

#[tokio::test]
async fn vehiculos_normalizan_y_validan_patente() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    let cliente_id = ObjectId::new().to_hex();
    let (status, vehiculo) = send(
        &app,
        "POST",
        "/api/vehiculos",
        Some(json!({
            "patente": "ab123cd",
            "clienteId": cliente_id,
            "marca": "Ford",
            "modelo": "Focus",
            "anio": 2019
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vehiculo["patente"], "AB123CD");
    let vehiculo_id = vehiculo["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/api/vehiculos",
        Some(json!({
            "patente": "AB123CD",
            "clienteId": cliente_id,
            "marca": "Ford",
            "modelo": "Fiesta",
            "anio": 2017
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, cuerpo) = send(
        &app,
        "GET",
        "/api/validaciones/patente?patente=ab123cd",
        None,
    )
    .await;
    assert_eq!(cuerpo["exists"], true);
    let (_, cuerpo) = send(
        &app,
        "GET",
        &format!("/api/validaciones/patente?patente=AB123CD&excludeId={vehiculo_id}"),
        None,
    )
    .await;
    assert_eq!(cuerpo["exists"], false);

    // La patente no se puede blanquear por PUT.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/vehiculos/{vehiculo_id}"),
        Some(json!({ "patente": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, cuerpo) = send(&app, "GET", &format!("/api/vehiculos/{vehiculo_id}"), None).await;
    assert_eq!(cuerpo["patente"], "AB123CD");

    db.finish().await;
}

#[tokio::test]
async fn cobros_se_filtran_por_orden_y_pendientes() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    let orden_a = ObjectId::new().to_hex();
    let orden_b = ObjectId::new().to_hex();
    let cliente_id = ObjectId::new().to_hex();

    let (status, pagado) = send(
        &app,
        "POST",
        "/api/cobros",
        Some(json!({
            "ordenId": orden_a,
            "clienteId": cliente_id,
            "monto": 15000.0,
            "fecha": "2025-02-01",
            "metodoPago": "efectivo",
            "estado": "pagado"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(pagado["fecha"], "2025-02-01");
    assert_eq!(pagado["metodoPago"], "efectivo");

    let (status, pendiente) = send(
        &app,
        "POST",
        "/api/cobros",
        Some(json!({
            "ordenId": orden_b,
            "clienteId": cliente_id,
            "monto": 8000.0,
            "metodoPago": "transferencia"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(pendiente["estado"], "pendiente");

    let (status, lista) = send(&app, "GET", &format!("/api/cobros?ordenId={orden_a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let lista = lista.as_array().unwrap().clone();
    assert_eq!(lista.len(), 1);
    assert_eq!(lista[0]["estado"], "pagado");

    let (status, lista) = send(&app, "GET", "/api/cobros?pendientes=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let lista = lista.as_array().unwrap().clone();
    assert_eq!(lista.len(), 1);
    assert_eq!(lista[0]["ordenId"], orden_b.as_str());

    let (status, _) = send(
        &app,
        "POST",
        "/api/cobros",
        Some(json!({
            "ordenId": orden_a,
            "clienteId": cliente_id,
            "monto": 100.0,
            "metodoPago": "cheque"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    db.finish().await;
}

#[tokio::test]
async fn login_placeholder_contra_usuarios_sembrados() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let app = api_router(Arc::new(db.state.clone()));

    let (status, cuerpo) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": "admin@taller.local", "password": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cuerpo["success"], true);
    assert_eq!(cuerpo["usuario"]["email"], "admin@taller.local");
    assert_eq!(cuerpo["usuario"]["rol"], "admin");
    // La contraseña nunca viaja en la respuesta.
    assert!(cuerpo["usuario"].get("password").is_none());

    let (status, cuerpo) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": "admin@taller.local", "password": "incorrecta" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(cuerpo["success"], false);

    db.finish().await;
}
