// routes/helpers.rs
// Respuestas JSON y parseos compartidos por todos los handlers.

use std::str::FromStr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::Serialize;
use serde_json::json;

pub(super) fn json_error(status: StatusCode, mensaje: &str) -> Response {
    (status, Json(json!({ "error": mensaje }))).into_response()
}

pub(super) fn bad_request(mensaje: &str) -> Response {
    json_error(StatusCode::BAD_REQUEST, mensaje)
}

pub(super) fn not_found(mensaje: &str) -> Response {
    json_error(StatusCode::NOT_FOUND, mensaje)
}

/// Segunda capa del manejo de errores: el detalle queda en el log, el cliente
/// recibe el mensaje fijo.
pub(super) fn internal_error(contexto: &'static str, err: &anyhow::Error) -> Response {
    eprintln!("{contexto}: {err:?}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, contexto)
}

pub(super) fn success() -> Response {
    Json(json!({ "success": true })).into_response()
}

pub(super) fn created<T: Serialize>(cuerpo: T) -> Response {
    (StatusCode::CREATED, Json(cuerpo)).into_response()
}

pub(super) fn parse_object_id(valor: &str) -> Result<ObjectId, Response> {
    ObjectId::from_str(valor.trim()).map_err(|_| bad_request("Identificador inválido"))
}

pub(super) fn clean_opt(input: Option<String>) -> Option<String> {
    input.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub(super) fn texto_requerido<'a>(
    valor: &'a Option<String>,
    mensaje: &'static str,
) -> Result<&'a str, Response> {
    match valor.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(bad_request(mensaje)),
    }
}

pub(super) fn id_texto(id: &Option<ObjectId>) -> String {
    id.as_ref().map(|oid| oid.to_hex()).unwrap_or_default()
}

/// Coerción de fecha del store a fecha calendario "YYYY-MM-DD".
pub(super) fn fecha_texto(dt: Option<DateTime>) -> String {
    dt.map(|d| d.to_chrono().date_naive().to_string())
        .unwrap_or_default()
}
