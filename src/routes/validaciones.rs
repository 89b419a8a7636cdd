// routes/validaciones.rs
// Chequeos de unicidad consultados por los formularios antes de enviar.
// `excludeId` deja afuera al registro que se está editando. El chequeo no es
// atómico con la escritura posterior.

use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::json;

use crate::state::{AppState, dni_exists, numero_orden_exists, patente_exists};

use super::helpers::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidacionDniQuery {
    dni: Option<String>,
    #[serde(default)]
    exclude_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidacionPatenteQuery {
    patente: Option<String>,
    #[serde(default)]
    exclude_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidacionNumeroQuery {
    numero: Option<String>,
    #[serde(default)]
    exclude_id: Option<String>,
}

fn parse_exclude(valor: &Option<String>) -> Result<Option<ObjectId>, Response> {
    match clean_opt(valor.clone()) {
        Some(id) => parse_object_id(&id).map(Some),
        None => Ok(None),
    }
}

fn exists_response(exists: bool) -> Response {
    Json(json!({ "exists": exists })).into_response()
}

pub async fn validar_dni(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ValidacionDniQuery>,
) -> Response {
    let dni = match texto_requerido(&query.dni, "El DNI es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let excluir = match parse_exclude(&query.exclude_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match dni_exists(&state, dni, excluir.as_ref()).await {
        Ok(exists) => exists_response(exists),
        Err(err) => internal_error("Error al validar el DNI", &err),
    }
}

pub async fn validar_patente(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ValidacionPatenteQuery>,
) -> Response {
    let patente = match texto_requerido(&query.patente, "La patente es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let excluir = match parse_exclude(&query.exclude_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match patente_exists(&state, patente, excluir.as_ref()).await {
        Ok(exists) => exists_response(exists),
        Err(err) => internal_error("Error al validar la patente", &err),
    }
}

pub async fn validar_numero_orden(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ValidacionNumeroQuery>,
) -> Response {
    let numero = match texto_requerido(&query.numero, "El número de orden es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let excluir = match parse_exclude(&query.exclude_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match numero_orden_exists(&state, numero, excluir.as_ref()).await {
        Ok(exists) => exists_response(exists),
        Err(err) => internal_error("Error al validar el número de orden", &err),
    }
}
