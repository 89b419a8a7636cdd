// routes/cobros.rs
// CRUD JSON de cobros, con filtros ?ordenId= y ?pendientes=true.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Cobro, CobroUpdate, EstadoCobro, MetodoPago},
    state::{
        AppState, FiltroCobros, create_cobro, delete_cobro, get_cobro_by_id, list_cobros,
        parse_fecha, update_cobro,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CobroJson {
    id: String,
    orden_id: String,
    cliente_id: String,
    monto: f64,
    fecha: String,
    metodo_pago: String,
    estado: String,
    fecha_registro: String,
}

impl From<Cobro> for CobroJson {
    fn from(cobro: Cobro) -> Self {
        CobroJson {
            id: id_texto(&cobro.id),
            orden_id: cobro.orden_id,
            cliente_id: cobro.cliente_id,
            monto: cobro.monto,
            fecha: fecha_texto(Some(cobro.fecha)),
            metodo_pago: cobro.metodo_pago.as_str().to_string(),
            estado: cobro.estado.as_str().to_string(),
            fecha_registro: fecha_texto(cobro.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrosQuery {
    #[serde(default)]
    orden_id: Option<String>,
    #[serde(default)]
    pendientes: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobroPayload {
    orden_id: Option<String>,
    cliente_id: Option<String>,
    monto: Option<f64>,
    #[serde(default)]
    fecha: Option<String>,
    metodo_pago: Option<String>,
    #[serde(default)]
    estado: Option<String>,
}

pub async fn cobros_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CobrosQuery>,
) -> Response {
    let filtro = FiltroCobros {
        orden_id: clean_opt(query.orden_id),
        solo_pendientes: query.pendientes.unwrap_or(false),
    };
    match list_cobros(&state, filtro).await {
        Ok(cobros) => {
            Json(cobros.into_iter().map(CobroJson::from).collect::<Vec<_>>()).into_response()
        }
        Err(err) => internal_error("Error al obtener los cobros", &err),
    }
}

pub async fn cobros_show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_cobro_by_id(&state, &object_id).await {
        Ok(Some(cobro)) => Json(CobroJson::from(cobro)).into_response(),
        Ok(None) => not_found("Cobro no encontrado"),
        Err(err) => internal_error("Error al obtener el cobro", &err),
    }
}

pub async fn cobros_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CobroPayload>,
) -> Response {
    let orden_id = match texto_requerido(&body.orden_id, "La orden es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let cliente_id = match texto_requerido(&body.cliente_id, "El cliente es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let monto = match body.monto {
        Some(v) => v,
        None => return bad_request("El monto es obligatorio"),
    };
    let metodo = match texto_requerido(&body.metodo_pago, "El método de pago es obligatorio") {
        Ok(v) => match MetodoPago::parse(v) {
            Some(m) => m,
            None => return bad_request("Método de pago inválido"),
        },
        Err(resp) => return resp,
    };
    let estado = match body.estado.as_deref() {
        Some(valor) => match EstadoCobro::parse(valor) {
            Some(e) => e,
            None => return bad_request("Estado de cobro inválido"),
        },
        None => EstadoCobro::default(),
    };
    let fecha = match body.fecha.as_deref() {
        Some(valor) => match parse_fecha(valor) {
            Some(dia) => dia,
            None => return bad_request("Fecha inválida (usar YYYY-MM-DD)"),
        },
        None => Utc::now().date_naive(),
    };

    match create_cobro(&state, orden_id, cliente_id, monto, fecha, metodo, estado).await {
        Ok(cobro) => created(CobroJson::from(cobro)),
        Err(err) => internal_error("Error al crear el cobro", &err),
    }
}

pub async fn cobros_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<CobroUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };

    if let Some(valor) = cambios.fecha.as_deref() {
        if parse_fecha(valor).is_none() {
            return bad_request("Fecha inválida (usar YYYY-MM-DD)");
        }
    }
    if let Some(valor) = cambios.metodo_pago.as_deref() {
        if MetodoPago::parse(valor).is_none() {
            return bad_request("Método de pago inválido");
        }
    }
    if let Some(valor) = cambios.estado.as_deref() {
        if EstadoCobro::parse(valor).is_none() {
            return bad_request("Estado de cobro inválido");
        }
    }

    match update_cobro(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el cobro", &err),
    }
}

pub async fn cobros_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_cobro(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el cobro", &err),
    }
}
