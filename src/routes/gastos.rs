// routes/gastos.rs
// CRUD JSON de gastos, con filtro ?proveedorId=.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Gasto, GastoUpdate},
    state::{
        AppState, create_gasto, delete_gasto, get_gasto_by_id, list_gastos, parse_fecha,
        update_gasto,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GastoJson {
    id: String,
    proveedor_id: String,
    categoria_id: String,
    descripcion: String,
    monto: f64,
    fecha: String,
    fecha_registro: String,
}

impl From<Gasto> for GastoJson {
    fn from(gasto: Gasto) -> Self {
        GastoJson {
            id: id_texto(&gasto.id),
            proveedor_id: gasto.proveedor_id,
            categoria_id: gasto.categoria_id,
            descripcion: gasto.descripcion,
            monto: gasto.monto,
            fecha: fecha_texto(Some(gasto.fecha)),
            fecha_registro: fecha_texto(gasto.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastosQuery {
    #[serde(default)]
    proveedor_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastoPayload {
    proveedor_id: Option<String>,
    categoria_id: Option<String>,
    descripcion: Option<String>,
    monto: Option<f64>,
    #[serde(default)]
    fecha: Option<String>,
}

pub async fn gastos_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GastosQuery>,
) -> Response {
    let proveedor = clean_opt(query.proveedor_id);
    match list_gastos(&state, proveedor.as_deref()).await {
        Ok(gastos) => {
            Json(gastos.into_iter().map(GastoJson::from).collect::<Vec<_>>()).into_response()
        }
        Err(err) => internal_error("Error al obtener los gastos", &err),
    }
}

pub async fn gastos_show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_gasto_by_id(&state, &object_id).await {
        Ok(Some(gasto)) => Json(GastoJson::from(gasto)).into_response(),
        Ok(None) => not_found("Gasto no encontrado"),
        Err(err) => internal_error("Error al obtener el gasto", &err),
    }
}

pub async fn gastos_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GastoPayload>,
) -> Response {
    let proveedor_id = match texto_requerido(&body.proveedor_id, "El proveedor es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let categoria_id = match texto_requerido(&body.categoria_id, "La categoría es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let descripcion = match texto_requerido(&body.descripcion, "La descripción es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let monto = match body.monto {
        Some(v) => v,
        None => return bad_request("El monto es obligatorio"),
    };
    let fecha = match body.fecha.as_deref() {
        Some(valor) => match parse_fecha(valor) {
            Some(dia) => dia,
            None => return bad_request("Fecha inválida (usar YYYY-MM-DD)"),
        },
        None => Utc::now().date_naive(),
    };

    match create_gasto(&state, proveedor_id, categoria_id, descripcion, monto, fecha).await {
        Ok(gasto) => created(GastoJson::from(gasto)),
        Err(err) => internal_error("Error al crear el gasto", &err),
    }
}

pub async fn gastos_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<GastoUpdate>,
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
    match update_gasto(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el gasto", &err),
    }
}

pub async fn gastos_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_gasto(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el gasto", &err),
    }
}
