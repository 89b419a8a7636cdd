// routes/vehiculos.rs
// CRUD JSON de vehículos. La patente es única y se normaliza a mayúsculas.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Vehiculo, VehiculoUpdate},
    state::{
        AppState, create_vehiculo, delete_vehiculo, get_vehiculo_by_id, list_vehiculos,
        patente_exists, update_vehiculo,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiculoJson {
    id: String,
    patente: String,
    cliente_id: String,
    marca: String,
    modelo: String,
    anio: i32,
    fecha_registro: String,
}

impl From<Vehiculo> for VehiculoJson {
    fn from(vehiculo: Vehiculo) -> Self {
        VehiculoJson {
            id: id_texto(&vehiculo.id),
            patente: vehiculo.patente,
            cliente_id: vehiculo.cliente_id,
            marca: vehiculo.marca,
            modelo: vehiculo.modelo,
            anio: vehiculo.anio,
            fecha_registro: fecha_texto(vehiculo.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiculoPayload {
    patente: Option<String>,
    cliente_id: Option<String>,
    marca: Option<String>,
    modelo: Option<String>,
    anio: Option<i32>,
}

pub async fn vehiculos_index(State(state): State<Arc<AppState>>) -> Response {
    match list_vehiculos(&state).await {
        Ok(vehiculos) => Json(
            vehiculos
                .into_iter()
                .map(VehiculoJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener los vehículos", &err),
    }
}

pub async fn vehiculos_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_vehiculo_by_id(&state, &object_id).await {
        Ok(Some(vehiculo)) => Json(VehiculoJson::from(vehiculo)).into_response(),
        Ok(None) => not_found("Vehículo no encontrado"),
        Err(err) => internal_error("Error al obtener el vehículo", &err),
    }
}

pub async fn vehiculos_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VehiculoPayload>,
) -> Response {
    let patente = match texto_requerido(&body.patente, "La patente es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let cliente_id = match texto_requerido(&body.cliente_id, "El cliente es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let marca = match texto_requerido(&body.marca, "La marca es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let modelo = match texto_requerido(&body.modelo, "El modelo es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let anio = match body.anio {
        Some(v) => v,
        None => return bad_request("El año es obligatorio"),
    };

    match patente_exists(&state, patente, None).await {
        Ok(true) => return bad_request("Ya existe un vehículo con esa patente"),
        Ok(false) => {}
        Err(err) => return internal_error("Error al validar la patente", &err),
    }

    match create_vehiculo(&state, patente, cliente_id, marca, modelo, anio).await {
        Ok(vehiculo) => created(VehiculoJson::from(vehiculo)),
        Err(err) => internal_error("Error al crear el vehículo", &err),
    }
}

pub async fn vehiculos_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<VehiculoUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };

    if let Some(patente) = cambios.patente.as_deref().map(str::trim) {
        if patente.is_empty() {
            return bad_request("La patente es obligatoria");
        }
        match patente_exists(&state, patente, Some(&object_id)).await {
            Ok(true) => return bad_request("Ya existe un vehículo con esa patente"),
            Ok(false) => {}
            Err(err) => return internal_error("Error al validar la patente", &err),
        }
    }

    match update_vehiculo(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el vehículo", &err),
    }
}

pub async fn vehiculos_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_vehiculo(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el vehículo", &err),
    }
}
