// routes/proveedores.rs

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Proveedor, ProveedorUpdate},
    state::{
        AppState, create_proveedor, delete_proveedor, get_proveedor_by_id, list_proveedores,
        update_proveedor,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorJson {
    id: String,
    nombre: String,
    cuit: Option<String>,
    telefono: Option<String>,
    email: Option<String>,
    direccion: Option<String>,
    fecha_registro: String,
}

impl From<Proveedor> for ProveedorJson {
    fn from(proveedor: Proveedor) -> Self {
        ProveedorJson {
            id: id_texto(&proveedor.id),
            nombre: proveedor.nombre,
            cuit: proveedor.cuit,
            telefono: proveedor.telefono,
            email: proveedor.email,
            direccion: proveedor.direccion,
            fecha_registro: fecha_texto(proveedor.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorPayload {
    nombre: Option<String>,
    #[serde(default)]
    cuit: Option<String>,
    #[serde(default)]
    telefono: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    direccion: Option<String>,
}

pub async fn proveedores_index(State(state): State<Arc<AppState>>) -> Response {
    match list_proveedores(&state).await {
        Ok(proveedores) => Json(
            proveedores
                .into_iter()
                .map(ProveedorJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener los proveedores", &err),
    }
}

pub async fn proveedores_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_proveedor_by_id(&state, &object_id).await {
        Ok(Some(proveedor)) => Json(ProveedorJson::from(proveedor)).into_response(),
        Ok(None) => not_found("Proveedor no encontrado"),
        Err(err) => internal_error("Error al obtener el proveedor", &err),
    }
}

pub async fn proveedores_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ProveedorPayload>,
) -> Response {
    let nombre = match texto_requerido(&body.nombre, "El nombre es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match create_proveedor(
        &state,
        nombre,
        clean_opt(body.cuit),
        clean_opt(body.telefono),
        clean_opt(body.email),
        clean_opt(body.direccion),
    )
    .await
    {
        Ok(proveedor) => created(ProveedorJson::from(proveedor)),
        Err(err) => internal_error("Error al crear el proveedor", &err),
    }
}

pub async fn proveedores_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<ProveedorUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match update_proveedor(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el proveedor", &err),
    }
}

pub async fn proveedores_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_proveedor(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el proveedor", &err),
    }
}
