// routes/clientes.rs
// CRUD JSON de clientes. El DNI es único: se valida con una lectura previa
// a la escritura (no atómica, igual que el resto de las unicidades).

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Cliente, ClienteUpdate},
    state::{
        AppState, create_cliente, delete_cliente, dni_exists, get_cliente_by_id, list_clientes,
        update_cliente,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteJson {
    id: String,
    nombre: String,
    apellido: String,
    dni: String,
    telefono: String,
    email: Option<String>,
    direccion: Option<String>,
    fecha_registro: String,
}

impl From<Cliente> for ClienteJson {
    fn from(cliente: Cliente) -> Self {
        ClienteJson {
            id: id_texto(&cliente.id),
            nombre: cliente.nombre,
            apellido: cliente.apellido,
            dni: cliente.dni,
            telefono: cliente.telefono,
            email: cliente.email,
            direccion: cliente.direccion,
            fecha_registro: fecha_texto(cliente.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    nombre: Option<String>,
    apellido: Option<String>,
    dni: Option<String>,
    telefono: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    direccion: Option<String>,
}

pub async fn clientes_index(State(state): State<Arc<AppState>>) -> Response {
    match list_clientes(&state).await {
        Ok(clientes) => Json(
            clientes
                .into_iter()
                .map(ClienteJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener los clientes", &err),
    }
}

pub async fn clientes_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_cliente_by_id(&state, &object_id).await {
        Ok(Some(cliente)) => Json(ClienteJson::from(cliente)).into_response(),
        Ok(None) => not_found("Cliente no encontrado"),
        Err(err) => internal_error("Error al obtener el cliente", &err),
    }
}

pub async fn clientes_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ClientePayload>,
) -> Response {
    let nombre = match texto_requerido(&body.nombre, "El nombre es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let apellido = match texto_requerido(&body.apellido, "El apellido es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let dni = match texto_requerido(&body.dni, "El DNI es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let telefono = match texto_requerido(&body.telefono, "El teléfono es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match dni_exists(&state, dni, None).await {
        Ok(true) => return bad_request("Ya existe un cliente con ese DNI"),
        Ok(false) => {}
        Err(err) => return internal_error("Error al validar el DNI", &err),
    }

    match create_cliente(
        &state,
        nombre,
        apellido,
        dni,
        telefono,
        clean_opt(body.email),
        clean_opt(body.direccion),
    )
    .await
    {
        Ok(cliente) => created(ClienteJson::from(cliente)),
        Err(err) => internal_error("Error al crear el cliente", &err),
    }
}

pub async fn clientes_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<ClienteUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };

    if let Some(dni) = cambios.dni.as_deref().map(str::trim) {
        if dni.is_empty() {
            return bad_request("El DNI es obligatorio");
        }
        match dni_exists(&state, dni, Some(&object_id)).await {
            Ok(true) => return bad_request("Ya existe un cliente con ese DNI"),
            Ok(false) => {}
            Err(err) => return internal_error("Error al validar el DNI", &err),
        }
    }

    match update_cliente(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el cliente", &err),
    }
}

pub async fn clientes_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_cliente(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el cliente", &err),
    }
}
