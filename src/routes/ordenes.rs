// routes/ordenes.rs
// CRUD JSON de órdenes de trabajo. El checklist puede venir explícito en el
// payload o poblarse desde una plantilla de tareas (`plantillaId`).

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{EstadoOrden, OrdenTrabajo, OrdenUpdate, TareaOrden},
    state::{
        AppState, create_orden, delete_orden, get_orden_by_id, get_plantilla_by_id, list_ordenes,
        marcar_tarea_orden, numero_orden_exists, tareas_desde_plantilla, update_orden,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenJson {
    id: String,
    numero: String,
    cliente_id: String,
    vehiculo_id: String,
    estado: String,
    tareas: Vec<TareaOrden>,
    observaciones: Option<String>,
    fecha_creacion: String,
}

impl From<OrdenTrabajo> for OrdenJson {
    fn from(orden: OrdenTrabajo) -> Self {
        OrdenJson {
            id: id_texto(&orden.id),
            numero: orden.numero,
            cliente_id: orden.cliente_id,
            vehiculo_id: orden.vehiculo_id,
            estado: orden.estado.as_str().to_string(),
            tareas: orden.tareas,
            observaciones: orden.observaciones,
            fecha_creacion: fecha_texto(orden.fecha_creacion),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenPayload {
    numero: Option<String>,
    cliente_id: Option<String>,
    vehiculo_id: Option<String>,
    #[serde(default)]
    estado: Option<String>,
    #[serde(default)]
    tareas: Option<Vec<TareaOrden>>,
    #[serde(default)]
    plantilla_id: Option<String>,
    #[serde(default)]
    observaciones: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TareaPatch {
    indice: Option<usize>,
    #[serde(default)]
    completada: Option<bool>,
}

pub async fn ordenes_index(State(state): State<Arc<AppState>>) -> Response {
    match list_ordenes(&state).await {
        Ok(ordenes) => Json(ordenes.into_iter().map(OrdenJson::from).collect::<Vec<_>>())
            .into_response(),
        Err(err) => internal_error("Error al obtener las órdenes", &err),
    }
}

pub async fn ordenes_show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_orden_by_id(&state, &object_id).await {
        Ok(Some(orden)) => Json(OrdenJson::from(orden)).into_response(),
        Ok(None) => not_found("Orden no encontrada"),
        Err(err) => internal_error("Error al obtener la orden", &err),
    }
}

pub async fn ordenes_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OrdenPayload>,
) -> Response {
    let numero = match texto_requerido(&body.numero, "El número de orden es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let cliente_id = match texto_requerido(&body.cliente_id, "El cliente es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let vehiculo_id = match texto_requerido(&body.vehiculo_id, "El vehículo es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let estado = match body.estado.as_deref() {
        Some(valor) => match EstadoOrden::parse(valor) {
            Some(e) => e,
            None => return bad_request("Estado de orden inválido"),
        },
        None => EstadoOrden::default(),
    };

    match numero_orden_exists(&state, numero, None).await {
        Ok(true) => return bad_request("Ya existe una orden con ese número"),
        Ok(false) => {}
        Err(err) => return internal_error("Error al validar el número de orden", &err),
    }

    // El checklist explícito gana; si no viene, se intenta poblar desde la
    // plantilla indicada.
    let tareas = match body.tareas {
        Some(tareas) => tareas,
        None => match clean_opt(body.plantilla_id) {
            Some(plantilla_id) => {
                let plantilla_oid = match parse_object_id(&plantilla_id) {
                    Ok(oid) => oid,
                    Err(resp) => return resp,
                };
                match get_plantilla_by_id(&state, &plantilla_oid).await {
                    Ok(Some(plantilla)) => tareas_desde_plantilla(&plantilla.tareas),
                    Ok(None) => return bad_request("La plantilla indicada no existe"),
                    Err(err) => return internal_error("Error al obtener la plantilla", &err),
                }
            }
            None => Vec::new(),
        },
    };

    match create_orden(
        &state,
        numero,
        cliente_id,
        vehiculo_id,
        estado,
        tareas,
        clean_opt(body.observaciones),
    )
    .await
    {
        Ok(orden) => created(OrdenJson::from(orden)),
        Err(err) => internal_error("Error al crear la orden", &err),
    }
}

pub async fn ordenes_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<OrdenUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };

    if let Some(valor) = cambios.estado.as_deref() {
        if EstadoOrden::parse(valor).is_none() {
            return bad_request("Estado de orden inválido");
        }
    }
    if let Some(numero) = cambios.numero.as_deref().map(str::trim) {
        if numero.is_empty() {
            return bad_request("El número de orden es obligatorio");
        }
        match numero_orden_exists(&state, numero, Some(&object_id)).await {
            Ok(true) => return bad_request("Ya existe una orden con ese número"),
            Ok(false) => {}
            Err(err) => return internal_error("Error al validar el número de orden", &err),
        }
    }

    match update_orden(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar la orden", &err),
    }
}

pub async fn ordenes_tarea_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TareaPatch>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    let indice = match patch.indice {
        Some(v) => v,
        None => return bad_request("El índice de la tarea es obligatorio"),
    };
    let completada = patch.completada.unwrap_or(true);

    let orden = match get_orden_by_id(&state, &object_id).await {
        Ok(Some(orden)) => orden,
        Ok(None) => return not_found("Orden no encontrada"),
        Err(err) => return internal_error("Error al obtener la orden", &err),
    };
    if indice >= orden.tareas.len() {
        return bad_request("Índice de tarea fuera de rango");
    }

    match marcar_tarea_orden(&state, &object_id, indice, completada).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar la tarea", &err),
    }
}

pub async fn ordenes_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_orden(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar la orden", &err),
    }
}
