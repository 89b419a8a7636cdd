// routes/plantillas.rs
// Plantillas de tareas reutilizables para armar checklists de órdenes.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{PlantillaTarea, PlantillaUpdate},
    state::{
        AppState, create_plantilla, delete_plantilla, get_plantilla_by_id, list_plantillas,
        update_plantilla,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantillaJson {
    id: String,
    nombre: String,
    descripcion: Option<String>,
    tareas: Vec<String>,
}

impl From<PlantillaTarea> for PlantillaJson {
    fn from(plantilla: PlantillaTarea) -> Self {
        PlantillaJson {
            id: id_texto(&plantilla.id),
            nombre: plantilla.nombre,
            descripcion: plantilla.descripcion,
            tareas: plantilla.tareas,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantillaPayload {
    nombre: Option<String>,
    #[serde(default)]
    descripcion: Option<String>,
    #[serde(default)]
    tareas: Option<Vec<String>>,
}

pub async fn plantillas_index(State(state): State<Arc<AppState>>) -> Response {
    match list_plantillas(&state).await {
        Ok(plantillas) => Json(
            plantillas
                .into_iter()
                .map(PlantillaJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener las plantillas", &err),
    }
}

pub async fn plantillas_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_plantilla_by_id(&state, &object_id).await {
        Ok(Some(plantilla)) => Json(PlantillaJson::from(plantilla)).into_response(),
        Ok(None) => not_found("Plantilla no encontrada"),
        Err(err) => internal_error("Error al obtener la plantilla", &err),
    }
}

pub async fn plantillas_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlantillaPayload>,
) -> Response {
    let nombre = match texto_requerido(&body.nombre, "El nombre es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let tareas = body.tareas.unwrap_or_default();
    match create_plantilla(&state, nombre, clean_opt(body.descripcion), tareas).await {
        Ok(plantilla) => created(PlantillaJson::from(plantilla)),
        Err(err) => internal_error("Error al crear la plantilla", &err),
    }
}

pub async fn plantillas_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<PlantillaUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match update_plantilla(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar la plantilla", &err),
    }
}

pub async fn plantillas_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_plantilla(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar la plantilla", &err),
    }
}
