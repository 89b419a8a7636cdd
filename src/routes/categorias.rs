// routes/categorias.rs

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Categoria, CategoriaUpdate},
    state::{
        AppState, create_categoria, delete_categoria, get_categoria_by_id, list_categorias,
        update_categoria,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaJson {
    id: String,
    nombre: String,
    descripcion: Option<String>,
}

impl From<Categoria> for CategoriaJson {
    fn from(categoria: Categoria) -> Self {
        CategoriaJson {
            id: id_texto(&categoria.id),
            nombre: categoria.nombre,
            descripcion: categoria.descripcion,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaPayload {
    nombre: Option<String>,
    #[serde(default)]
    descripcion: Option<String>,
}

pub async fn categorias_index(State(state): State<Arc<AppState>>) -> Response {
    match list_categorias(&state).await {
        Ok(categorias) => Json(
            categorias
                .into_iter()
                .map(CategoriaJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener las categorías", &err),
    }
}

pub async fn categorias_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_categoria_by_id(&state, &object_id).await {
        Ok(Some(categoria)) => Json(CategoriaJson::from(categoria)).into_response(),
        Ok(None) => not_found("Categoría no encontrada"),
        Err(err) => internal_error("Error al obtener la categoría", &err),
    }
}

pub async fn categorias_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CategoriaPayload>,
) -> Response {
    let nombre = match texto_requerido(&body.nombre, "El nombre es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match create_categoria(&state, nombre, clean_opt(body.descripcion)).await {
        Ok(categoria) => created(CategoriaJson::from(categoria)),
        Err(err) => internal_error("Error al crear la categoría", &err),
    }
}

pub async fn categorias_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<CategoriaUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match update_categoria(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar la categoría", &err),
    }
}

pub async fn categorias_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_categoria(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar la categoría", &err),
    }
}
