// routes/usuarios.rs
// CRUD JSON de usuarios. La contraseña nunca sale en las respuestas.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{RolUsuario, Usuario, UsuarioUpdate},
    state::{
        AppState, create_usuario, delete_usuario, email_usuario_exists, get_usuario_by_id,
        list_usuarios, update_usuario,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioJson {
    id: String,
    nombre: String,
    email: String,
    rol: String,
    fecha_registro: String,
}

impl From<Usuario> for UsuarioJson {
    fn from(usuario: Usuario) -> Self {
        UsuarioJson {
            id: id_texto(&usuario.id),
            nombre: usuario.nombre,
            email: usuario.email,
            rol: usuario.rol.as_str().to_string(),
            fecha_registro: fecha_texto(usuario.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPayload {
    nombre: Option<String>,
    email: Option<String>,
    password: Option<String>,
    #[serde(default)]
    rol: Option<String>,
}

pub async fn usuarios_index(State(state): State<Arc<AppState>>) -> Response {
    match list_usuarios(&state).await {
        Ok(usuarios) => Json(
            usuarios
                .into_iter()
                .map(UsuarioJson::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Error al obtener los usuarios", &err),
    }
}

pub async fn usuarios_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_usuario_by_id(&state, &object_id).await {
        Ok(Some(usuario)) => Json(UsuarioJson::from(usuario)).into_response(),
        Ok(None) => not_found("Usuario no encontrado"),
        Err(err) => internal_error("Error al obtener el usuario", &err),
    }
}

pub async fn usuarios_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UsuarioPayload>,
) -> Response {
    let nombre = match texto_requerido(&body.nombre, "El nombre es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let email = match texto_requerido(&body.email, "El email es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let password = match texto_requerido(&body.password, "La contraseña es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rol = match body.rol.as_deref() {
        Some(valor) => match RolUsuario::parse(valor) {
            Some(r) => r,
            None => return bad_request("Rol inválido"),
        },
        None => RolUsuario::default(),
    };

    match email_usuario_exists(&state, email, None).await {
        Ok(true) => return bad_request("Ya existe un usuario con ese email"),
        Ok(false) => {}
        Err(err) => return internal_error("Error al validar el email", &err),
    }

    match create_usuario(&state, nombre, email, password, rol).await {
        Ok(usuario) => created(UsuarioJson::from(usuario)),
        Err(err) => internal_error("Error al crear el usuario", &err),
    }
}

pub async fn usuarios_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<UsuarioUpdate>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };

    if let Some(valor) = cambios.rol.as_deref() {
        if RolUsuario::parse(valor).is_none() {
            return bad_request("Rol inválido");
        }
    }
    if let Some(email) = cambios.email.as_deref().map(str::trim) {
        if email.is_empty() {
            return bad_request("El email es obligatorio");
        }
        match email_usuario_exists(&state, email, Some(&object_id)).await {
            Ok(true) => return bad_request("Ya existe un usuario con ese email"),
            Ok(false) => {}
            Err(err) => return internal_error("Error al validar el email", &err),
        }
    }

    match update_usuario(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el usuario", &err),
    }
}

pub async fn usuarios_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_usuario(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el usuario", &err),
    }
}
