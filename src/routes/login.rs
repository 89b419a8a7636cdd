// routes/login.rs
// POST /api/login { "email": "...", "password": "..." } -> { "success": bool }
// Chequeo de credenciales en texto plano, placeholder asumido: no emite
// sesión ni token.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::state::{AppState, verificar_credenciales};

use super::helpers::*;
use super::usuarios::UsuarioJson;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    let email = match texto_requerido(&body.email, "El email es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let password = match texto_requerido(&body.password, "La contraseña es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match verificar_credenciales(&state, email, password).await {
        Ok(Some(usuario)) => Json(json!({
            "success": true,
            "usuario": UsuarioJson::from(usuario),
        }))
        .into_response(),
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Credenciales inválidas" })),
        )
            .into_response(),
        Err(err) => internal_error("Error al iniciar sesión", &err),
    }
}
