// routes/turnos.rs
// CRUD JSON de turnos, con filtro ?fecha=YYYY-MM-DD.
// No hay resolución de conflictos de agenda: dos turnos pueden pisarse.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{EstadoTurno, Turno, TurnoUpdate},
    state::{
        AppState, create_turno, delete_turno, get_turno_by_id, list_turnos, parse_fecha,
        update_turno,
    },
};

use super::helpers::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoJson {
    id: String,
    cliente_id: String,
    vehiculo_id: Option<String>,
    fecha: String,
    hora: String,
    estado: String,
    motivo: Option<String>,
    fecha_registro: String,
}

impl From<Turno> for TurnoJson {
    fn from(turno: Turno) -> Self {
        TurnoJson {
            id: id_texto(&turno.id),
            cliente_id: turno.cliente_id,
            vehiculo_id: turno.vehiculo_id,
            fecha: fecha_texto(Some(turno.fecha)),
            hora: turno.hora,
            estado: turno.estado.as_str().to_string(),
            motivo: turno.motivo,
            fecha_registro: fecha_texto(turno.fecha_registro),
        }
    }
}

#[derive(Deserialize)]
pub struct TurnosQuery {
    #[serde(default)]
    fecha: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoPayload {
    cliente_id: Option<String>,
    #[serde(default)]
    vehiculo_id: Option<String>,
    fecha: Option<String>,
    hora: Option<String>,
    #[serde(default)]
    estado: Option<String>,
    #[serde(default)]
    motivo: Option<String>,
}

pub async fn turnos_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TurnosQuery>,
) -> Response {
    let fecha = match clean_opt(query.fecha) {
        Some(valor) => match parse_fecha(&valor) {
            Some(dia) => Some(dia),
            None => return bad_request("Fecha inválida (usar YYYY-MM-DD)"),
        },
        None => None,
    };
    match list_turnos(&state, fecha).await {
        Ok(turnos) => {
            Json(turnos.into_iter().map(TurnoJson::from).collect::<Vec<_>>()).into_response()
        }
        Err(err) => internal_error("Error al obtener los turnos", &err),
    }
}

pub async fn turnos_show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match get_turno_by_id(&state, &object_id).await {
        Ok(Some(turno)) => Json(TurnoJson::from(turno)).into_response(),
        Ok(None) => not_found("Turno no encontrado"),
        Err(err) => internal_error("Error al obtener el turno", &err),
    }
}

pub async fn turnos_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TurnoPayload>,
) -> Response {
    let cliente_id = match texto_requerido(&body.cliente_id, "El cliente es obligatorio") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let fecha = match texto_requerido(&body.fecha, "La fecha es obligatoria") {
        Ok(v) => match parse_fecha(v) {
            Some(dia) => dia,
            None => return bad_request("Fecha inválida (usar YYYY-MM-DD)"),
        },
        Err(resp) => return resp,
    };
    let hora = match texto_requerido(&body.hora, "La hora es obligatoria") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let estado = match body.estado.as_deref() {
        Some(valor) => match EstadoTurno::parse(valor) {
            Some(e) => e,
            None => return bad_request("Estado de turno inválido"),
        },
        None => EstadoTurno::default(),
    };

    match create_turno(
        &state,
        cliente_id,
        clean_opt(body.vehiculo_id),
        fecha,
        hora,
        estado,
        clean_opt(body.motivo),
    )
    .await
    {
        Ok(turno) => created(TurnoJson::from(turno)),
        Err(err) => internal_error("Error al crear el turno", &err),
    }
}

pub async fn turnos_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(cambios): Json<TurnoUpdate>,
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
    if let Some(valor) = cambios.estado.as_deref() {
        if EstadoTurno::parse(valor).is_none() {
            return bad_request("Estado de turno inválido");
        }
    }
    match update_turno(&state, &object_id, &cambios).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al actualizar el turno", &err),
    }
}

pub async fn turnos_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let object_id = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(resp) => return resp,
    };
    match delete_turno(&state, &object_id).await {
        Ok(()) => success(),
        Err(err) => internal_error("Error al eliminar el turno", &err),
    }
}
