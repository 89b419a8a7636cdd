use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{EstadoTurno, Turno, TurnoUpdate};

use super::{AppState, crud, fecha_a_bson, parse_fecha};

/// Lista turnos, opcionalmente acotados a un día mediante un rango
/// [medianoche, medianoche siguiente) sobre la fecha almacenada.
pub async fn list_turnos(state: &AppState, fecha: Option<NaiveDate>) -> Result<Vec<Turno>> {
    let query = match fecha {
        Some(dia) => {
            let desde = dia.and_time(NaiveTime::MIN).and_utc();
            let hasta = desde + Duration::days(1);
            doc! {
                "fecha": {
                    "$gte": DateTime::from_chrono(desde),
                    "$lt": DateTime::from_chrono(hasta),
                }
            }
        }
        None => doc! {},
    };
    crud::list_filtered(&state.turnos, query).await
}

pub async fn get_turno_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Turno>> {
    crud::find_by_id(&state.turnos, id).await
}

pub async fn create_turno(
    state: &AppState,
    cliente_id: &str,
    vehiculo_id: Option<String>,
    fecha: NaiveDate,
    hora: &str,
    estado: EstadoTurno,
    motivo: Option<String>,
) -> Result<Turno> {
    let mut turno = Turno {
        id: None,
        cliente_id: cliente_id.to_string(),
        vehiculo_id,
        fecha: fecha_a_bson(fecha),
        hora: hora.to_string(),
        estado,
        motivo,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.turnos, &turno, "turno").await?;
    turno.id = Some(id);
    Ok(turno)
}

pub async fn update_turno(state: &AppState, id: &ObjectId, cambios: &TurnoUpdate) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.cliente_id {
        set.insert("clienteId", v.trim());
    }
    if let Some(v) = &cambios.vehiculo_id {
        set.insert("vehiculoId", v.trim());
    }
    if let Some(v) = &cambios.fecha {
        let dia = parse_fecha(v).context("fecha de turno inválida")?;
        set.insert("fecha", fecha_a_bson(dia));
    }
    if let Some(v) = &cambios.hora {
        set.insert("hora", v.trim());
    }
    if let Some(v) = &cambios.estado {
        let estado = EstadoTurno::parse(v).context("estado de turno inválido")?;
        set.insert("estado", estado.as_str());
    }
    if let Some(v) = &cambios.motivo {
        set.insert("motivo", v.trim());
    }
    crud::update_by_id(&state.turnos, id, set).await
}

pub async fn delete_turno(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.turnos, id).await
}
