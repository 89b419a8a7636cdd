use anyhow::{Context, Result};
use chrono::NaiveDate;
use mongodb::bson::{DateTime, Document, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{Cobro, CobroUpdate, EstadoCobro, MetodoPago};

use super::{AppState, crud, fecha_a_bson, parse_fecha};

/// Filtros opcionales del listado de cobros.
#[derive(Default)]
pub struct FiltroCobros {
    pub orden_id: Option<String>,
    pub solo_pendientes: bool,
}

pub async fn list_cobros(state: &AppState, filtro: FiltroCobros) -> Result<Vec<Cobro>> {
    let mut query = Document::new();
    if let Some(orden_id) = &filtro.orden_id {
        query.insert("ordenId", orden_id.trim());
    }
    if filtro.solo_pendientes {
        query.insert("estado", EstadoCobro::Pendiente.as_str());
    }
    crud::list_filtered(&state.cobros, query).await
}

pub async fn get_cobro_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Cobro>> {
    crud::find_by_id(&state.cobros, id).await
}

pub async fn create_cobro(
    state: &AppState,
    orden_id: &str,
    cliente_id: &str,
    monto: f64,
    fecha: NaiveDate,
    metodo_pago: MetodoPago,
    estado: EstadoCobro,
) -> Result<Cobro> {
    let mut cobro = Cobro {
        id: None,
        orden_id: orden_id.to_string(),
        cliente_id: cliente_id.to_string(),
        monto,
        fecha: fecha_a_bson(fecha),
        metodo_pago,
        estado,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.cobros, &cobro, "cobro").await?;
    cobro.id = Some(id);
    Ok(cobro)
}

pub async fn update_cobro(state: &AppState, id: &ObjectId, cambios: &CobroUpdate) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.orden_id {
        set.insert("ordenId", v.trim());
    }
    if let Some(v) = &cambios.cliente_id {
        set.insert("clienteId", v.trim());
    }
    if let Some(v) = cambios.monto {
        set.insert("monto", v);
    }
    if let Some(v) = &cambios.fecha {
        let dia = parse_fecha(v).context("fecha de cobro inválida")?;
        set.insert("fecha", fecha_a_bson(dia));
    }
    if let Some(v) = &cambios.metodo_pago {
        let metodo = MetodoPago::parse(v).context("método de pago inválido")?;
        set.insert("metodoPago", metodo.as_str());
    }
    if let Some(v) = &cambios.estado {
        let estado = EstadoCobro::parse(v).context("estado de cobro inválido")?;
        set.insert("estado", estado.as_str());
    }
    crud::update_by_id(&state.cobros, id, set).await
}

pub async fn delete_cobro(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.cobros, id).await
}
