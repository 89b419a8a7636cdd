use anyhow::{Context, Result};
use chrono::NaiveDate;
use mongodb::bson::{DateTime, Document, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{Gasto, GastoUpdate};

use super::{AppState, crud, fecha_a_bson, parse_fecha};

pub async fn list_gastos(state: &AppState, proveedor_id: Option<&str>) -> Result<Vec<Gasto>> {
    let mut query = Document::new();
    if let Some(proveedor) = proveedor_id {
        query.insert("proveedorId", proveedor.trim());
    }
    crud::list_filtered(&state.gastos, query).await
}

pub async fn get_gasto_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Gasto>> {
    crud::find_by_id(&state.gastos, id).await
}

pub async fn create_gasto(
    state: &AppState,
    proveedor_id: &str,
    categoria_id: &str,
    descripcion: &str,
    monto: f64,
    fecha: NaiveDate,
) -> Result<Gasto> {
    let mut gasto = Gasto {
        id: None,
        proveedor_id: proveedor_id.to_string(),
        categoria_id: categoria_id.to_string(),
        descripcion: descripcion.to_string(),
        monto,
        fecha: fecha_a_bson(fecha),
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.gastos, &gasto, "gasto").await?;
    gasto.id = Some(id);
    Ok(gasto)
}

pub async fn update_gasto(state: &AppState, id: &ObjectId, cambios: &GastoUpdate) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.proveedor_id {
        set.insert("proveedorId", v.trim());
    }
    if let Some(v) = &cambios.categoria_id {
        set.insert("categoriaId", v.trim());
    }
    if let Some(v) = &cambios.descripcion {
        set.insert("descripcion", v.trim());
    }
    if let Some(v) = cambios.monto {
        set.insert("monto", v);
    }
    if let Some(v) = &cambios.fecha {
        let dia = parse_fecha(v).context("fecha de gasto inválida")?;
        set.insert("fecha", fecha_a_bson(dia));
    }
    crud::update_by_id(&state.gastos, id, set).await
}

pub async fn delete_gasto(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.gastos, id).await
}
