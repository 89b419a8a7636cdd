use anyhow::Result;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{Vehiculo, VehiculoUpdate};

use super::{AppState, crud};

pub async fn list_vehiculos(state: &AppState) -> Result<Vec<Vehiculo>> {
    crud::list_all(&state.vehiculos).await
}

pub async fn get_vehiculo_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Vehiculo>> {
    crud::find_by_id(&state.vehiculos, id).await
}

/// La patente se compara normalizada a mayúsculas, igual que se guarda.
pub async fn patente_exists(
    state: &AppState,
    patente: &str,
    excluir: Option<&ObjectId>,
) -> Result<bool> {
    let normalizada = patente.trim().to_uppercase();
    crud::exists_matching(&state.vehiculos, doc! { "patente": normalizada }, excluir).await
}

pub async fn create_vehiculo(
    state: &AppState,
    patente: &str,
    cliente_id: &str,
    marca: &str,
    modelo: &str,
    anio: i32,
) -> Result<Vehiculo> {
    let mut vehiculo = Vehiculo {
        id: None,
        patente: patente.trim().to_uppercase(),
        cliente_id: cliente_id.to_string(),
        marca: marca.to_string(),
        modelo: modelo.to_string(),
        anio,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.vehiculos, &vehiculo, "vehiculo").await?;
    vehiculo.id = Some(id);
    Ok(vehiculo)
}

pub async fn update_vehiculo(
    state: &AppState,
    id: &ObjectId,
    cambios: &VehiculoUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.patente {
        set.insert("patente", v.trim().to_uppercase());
    }
    if let Some(v) = &cambios.cliente_id {
        set.insert("clienteId", v.trim());
    }
    if let Some(v) = &cambios.marca {
        set.insert("marca", v.trim());
    }
    if let Some(v) = &cambios.modelo {
        set.insert("modelo", v.trim());
    }
    if let Some(v) = cambios.anio {
        set.insert("anio", v);
    }
    crud::update_by_id(&state.vehiculos, id, set).await
}

pub async fn delete_vehiculo(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.vehiculos, id).await
}
