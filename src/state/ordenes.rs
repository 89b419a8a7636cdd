use anyhow::{Context, Result, bail};
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId, to_bson};
use std::time::SystemTime;

use crate::models::{EstadoOrden, OrdenTrabajo, OrdenUpdate, TareaOrden};

use super::{AppState, crud};

pub async fn list_ordenes(state: &AppState) -> Result<Vec<OrdenTrabajo>> {
    crud::list_all(&state.ordenes).await
}

pub async fn get_orden_by_id(state: &AppState, id: &ObjectId) -> Result<Option<OrdenTrabajo>> {
    crud::find_by_id(&state.ordenes, id).await
}

pub async fn numero_orden_exists(
    state: &AppState,
    numero: &str,
    excluir: Option<&ObjectId>,
) -> Result<bool> {
    crud::exists_matching(&state.ordenes, doc! { "numero": numero.trim() }, excluir).await
}

pub async fn create_orden(
    state: &AppState,
    numero: &str,
    cliente_id: &str,
    vehiculo_id: &str,
    estado: EstadoOrden,
    tareas: Vec<TareaOrden>,
    observaciones: Option<String>,
) -> Result<OrdenTrabajo> {
    let mut orden = OrdenTrabajo {
        id: None,
        numero: numero.to_string(),
        cliente_id: cliente_id.to_string(),
        vehiculo_id: vehiculo_id.to_string(),
        estado,
        tareas,
        observaciones,
        fecha_creacion: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.ordenes, &orden, "orden").await?;
    orden.id = Some(id);
    Ok(orden)
}

pub async fn update_orden(state: &AppState, id: &ObjectId, cambios: &OrdenUpdate) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.numero {
        set.insert("numero", v.trim());
    }
    if let Some(v) = &cambios.cliente_id {
        set.insert("clienteId", v.trim());
    }
    if let Some(v) = &cambios.vehiculo_id {
        set.insert("vehiculoId", v.trim());
    }
    if let Some(v) = &cambios.estado {
        let estado = EstadoOrden::parse(v).context("estado de orden inválido")?;
        set.insert("estado", estado.as_str());
    }
    if let Some(tareas) = &cambios.tareas {
        set.insert("tareas", to_bson(tareas)?);
    }
    if let Some(v) = &cambios.observaciones {
        set.insert("observaciones", v.trim());
    }
    crud::update_by_id(&state.ordenes, id, set).await
}

/// Marca un ítem del checklist por índice. La orden se relee completa porque
/// un `$set` posicional sobre un índice fuera de rango rellenaría el array
/// con nulls en Mongo.
pub async fn marcar_tarea_orden(
    state: &AppState,
    id: &ObjectId,
    indice: usize,
    completada: bool,
) -> Result<()> {
    let orden = get_orden_by_id(state, id)
        .await?
        .context("orden no encontrada")?;
    if indice >= orden.tareas.len() {
        bail!("índice de tarea fuera de rango");
    }
    let res = state
        .ordenes
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { format!("tareas.{indice}.completada"): completada } },
        )
        .await?;
    if res.matched_count == 0 {
        bail!("orden no encontrada");
    }
    Ok(())
}

pub async fn delete_orden(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.ordenes, id).await
}

/// Convierte las tareas de una plantilla en ítems de checklist sin completar.
pub fn tareas_desde_plantilla(tareas: &[String]) -> Vec<TareaOrden> {
    tareas
        .iter()
        .map(|descripcion| TareaOrden {
            descripcion: descripcion.clone(),
            completada: false,
        })
        .collect()
}
