use anyhow::Result;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{Cliente, ClienteUpdate};

use super::{AppState, crud};

pub async fn list_clientes(state: &AppState) -> Result<Vec<Cliente>> {
    crud::list_all(&state.clientes).await
}

pub async fn get_cliente_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Cliente>> {
    crud::find_by_id(&state.clientes, id).await
}

pub async fn dni_exists(
    state: &AppState,
    dni: &str,
    excluir: Option<&ObjectId>,
) -> Result<bool> {
    crud::exists_matching(&state.clientes, doc! { "dni": dni.trim() }, excluir).await
}

pub async fn create_cliente(
    state: &AppState,
    nombre: &str,
    apellido: &str,
    dni: &str,
    telefono: &str,
    email: Option<String>,
    direccion: Option<String>,
) -> Result<Cliente> {
    let mut cliente = Cliente {
        id: None,
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
        dni: dni.to_string(),
        telefono: telefono.to_string(),
        email,
        direccion,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.clientes, &cliente, "cliente").await?;
    cliente.id = Some(id);
    Ok(cliente)
}

pub async fn update_cliente(
    state: &AppState,
    id: &ObjectId,
    cambios: &ClienteUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.nombre {
        set.insert("nombre", v.trim());
    }
    if let Some(v) = &cambios.apellido {
        set.insert("apellido", v.trim());
    }
    if let Some(v) = &cambios.dni {
        set.insert("dni", v.trim());
    }
    if let Some(v) = &cambios.telefono {
        set.insert("telefono", v.trim());
    }
    if let Some(v) = &cambios.email {
        set.insert("email", v.trim());
    }
    if let Some(v) = &cambios.direccion {
        set.insert("direccion", v.trim());
    }
    crud::update_by_id(&state.clientes, id, set).await
}

pub async fn delete_cliente(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.clientes, id).await
}
