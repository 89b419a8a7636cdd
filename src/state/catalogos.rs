// state/catalogos.rs
// Datos de referencia: proveedores, categorías de gasto y plantillas de tareas.

use anyhow::Result;
use mongodb::bson::{DateTime, Document, oid::ObjectId, to_bson};
use std::time::SystemTime;

use crate::models::{
    Categoria, CategoriaUpdate, PlantillaTarea, PlantillaUpdate, Proveedor, ProveedorUpdate,
};

use super::{AppState, crud};

pub async fn list_proveedores(state: &AppState) -> Result<Vec<Proveedor>> {
    crud::list_all(&state.proveedores).await
}

pub async fn get_proveedor_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Proveedor>> {
    crud::find_by_id(&state.proveedores, id).await
}

pub async fn create_proveedor(
    state: &AppState,
    nombre: &str,
    cuit: Option<String>,
    telefono: Option<String>,
    email: Option<String>,
    direccion: Option<String>,
) -> Result<Proveedor> {
    let mut proveedor = Proveedor {
        id: None,
        nombre: nombre.to_string(),
        cuit,
        telefono,
        email,
        direccion,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.proveedores, &proveedor, "proveedor").await?;
    proveedor.id = Some(id);
    Ok(proveedor)
}

pub async fn update_proveedor(
    state: &AppState,
    id: &ObjectId,
    cambios: &ProveedorUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.nombre {
        set.insert("nombre", v.trim());
    }
    if let Some(v) = &cambios.cuit {
        set.insert("cuit", v.trim());
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
    crud::update_by_id(&state.proveedores, id, set).await
}

pub async fn delete_proveedor(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.proveedores, id).await
}

pub async fn list_categorias(state: &AppState) -> Result<Vec<Categoria>> {
    crud::list_all(&state.categorias).await
}

pub async fn get_categoria_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Categoria>> {
    crud::find_by_id(&state.categorias, id).await
}

pub async fn create_categoria(
    state: &AppState,
    nombre: &str,
    descripcion: Option<String>,
) -> Result<Categoria> {
    let mut categoria = Categoria {
        id: None,
        nombre: nombre.to_string(),
        descripcion,
    };
    let id = crud::insert_returning_id(&state.categorias, &categoria, "categoria").await?;
    categoria.id = Some(id);
    Ok(categoria)
}

pub async fn update_categoria(
    state: &AppState,
    id: &ObjectId,
    cambios: &CategoriaUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.nombre {
        set.insert("nombre", v.trim());
    }
    if let Some(v) = &cambios.descripcion {
        set.insert("descripcion", v.trim());
    }
    crud::update_by_id(&state.categorias, id, set).await
}

pub async fn delete_categoria(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.categorias, id).await
}

pub async fn list_plantillas(state: &AppState) -> Result<Vec<PlantillaTarea>> {
    crud::list_all(&state.plantillas).await
}

pub async fn get_plantilla_by_id(
    state: &AppState,
    id: &ObjectId,
) -> Result<Option<PlantillaTarea>> {
    crud::find_by_id(&state.plantillas, id).await
}

pub async fn create_plantilla(
    state: &AppState,
    nombre: &str,
    descripcion: Option<String>,
    tareas: Vec<String>,
) -> Result<PlantillaTarea> {
    let mut plantilla = PlantillaTarea {
        id: None,
        nombre: nombre.to_string(),
        descripcion,
        tareas,
    };
    let id = crud::insert_returning_id(&state.plantillas, &plantilla, "plantilla").await?;
    plantilla.id = Some(id);
    Ok(plantilla)
}

pub async fn update_plantilla(
    state: &AppState,
    id: &ObjectId,
    cambios: &PlantillaUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.nombre {
        set.insert("nombre", v.trim());
    }
    if let Some(v) = &cambios.descripcion {
        set.insert("descripcion", v.trim());
    }
    if let Some(tareas) = &cambios.tareas {
        set.insert("tareas", to_bson(tareas)?);
    }
    crud::update_by_id(&state.plantillas, id, set).await
}

pub async fn delete_plantilla(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.plantillas, id).await
}
