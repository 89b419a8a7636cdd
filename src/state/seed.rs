use anyhow::Result;
use mongodb::Database;
use mongodb::bson::DateTime;
use std::time::SystemTime;

use crate::models::{Categoria, PlantillaTarea, RolUsuario, Usuario};

const COLECCIONES: [&str; 10] = [
    "clientes",
    "vehiculos",
    "ordenes",
    "cobros",
    "gastos",
    "turnos",
    "proveedores",
    "categorias",
    "plantillas_tareas",
    "usuarios",
];

pub(super) async fn is_database_empty(db: &Database) -> Result<bool> {
    let usuarios = db.collection::<Usuario>("usuarios");
    let count = usuarios.estimated_document_count().await?;
    Ok(count == 0)
}

pub(super) async fn ensure_collections(db: &Database) -> Result<()> {
    let existentes = db.list_collection_names().await?;
    for nombre in COLECCIONES {
        if !existentes.iter().any(|n| n == nombre) {
            db.create_collection(nombre).await?;
        }
    }
    Ok(())
}

/// Siembra un admin, las categorías de gasto base y una plantilla de service.
pub(super) async fn seed_defaults(db: &Database) -> Result<()> {
    let ahora = DateTime::from_system_time(SystemTime::now());

    db.collection::<Usuario>("usuarios")
        .insert_one(Usuario {
            id: None,
            nombre: "Administrador".to_string(),
            email: "admin@taller.local".to_string(),
            password: "admin".to_string(),
            rol: RolUsuario::Admin,
            fecha_registro: Some(ahora),
        })
        .await?;

    let categorias = db.collection::<Categoria>("categorias");
    for nombre in ["Repuestos", "Lubricantes", "Herramientas", "Servicios"] {
        categorias
            .insert_one(Categoria {
                id: None,
                nombre: nombre.to_string(),
                descripcion: None,
            })
            .await?;
    }

    db.collection::<PlantillaTarea>("plantillas_tareas")
        .insert_one(PlantillaTarea {
            id: None,
            nombre: "Service básico".to_string(),
            descripcion: Some("Mantenimiento periódico estándar".to_string()),
            tareas: vec![
                "Cambio de aceite y filtro".to_string(),
                "Revisión de frenos".to_string(),
                "Control de niveles".to_string(),
                "Rotación de neumáticos".to_string(),
            ],
        })
        .await?;

    Ok(())
}
