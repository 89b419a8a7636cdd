// state module: AppState, inicialización y re-exports de los submódulos.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::DateTime;
use mongodb::{Client, Collection};
use std::env;

use crate::models::{
    Categoria, Cliente, Cobro, Gasto, OrdenTrabajo, PlantillaTarea, Proveedor, Turno, Usuario,
    Vehiculo,
};

pub mod crud;
mod seed;

mod catalogos;
mod clientes;
mod cobros;
mod gastos;
mod ordenes;
mod turnos;
mod usuarios;
mod vehiculos;

pub use catalogos::*;
pub use clientes::*;
pub use cobros::*;
pub use gastos::*;
pub use ordenes::*;
pub use turnos::*;
pub use usuarios::*;
pub use vehiculos::*;

#[derive(Clone)]
pub struct AppState {
    pub clientes: Collection<Cliente>,
    pub vehiculos: Collection<Vehiculo>,
    pub ordenes: Collection<OrdenTrabajo>,
    pub cobros: Collection<Cobro>,
    pub gastos: Collection<Gasto>,
    pub turnos: Collection<Turno>,
    pub proveedores: Collection<Proveedor>,
    pub categorias: Collection<Categoria>,
    pub plantillas: Collection<PlantillaTarea>,
    pub usuarios: Collection<Usuario>,
}

pub async fn init_state() -> Result<AppState> {
    let uri = env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = env::var("MONGODB_DB").unwrap_or_else(|_| "taller".to_string());

    let client = Client::with_uri_str(uri).await?;
    let db = client.database(&db_name);

    seed::ensure_collections(&db).await?;

    // Solo se siembra cuando la base está efectivamente vacía (sin usuarios).
    if seed::is_database_empty(&db).await? {
        seed::seed_defaults(&db).await?;
    }

    Ok(AppState {
        clientes: db.collection::<Cliente>("clientes"),
        vehiculos: db.collection::<Vehiculo>("vehiculos"),
        ordenes: db.collection::<OrdenTrabajo>("ordenes"),
        cobros: db.collection::<Cobro>("cobros"),
        gastos: db.collection::<Gasto>("gastos"),
        turnos: db.collection::<Turno>("turnos"),
        proveedores: db.collection::<Proveedor>("proveedores"),
        categorias: db.collection::<Categoria>("categorias"),
        plantillas: db.collection::<PlantillaTarea>("plantillas_tareas"),
        usuarios: db.collection::<Usuario>("usuarios"),
    })
}

/// Medianoche UTC del día indicado, en el tipo de fecha nativo del store.
pub fn fecha_a_bson(dia: NaiveDate) -> DateTime {
    DateTime::from_chrono(dia.and_time(NaiveTime::MIN).and_utc())
}

pub fn parse_fecha(valor: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(valor.trim(), "%Y-%m-%d").ok()
}
