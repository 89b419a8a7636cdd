// routes/mod.rs
// Re-exports de los handlers y armado del router de la API.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

mod helpers;

pub mod categorias;
pub mod clientes;
pub mod cobros;
pub mod gastos;
pub mod login;
pub mod ordenes;
pub mod plantillas;
pub mod proveedores;
pub mod turnos;
pub mod usuarios;
pub mod validaciones;
pub mod vehiculos;

pub use categorias::*;
pub use clientes::*;
pub use cobros::*;
pub use gastos::*;
pub use login::login;
pub use ordenes::*;
pub use plantillas::*;
pub use proveedores::*;
pub use turnos::*;
pub use usuarios::*;
pub use validaciones::*;
pub use vehiculos::*;

/// Router completo de la API. Un recurso por segmento de path, convención
/// colección/id estándar.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/login", post(login::login))
        .route(
            "/api/clientes",
            get(clientes_index).post(clientes_create),
        )
        .route(
            "/api/clientes/{id}",
            get(clientes_show)
                .put(clientes_update)
                .delete(clientes_delete),
        )
        .route(
            "/api/vehiculos",
            get(vehiculos_index).post(vehiculos_create),
        )
        .route(
            "/api/vehiculos/{id}",
            get(vehiculos_show)
                .put(vehiculos_update)
                .delete(vehiculos_delete),
        )
        .route("/api/ordenes", get(ordenes_index).post(ordenes_create))
        .route(
            "/api/ordenes/{id}",
            get(ordenes_show).put(ordenes_update).delete(ordenes_delete),
        )
        .route("/api/ordenes/{id}/tareas", put(ordenes_tarea_update))
        .route("/api/cobros", get(cobros_index).post(cobros_create))
        .route(
            "/api/cobros/{id}",
            get(cobros_show).put(cobros_update).delete(cobros_delete),
        )
        .route("/api/gastos", get(gastos_index).post(gastos_create))
        .route(
            "/api/gastos/{id}",
            get(gastos_show).put(gastos_update).delete(gastos_delete),
        )
        .route("/api/turnos", get(turnos_index).post(turnos_create))
        .route(
            "/api/turnos/{id}",
            get(turnos_show).put(turnos_update).delete(turnos_delete),
        )
        .route(
            "/api/proveedores",
            get(proveedores_index).post(proveedores_create),
        )
        .route(
            "/api/proveedores/{id}",
            get(proveedores_show)
                .put(proveedores_update)
                .delete(proveedores_delete),
        )
        .route(
            "/api/categorias",
            get(categorias_index).post(categorias_create),
        )
        .route(
            "/api/categorias/{id}",
            get(categorias_show)
                .put(categorias_update)
                .delete(categorias_delete),
        )
        .route(
            "/api/plantillas-tareas",
            get(plantillas_index).post(plantillas_create),
        )
        .route(
            "/api/plantillas-tareas/{id}",
            get(plantillas_show)
                .put(plantillas_update)
                .delete(plantillas_delete),
        )
        .route(
            "/api/usuarios",
            get(usuarios_index).post(usuarios_create),
        )
        .route(
            "/api/usuarios/{id}",
            get(usuarios_show)
                .put(usuarios_update)
                .delete(usuarios_delete),
        )
        .route("/api/validaciones/dni", get(validar_dni))
        .route("/api/validaciones/patente", get(validar_patente))
        .route("/api/validaciones/numero-orden", get(validar_numero_orden))
        .with_state(state)
}
