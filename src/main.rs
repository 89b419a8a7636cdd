// main.rs
// Wiring del servidor axum: inicializa MongoDB, arma el router y sirve en :8080.
//
// Recursos bajo /api: clientes, vehiculos, ordenes, cobros, gastos, turnos,
// proveedores, categorias, plantillas-tareas, usuarios, validaciones y login.

use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use tallerdev::{routes, state};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let state = Arc::new(
        state::init_state()
            .await
            .expect("failed to initialize MongoDB state"),
    );

    let app = routes::api_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    println!("Listening on http://{addr}");
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
