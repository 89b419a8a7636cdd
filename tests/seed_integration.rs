#[path = "common/mod.rs"]
mod common;

use tallerdev::models::RolUsuario;
use tallerdev::state::{find_usuario_by_email, list_categorias, list_plantillas};

#[tokio::test]
async fn base_vacia_queda_sembrada() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let admin = find_usuario_by_email(&state, "admin@taller.local")
        .await
        .unwrap()
        .expect("seeded admin user missing");
    assert_eq!(admin.nombre, "Administrador");
    assert_eq!(admin.rol, RolUsuario::Admin);

    let categorias = list_categorias(&state).await.unwrap();
    assert!(categorias.len() >= 4);
    assert!(categorias.iter().any(|c| c.nombre == "Repuestos"));

    let plantillas = list_plantillas(&state).await.unwrap();
    assert!(!plantillas.is_empty());
    let service = plantillas
        .iter()
        .find(|p| p.nombre == "Service básico")
        .expect("seeded plantilla missing");
    assert_eq!(service.tareas.len(), 4);

    db.finish().await;
}
