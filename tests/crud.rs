#[path = "common/mod.rs"]
mod common;

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;

use tallerdev::models::{
    ClienteUpdate, EstadoCobro, EstadoOrden, MetodoPago, ProveedorUpdate, RolUsuario,
};
use tallerdev::state::{
    FiltroCobros, create_categoria, create_cliente, create_cobro, create_gasto, create_orden,
    create_plantilla, create_proveedor, create_usuario, delete_categoria, delete_cliente,
    delete_plantilla, delete_proveedor, dni_exists, email_usuario_exists, get_categoria_by_id,
    get_cliente_by_id, get_orden_by_id, get_plantilla_by_id, get_proveedor_by_id, list_clientes,
    list_cobros, list_gastos, marcar_tarea_orden, tareas_desde_plantilla, update_cliente,
    update_proveedor, verificar_credenciales,
};

fn dia(valor: &str) -> NaiveDate {
    NaiveDate::parse_from_str(valor, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn clientes_crud_works() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let initial = list_clientes(&state).await.unwrap().len();
    let cliente = create_cliente(
        &state,
        "María",
        "López",
        "30222111",
        "11-6666-0001",
        Some("maria@example.com".into()),
        None,
    )
    .await
    .unwrap();
    let id = cliente.id.clone().unwrap();
    assert!(list_clientes(&state).await.unwrap().len() > initial);

    assert!(dni_exists(&state, "30222111", None).await.unwrap());
    assert!(!dni_exists(&state, "30222111", Some(&id)).await.unwrap());

    update_cliente(
        &state,
        &id,
        &ClienteUpdate {
            telefono: Some("11-6666-9999".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let fetched = get_cliente_by_id(&state, &id).await.unwrap().unwrap();
    assert_eq!(fetched.telefono, "11-6666-9999");
    assert_eq!(fetched.nombre, "María");

    delete_cliente(&state, &id).await.unwrap();
    assert!(get_cliente_by_id(&state, &id).await.unwrap().is_none());

    db.finish().await;
}

#[tokio::test]
async fn update_sobre_id_inexistente_falla() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let resultado = update_cliente(
        &state,
        &ObjectId::new(),
        &ClienteUpdate {
            nombre: Some("Nadie".into()),
            ..Default::default()
        },
    )
    .await;
    assert!(resultado.is_err());

    db.finish().await;
}

#[tokio::test]
async fn gastos_se_filtran_por_proveedor() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let proveedor = create_proveedor(
        &state,
        "Repuestos Norte",
        Some("30-11222333-4".into()),
        None,
        None,
        None,
    )
    .await
    .unwrap();
    let proveedor_id = proveedor.id.unwrap().to_hex();
    let otro_proveedor = ObjectId::new().to_hex();

    let categoria = create_categoria(&state, "Repuestos importados", None)
        .await
        .unwrap();
    let categoria_id = categoria.id.unwrap().to_hex();

    create_gasto(
        &state,
        &proveedor_id,
        &categoria_id,
        "Pastillas de freno",
        25000.0,
        dia("2025-01-15"),
    )
    .await
    .unwrap();
    create_gasto(
        &state,
        &otro_proveedor,
        &categoria_id,
        "Aceite 10W40",
        18000.0,
        dia("2025-01-16"),
    )
    .await
    .unwrap();

    let filtrados = list_gastos(&state, Some(&proveedor_id)).await.unwrap();
    assert_eq!(filtrados.len(), 1);
    assert_eq!(filtrados[0].descripcion, "Pastillas de freno");

    let todos = list_gastos(&state, None).await.unwrap();
    assert_eq!(todos.len(), 2);

    db.finish().await;
}

#[tokio::test]
async fn cobros_filtro_combinado() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let orden_id = ObjectId::new().to_hex();
    let cliente_id = ObjectId::new().to_hex();

    create_cobro(
        &state,
        &orden_id,
        &cliente_id,
        10000.0,
        dia("2025-02-01"),
        MetodoPago::Tarjeta,
        EstadoCobro::Pendiente,
    )
    .await
    .unwrap();
    create_cobro(
        &state,
        &orden_id,
        &cliente_id,
        5000.0,
        dia("2025-02-02"),
        MetodoPago::Efectivo,
        EstadoCobro::Pagado,
    )
    .await
    .unwrap();

    let pendientes = list_cobros(
        &state,
        FiltroCobros {
            orden_id: Some(orden_id.clone()),
            solo_pendientes: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(pendientes.len(), 1);
    assert_eq!(pendientes[0].monto, 10000.0);

    let de_la_orden = list_cobros(
        &state,
        FiltroCobros {
            orden_id: Some(orden_id),
            solo_pendientes: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(de_la_orden.len(), 2);

    db.finish().await;
}

#[tokio::test]
async fn ordenes_marcan_tareas_del_checklist() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let plantilla = create_plantilla(
        &state,
        "Frenos completos",
        None,
        vec![
            "Cambio de pastillas".into(),
            "Rectificado de discos".into(),
        ],
    )
    .await
    .unwrap();

    let orden = create_orden(
        &state,
        "OT-2001",
        &ObjectId::new().to_hex(),
        &ObjectId::new().to_hex(),
        EstadoOrden::default(),
        tareas_desde_plantilla(&plantilla.tareas),
        Some("Cliente espera en el local".into()),
    )
    .await
    .unwrap();
    let orden_id = orden.id.clone().unwrap();
    assert_eq!(orden.tareas.len(), 2);

    marcar_tarea_orden(&state, &orden_id, 1, true).await.unwrap();
    let fetched = get_orden_by_id(&state, &orden_id).await.unwrap().unwrap();
    assert!(!fetched.tareas[0].completada);
    assert!(fetched.tareas[1].completada);

    // Fuera de rango: error, sin tocar el documento.
    assert!(marcar_tarea_orden(&state, &orden_id, 5, true).await.is_err());

    let plantilla_id = plantilla.id.unwrap();
    delete_plantilla(&state, &plantilla_id).await.unwrap();
    assert!(
        get_plantilla_by_id(&state, &plantilla_id)
            .await
            .unwrap()
            .is_none()
    );

    db.finish().await;
}

#[tokio::test]
async fn catalogos_crud_works() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let proveedor = create_proveedor(&state, "Lubricantes Sur", None, None, None, None)
        .await
        .unwrap();
    let proveedor_id = proveedor.id.unwrap();
    update_proveedor(
        &state,
        &proveedor_id,
        &ProveedorUpdate {
            telefono: Some("11-3333-0001".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let fetched = get_proveedor_by_id(&state, &proveedor_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.telefono.as_deref(), Some("11-3333-0001"));
    delete_proveedor(&state, &proveedor_id).await.unwrap();
    assert!(
        get_proveedor_by_id(&state, &proveedor_id)
            .await
            .unwrap()
            .is_none()
    );

    let categoria = create_categoria(&state, "Electricidad", Some("Trabajos eléctricos".into()))
        .await
        .unwrap();
    let categoria_id = categoria.id.unwrap();
    assert!(
        get_categoria_by_id(&state, &categoria_id)
            .await
            .unwrap()
            .is_some()
    );
    delete_categoria(&state, &categoria_id).await.unwrap();
    assert!(
        get_categoria_by_id(&state, &categoria_id)
            .await
            .unwrap()
            .is_none()
    );

    db.finish().await;
}

#[tokio::test]
async fn usuarios_y_credenciales() {
    let db = match common::TestDb::abrir().await {
        Some(db) => db,
        None => return,
    };
    let state = db.state.clone();

    let usuario = create_usuario(
        &state,
        "Carlos",
        "carlos@taller.local",
        "secreto",
        RolUsuario::Empleado,
    )
    .await
    .unwrap();
    let id = usuario.id.unwrap();

    assert!(
        email_usuario_exists(&state, "carlos@taller.local", None)
            .await
            .unwrap()
    );
    assert!(
        !email_usuario_exists(&state, "carlos@taller.local", Some(&id))
            .await
            .unwrap()
    );

    let ok = verificar_credenciales(&state, "carlos@taller.local", "secreto")
        .await
        .unwrap();
    assert!(ok.is_some());
    let mal = verificar_credenciales(&state, "carlos@taller.local", "otra")
        .await
        .unwrap();
    assert!(mal.is_none());

    db.finish().await;
}
