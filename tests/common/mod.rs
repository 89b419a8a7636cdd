use std::{
    env,
    sync::{Mutex, MutexGuard, OnceLock},
    time::{SystemTime, UNIX_EPOCH},
};

use mongodb::{Client, Database};

use tallerdev::state::{AppState, init_state};

// Las suites comparten el servidor de Mongo; el candado serializa las pruebas
// para que la variable MONGODB_DB no se pise entre bases efímeras.
static DB_GATE: OnceLock<Mutex<()>> = OnceLock::new();

/// Base de datos efímera de una prueba: nombre único por corrida, sembrada
/// vía `init_state` y descartada entera en `finish`.
pub struct TestDb {
    pub state: AppState,
    uri: String,
    nombre: String,
    _gate: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Devuelve `None` cuando no hay un Mongo accesible; la prueba se saltea.
    pub async fn abrir() -> Option<TestDb> {
        let gate = DB_GATE
            .get_or_init(|| Mutex::new(()))
            .lock()
            .expect("db gate poisoned");

        let uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let nombre = format!("tallerdevtest_{}", marca_unica());

        // El drop inicial hace de sonda de conectividad además de limpiar un
        // resto de alguna corrida abortada.
        let base = abrir_base(&uri, &nombre).await?;
        if let Err(err) = base.drop().await {
            eprintln!("salteando la prueba, Mongo no responde: {err:?}");
            return None;
        }

        unsafe {
            env::set_var("MONGODB_DB", &nombre);
        }
        match init_state().await {
            Ok(state) => Some(TestDb {
                state,
                uri,
                nombre,
                _gate: gate,
            }),
            Err(err) => {
                eprintln!("salteando la prueba, init_state falló: {err:?}");
                None
            }
        }
    }

    /// Tira la base de la prueba. Mejor esfuerzo: un drop fallido solo deja
    /// basura con prefijo de test en el servidor local.
    pub async fn finish(self) {
        if let Some(base) = abrir_base(&self.uri, &self.nombre).await {
            let _ = base.drop().await;
        }
    }
}

fn marca_unica() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

async fn abrir_base(uri: &str, nombre: &str) -> Option<Database> {
    match Client::with_uri_str(uri).await {
        Ok(cliente) => Some(cliente.database(nombre)),
        Err(err) => {
            eprintln!("salteando la prueba, sin cliente de Mongo: {err:?}");
            None
        }
    }
}
