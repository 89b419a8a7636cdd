// state/crud.rs
// Operaciones genéricas sobre una colección. Cada módulo de entidad agrega
// encima solo su lógica propia (validaciones, filtros, conversión de fechas).

use anyhow::{Context, Result, bail};
use futures::stream::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub async fn list_all<T>(coleccion: &Collection<T>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send + Sync,
{
    list_filtered(coleccion, doc! {}).await
}

pub async fn list_filtered<T>(coleccion: &Collection<T>, filtro: Document) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut cursor = coleccion.find(filtro).await?;
    let mut items = Vec::new();
    while let Some(item) = cursor.try_next().await? {
        items.push(item);
    }
    Ok(items)
}

pub async fn find_by_id<T>(coleccion: &Collection<T>, id: &ObjectId) -> Result<Option<T>>
where
    T: DeserializeOwned + Send + Sync,
{
    coleccion
        .find_one(doc! { "_id": id })
        .await
        .map_err(Into::into)
}

pub async fn insert_returning_id<T>(
    coleccion: &Collection<T>,
    documento: &T,
    etiqueta: &str,
) -> Result<ObjectId>
where
    T: Serialize + Send + Sync,
{
    let res = coleccion.insert_one(documento).await?;
    res.inserted_id
        .as_object_id()
        .with_context(|| format!("{etiqueta}: insert sin _id"))
}

/// Aplica un `$set` parcial. Falla si el documento no existe, cosa que la capa
/// HTTP traduce a 500 (comportamiento heredado, registrado como deuda).
pub async fn update_by_id<T>(
    coleccion: &Collection<T>,
    id: &ObjectId,
    cambios: Document,
) -> Result<()>
where
    T: DeserializeOwned + Send + Sync,
{
    if cambios.is_empty() {
        if find_by_id(coleccion, id).await?.is_none() {
            bail!("documento no encontrado");
        }
        return Ok(());
    }
    let res = coleccion
        .update_one(doc! { "_id": id }, doc! { "$set": cambios })
        .await?;
    if res.matched_count == 0 {
        bail!("documento no encontrado");
    }
    Ok(())
}

/// Borrado duro. `delete_one` no falla sobre un id inexistente, así que el
/// DELETE HTTP es idempotente a nivel de respuesta.
pub async fn delete_by_id<T>(coleccion: &Collection<T>, id: &ObjectId) -> Result<()>
where
    T: Send + Sync,
{
    coleccion.delete_one(doc! { "_id": id }).await?;
    Ok(())
}

/// Chequeo de existencia para los validadores de unicidad. `excluir` deja
/// afuera al documento que se está editando. No es atómico con la escritura
/// posterior: bajo envíos concurrentes puede colarse un duplicado benigno.
pub async fn exists_matching<T>(
    coleccion: &Collection<T>,
    mut filtro: Document,
    excluir: Option<&ObjectId>,
) -> Result<bool>
where
    T: DeserializeOwned + Send + Sync,
{
    if let Some(id) = excluir {
        filtro.insert("_id", doc! { "$ne": id });
    }
    Ok(coleccion.find_one(filtro).await?.is_some())
}
