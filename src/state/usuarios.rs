use anyhow::{Context, Result};
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use std::time::SystemTime;

use crate::models::{RolUsuario, Usuario, UsuarioUpdate};

use super::{AppState, crud};

pub async fn list_usuarios(state: &AppState) -> Result<Vec<Usuario>> {
    crud::list_all(&state.usuarios).await
}

pub async fn get_usuario_by_id(state: &AppState, id: &ObjectId) -> Result<Option<Usuario>> {
    crud::find_by_id(&state.usuarios, id).await
}

pub async fn find_usuario_by_email(state: &AppState, email: &str) -> Result<Option<Usuario>> {
    state
        .usuarios
        .find_one(doc! { "email": email.trim() })
        .await
        .map_err(Into::into)
}

pub async fn email_usuario_exists(
    state: &AppState,
    email: &str,
    excluir: Option<&ObjectId>,
) -> Result<bool> {
    crud::exists_matching(&state.usuarios, doc! { "email": email.trim() }, excluir).await
}

pub async fn create_usuario(
    state: &AppState,
    nombre: &str,
    email: &str,
    password: &str,
    rol: RolUsuario,
) -> Result<Usuario> {
    let mut usuario = Usuario {
        id: None,
        nombre: nombre.to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        rol,
        fecha_registro: Some(DateTime::from_system_time(SystemTime::now())),
    };
    let id = crud::insert_returning_id(&state.usuarios, &usuario, "usuario").await?;
    usuario.id = Some(id);
    Ok(usuario)
}

pub async fn update_usuario(
    state: &AppState,
    id: &ObjectId,
    cambios: &UsuarioUpdate,
) -> Result<()> {
    let mut set = Document::new();
    if let Some(v) = &cambios.nombre {
        set.insert("nombre", v.trim());
    }
    if let Some(v) = &cambios.email {
        set.insert("email", v.trim());
    }
    if let Some(v) = &cambios.password {
        set.insert("password", v.as_str());
    }
    if let Some(v) = &cambios.rol {
        let rol = RolUsuario::parse(v).context("rol inválido")?;
        set.insert("rol", rol.as_str());
    }
    crud::update_by_id(&state.usuarios, id, set).await
}

pub async fn delete_usuario(state: &AppState, id: &ObjectId) -> Result<()> {
    crud::delete_by_id(&state.usuarios, id).await
}

/// Chequeo de credenciales en texto plano. Placeholder asumido del sistema:
/// no hay sesiones ni tokens del lado del servidor.
pub async fn verificar_credenciales(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<Option<Usuario>> {
    match find_usuario_by_email(state, email).await? {
        Some(usuario) if usuario.password == password => Ok(Some(usuario)),
        _ => Ok(None),
    }
}
