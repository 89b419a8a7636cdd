// models.rs
// Documentos MongoDB del taller y los structs de patch parcial que llegan por PUT.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Roles de usuario para autorización.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RolUsuario {
    Admin,
    Empleado,
}

impl RolUsuario {
    pub fn as_str(&self) -> &'static str {
        match self {
            RolUsuario::Admin => "admin",
            RolUsuario::Empleado => "empleado",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor.to_lowercase().as_str() {
            "admin" => Some(RolUsuario::Admin),
            "empleado" => Some(RolUsuario::Empleado),
            _ => None,
        }
    }
}

impl Default for RolUsuario {
    fn default() -> Self {
        RolUsuario::Empleado
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstadoOrden {
    Pendiente,
    EnProceso,
    Completada,
    Entregada,
}

impl EstadoOrden {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoOrden::Pendiente => "pendiente",
            EstadoOrden::EnProceso => "en_proceso",
            EstadoOrden::Completada => "completada",
            EstadoOrden::Entregada => "entregada",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor.to_lowercase().as_str() {
            "pendiente" => Some(EstadoOrden::Pendiente),
            "en_proceso" => Some(EstadoOrden::EnProceso),
            "completada" => Some(EstadoOrden::Completada),
            "entregada" => Some(EstadoOrden::Entregada),
            _ => None,
        }
    }
}

impl Default for EstadoOrden {
    fn default() -> Self {
        EstadoOrden::Pendiente
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCobro {
    Pendiente,
    Pagado,
}

impl EstadoCobro {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCobro::Pendiente => "pendiente",
            EstadoCobro::Pagado => "pagado",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor.to_lowercase().as_str() {
            "pendiente" => Some(EstadoCobro::Pendiente),
            "pagado" => Some(EstadoCobro::Pagado),
            _ => None,
        }
    }
}

impl Default for EstadoCobro {
    fn default() -> Self {
        EstadoCobro::Pendiente
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetodoPago {
    Efectivo,
    Tarjeta,
    Transferencia,
}

impl MetodoPago {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetodoPago::Efectivo => "efectivo",
            MetodoPago::Tarjeta => "tarjeta",
            MetodoPago::Transferencia => "transferencia",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor.to_lowercase().as_str() {
            "efectivo" => Some(MetodoPago::Efectivo),
            "tarjeta" => Some(MetodoPago::Tarjeta),
            "transferencia" => Some(MetodoPago::Transferencia),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EstadoTurno {
    Pendiente,
    Confirmado,
    Completado,
    Cancelado,
}

impl EstadoTurno {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoTurno::Pendiente => "pendiente",
            EstadoTurno::Confirmado => "confirmado",
            EstadoTurno::Completado => "completado",
            EstadoTurno::Cancelado => "cancelado",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor.to_lowercase().as_str() {
            "pendiente" => Some(EstadoTurno::Pendiente),
            "confirmado" => Some(EstadoTurno::Confirmado),
            "completado" => Some(EstadoTurno::Completado),
            "cancelado" => Some(EstadoTurno::Cancelado),
            _ => None,
        }
    }
}

impl Default for EstadoTurno {
    fn default() -> Self {
        EstadoTurno::Pendiente
    }
}

/// Cliente del taller. El DNI es único (validado en la capa HTTP, no en la base).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    pub fecha_registro: Option<DateTime>,
}

/// Vehículo asociado a un cliente. La patente es única.
/// Las referencias entre documentos son strings hex de ObjectId, sin integridad
/// referencial del lado del servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehiculo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub patente: String,
    pub cliente_id: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub fecha_registro: Option<DateTime>,
}

/// Ítem del checklist de una orden de trabajo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TareaOrden {
    pub descripcion: String,
    #[serde(default)]
    pub completada: bool,
}

/// Orden de trabajo, el registro central del taller. El número es único.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenTrabajo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub numero: String,
    pub cliente_id: String,
    pub vehiculo_id: String,
    pub estado: EstadoOrden,
    #[serde(default)]
    pub tareas: Vec<TareaOrden>,
    #[serde(default)]
    pub observaciones: Option<String>,
    pub fecha_creacion: Option<DateTime>,
}

/// Cobro recibido contra una orden de trabajo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cobro {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub orden_id: String,
    pub cliente_id: String,
    pub monto: f64,
    pub fecha: DateTime,
    pub metodo_pago: MetodoPago,
    pub estado: EstadoCobro,
    pub fecha_registro: Option<DateTime>,
}

/// Gasto pagado a un proveedor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gasto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub proveedor_id: String,
    pub categoria_id: String,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: DateTime,
    pub fecha_registro: Option<DateTime>,
}

/// Turno agendado. La fecha se guarda como medianoche UTC del día del turno
/// para poder filtrar por rango; la hora queda como texto "HH:MM".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turno {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub cliente_id: String,
    #[serde(default)]
    pub vehiculo_id: Option<String>,
    pub fecha: DateTime,
    pub hora: String,
    pub estado: EstadoTurno,
    #[serde(default)]
    pub motivo: Option<String>,
    pub fecha_registro: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre: String,
    #[serde(default)]
    pub cuit: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    pub fecha_registro: Option<DateTime>,
}

/// Categoría de gasto.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Plantilla reutilizable para poblar el checklist de una orden.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantillaTarea {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub tareas: Vec<String>,
}

/// Usuario del sistema. La contraseña se guarda en texto plano: el login es un
/// placeholder reconocido, no una frontera de seguridad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: RolUsuario,
    pub fecha_registro: Option<DateTime>,
}

// Patches parciales de PUT: los campos ausentes no se tocan. Los campos de
// fecha y los enums llegan como texto y se convierten en la capa de estado.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub dni: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiculoUpdate {
    pub patente: Option<String>,
    pub cliente_id: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenUpdate {
    pub numero: Option<String>,
    pub cliente_id: Option<String>,
    pub vehiculo_id: Option<String>,
    pub estado: Option<String>,
    pub tareas: Option<Vec<TareaOrden>>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobroUpdate {
    pub orden_id: Option<String>,
    pub cliente_id: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub metodo_pago: Option<String>,
    pub estado: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GastoUpdate {
    pub proveedor_id: Option<String>,
    pub categoria_id: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoUpdate {
    pub cliente_id: Option<String>,
    pub vehiculo_id: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub estado: Option<String>,
    pub motivo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorUpdate {
    pub nombre: Option<String>,
    pub cuit: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantillaUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub tareas: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdate {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub rol: Option<String>,
}
