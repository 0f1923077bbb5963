use crate::domain::ids::UserId;
use serde::{Deserialize, Serialize};

/// Usuario de la plataforma.
///
/// El número de móvil es la clave con la que las capas superiores
/// identifican al usuario, pero no se garantiza que sea único: las
/// búsquedas devuelven siempre el primer usuario registrado con ese número.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  /// Identificador único del usuario.
  pub id: UserId,

  /// Nombre visible.
  pub name: String,

  /// Número de móvil usado como clave de búsqueda externa.
  pub mobile: String,
}

impl User {
  pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
    Self { id: UserId::new(), name: name.into(), mobile: mobile.into() }
  }
}
