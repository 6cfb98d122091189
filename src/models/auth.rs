use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// Usuario autenticado que se guarda en la sesión
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserDocument")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Forma en que llega el usuario: `id`, `_id` o ambos
#[derive(Deserialize)]
struct UserDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    email: String,
    role: String,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<UserDocument> for AdminUser {
    type Error = String;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let id = doc
            .mongo_id
            .or(doc.id)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            email: doc.email,
            role: doc.role,
            name: doc.name,
        })
    }
}

impl AdminUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Nombre para mostrar: el nombre si existe, si no el email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Response de login del backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub user: AdminUser,
}

/// Response de logout del backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
