use serde::Serialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request de login del administrador
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(custom = "validate_not_blank")]
    pub password: String,
}
