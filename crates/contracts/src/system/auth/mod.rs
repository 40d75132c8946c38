use crate::shared::validation::{ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usuario")]
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required().validate_string(self.username.trim(), "Usuario")?;
        ValidationRules::required().validate_string(&self.password, "Contraseña")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(rename = "usuario")]
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "nombre", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// "admin", "vendedor", "repartidor"
    #[serde(rename = "rol", default)]
    pub role: String,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            username: "  ".into(),
            password: "x".into(),
        };
        assert_eq!(req.validate(), Err(ValidationError::Required("Usuario")));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 1, "usuario": "caja", "nombre": ""}"#).unwrap();
        assert_eq!(user.display_name(), "caja");
        assert!(!user.is_admin());
    }
}
