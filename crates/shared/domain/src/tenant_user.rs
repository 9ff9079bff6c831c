//! Tenant user domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainResult;
use crate::password::Password;

/// User owned by exactly one tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    /// Unique user identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Email address, unique within the owning tenant
    #[cfg_attr(feature = "openapi", schema(example = "a@b.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "Ada"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Lovelace"))]
    pub last_name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Whether the user is active
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl TenantUser {
    /// Build a fresh, active user, hashing the submitted password.
    pub fn new(input: NewTenantUser) -> DomainResult<Self> {
        let password = Password::new(&input.password)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id: input.tenant_id,
            email: input.email.trim().to_string(),
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: password.into_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check a plaintext password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(plain_text)
    }

}

/// Tenant user creation input (plaintext password)
#[derive(Clone, Deserialize)]
pub struct NewTenantUser {
    pub tenant_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl std::fmt::Debug for NewTenantUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewTenantUser")
            .field("tenant_id", &self.tenant_id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Partial tenant user update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TenantUserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewTenantUser {
        NewTenantUser {
            tenant_id: Uuid::new_v4(),
            email: " a@b.com ".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "CorrectHorse1".to_string(),
        }
    }

    #[test]
    fn test_new_user_hashes_password() {
        let user = TenantUser::new(new_user()).unwrap();

        assert_ne!(user.password_hash, "CorrectHorse1");
        assert!(user.verify_password("CorrectHorse1"));
        assert!(!user.verify_password("WrongHorse1"));
        assert!(user.is_active);
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = TenantUser::new(new_user()).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["firstName"], "Ada");
        assert!(json.get("tenantId").is_some());
    }

    #[test]
    fn test_debug_redacts_plaintext_password() {
        let debug = format!("{:?}", new_user());
        assert!(!debug.contains("CorrectHorse1"));
    }
}
