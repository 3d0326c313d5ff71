//! User domain types and wire shapes for the remote user service.

pub mod api;

use serde::{Deserialize, Serialize};

/// Account name whose role may never be changed from the admin screen.
pub const PROTECTED_ADMIN_NAME: &str = "admin";

/// Account role. The mapping is binary by design; the role-change action
/// simply flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_MANAGER")]
    Manager,
}

impl Role {
    /// The opposite role.
    pub fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::Manager,
            Self::Manager => Self::Admin,
        }
    }

    /// Numeric id the remote service uses for this role.
    pub fn role_id(self) -> u8 {
        match self {
            Self::Admin => 1,
            Self::Manager => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Manager => "ROLE_MANAGER",
        }
    }
}

/// Account status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl UserStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// One roster entry, as returned by `GET /users`. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Generic `{ "message": ... }` body used by several mutation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub user_id: i64,
    pub role_id: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub user_id: i64,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_id: i64,
    pub cell: String,
    pub salary: f64,
    pub others: f64,
    /// Base64 payload of the profile photo; empty when none was provided.
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_toggle_round_trip() {
        assert_eq!(Role::Admin.toggled(), Role::Manager);
        assert_eq!(Role::Manager.toggled(), Role::Admin);
        assert_eq!(Role::Admin.toggled().toggled(), Role::Admin);
    }

    #[test]
    fn role_ids_match_remote_service() {
        assert_eq!(Role::Admin.role_id(), 1);
        assert_eq!(Role::Manager.role_id(), 2);
        // Flipping an admin must target the manager id and vice versa.
        assert_eq!(Role::Admin.toggled().role_id(), 2);
        assert_eq!(Role::Manager.toggled().role_id(), 1);
    }

    #[test]
    fn status_toggle_round_trip() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(
            UserStatus::Active.toggled().toggled(),
            UserStatus::Active
        );
    }

    #[test]
    fn serde_tags_match_wire_format() {
        let user = UserItem {
            user_id: 3,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Manager,
            status: UserStatus::Active,
        };

        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 3,
                "name": "alice",
                "email": "alice@example.com",
                "role": "ROLE_MANAGER",
                "status": "ACTIVE",
            })
        );

        let back: UserItem = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, user);
    }

    #[test]
    fn status_request_serializes_inverted_status() {
        let request = UpdateStatusRequest {
            user_id: 3,
            status: UserStatus::Active.toggled(),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "userId": 3, "status": "INACTIVE" })
        );
    }
}
