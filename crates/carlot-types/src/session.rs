use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
    ServiceProvider,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// The authenticated identity held client-side: user plus bearer token.
/// Owned by the session store; pages only ever read it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload returned by both auth endpoints on success.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: SessionUser,
}

/// Decode a `user` value read back from durable storage. Corrupt data
/// yields `None` so the caller can fail safe by logging out.
pub fn parse_stored_user(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_roundtrip() {
        let user = SessionUser {
            id: "u-1".into(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            role: Role::ServiceProvider,
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_stored_user(&raw), Some(user));
    }

    #[test]
    fn corrupt_stored_user_is_none() {
        assert_eq!(parse_stored_user("{not json"), None);
        assert_eq!(parse_stored_user(r#"{"id":"u-1"}"#), None);
        assert_eq!(parse_stored_user(""), None);
    }

    #[test]
    fn role_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&Role::ServiceProvider).unwrap();
        assert_eq!(json, r#""service_provider""#);
        let back: Role = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(back, Role::Admin);
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let user: SessionUser = serde_json::from_str(
            r#"{"id":"u-2","name":"Ben","email":"ben@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::User);
    }
}
