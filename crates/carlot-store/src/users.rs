use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use carlot_types::{Role, SessionUser};
use password_hash::{PasswordHash, SaltString};
use uuid::Uuid;

use crate::{MarketStore, StoreError};

/// Server-side account record. The hash never leaves this crate.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

impl User {
    fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let mut saltBytes = [0u8; 16];
    getrandom::getrandom(&mut saltBytes).map_err(|e| StoreError::Internal(e.to_string()))?;
    let salt =
        SaltString::encode_b64(&saltBytes).map_err(|e| StoreError::Internal(e.to_string()))?;
    let argon2 = Argon2::default();
    let phc = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Internal(e.to_string()))?
        .to_string();
    Ok(phc)
}

fn verify_password(hash: &str, password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(hash) {
        let argon2 = Argon2::default();
        argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    } else {
        false
    }
}

impl MarketStore {
    pub fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("Name is required".into()));
        }
        if !email.contains('@') {
            return Err(StoreError::Validation("A valid email is required".into()));
        }
        if password.len() < 8 {
            return Err(StoreError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }

        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email.trim()))
        {
            return Err(StoreError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role: Role::User,
            password_hash: hash_password(password)?,
        };
        let sessionUser = user.to_session_user();
        users.push(user);
        tracing::info!("registered account {}", sessionUser.email);
        Ok(sessionUser)
    }

    /// Credential check. Unknown email and wrong password produce the same
    /// error so callers cannot enumerate accounts.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, StoreError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        let user = users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .ok_or(StoreError::InvalidCredentials)?;
        if !verify_password(&user.password_hash, password) {
            return Err(StoreError::InvalidCredentials);
        }
        Ok(user.to_session_user())
    }

    pub fn get_user(&self, id: &str) -> Result<SessionUser, StoreError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users
            .iter()
            .find(|u| u.id == id)
            .map(User::to_session_user)
            .ok_or(StoreError::NotFound("user"))
    }
}
