#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("{0}")]
    Validation(String),
    #[error("internal: {0}")]
    Internal(String),
}
