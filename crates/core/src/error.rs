use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid tenant schema name: {0}")]
    InvalidSchema(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
