use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u32 },
    #[error("language `{code}` is declared more than once")]
    DuplicateSeoCode { code: String },
    #[error("domain validation failed: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn duplicate_id(entity: &'static str, id: u32) -> Self {
        Self::DuplicateId { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
