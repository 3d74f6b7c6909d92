use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ServiceError {
    pub fn not_found(what: impl std::fmt::Display) -> Self { Self::NotFound(what.to_string()) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::StorageUnavailable(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_become_storage_unavailable() {
        let e: ServiceError = sea_orm::DbErr::Custom("connection refused".into()).into();
        assert!(matches!(e, ServiceError::StorageUnavailable(_)));
        assert!(e.to_string().starts_with("storage unavailable"));
    }

    #[test]
    fn not_found_message_names_the_target() {
        let e = ServiceError::not_found("exam Smith/Midterm");
        assert_eq!(e.to_string(), "not found: exam Smith/Midterm");
    }
}
