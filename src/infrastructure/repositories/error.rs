use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return DomainError::Persistence(format!(
                    "database constraint violation: {constraint}"
                ));
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::ColumnDecode { index, source } => {
            DomainError::Persistence(format!("failed to decode column {index}: {source}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
