// src/common/db_utils.rs

use crate::common::error::AppError;

/// Converte violação de chave única em um erro amigável (409);
/// o resto segue como erro de banco.
pub(crate) fn unique_violation_or_db(e: sqlx::Error, message: impl FnOnce() -> String) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(message());
        }
    }
    e.into()
}
