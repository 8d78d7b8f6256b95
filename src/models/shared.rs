// src/models/shared.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

// Mapeia o CREATE TYPE priority do banco (reclamações e tarefas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "priority", rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

// Campo obrigatório: vazio ou só espaços é rejeitado
pub fn validate_not_blank(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("required".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("negative_value".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_percentage(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::ZERO || *val > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.add_param("max".into(), &100.0);
        err.message = Some("out_of_range".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn date_range_error() -> ValidationError {
    let mut err = ValidationError::new("date_range");
    err.message = Some("invalid_date_range".into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(validate_not_blank("Acme").is_ok());
        assert!(validate_not_blank("  Acme ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_not_negative_accepts_zero_and_positive() {
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&d("10.50")).is_ok());
        assert!(validate_not_negative(&d("-0.01")).is_err());
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(validate_percentage(&d("0")).is_ok());
        assert!(validate_percentage(&d("18")).is_ok());
        assert!(validate_percentage(&d("100")).is_ok());
        assert!(validate_percentage(&d("100.01")).is_err());
        assert!(validate_percentage(&d("-1")).is_err());
    }

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "High");
        let parsed: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
