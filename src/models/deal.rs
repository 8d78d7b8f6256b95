// src/models/deal.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::list_query::Listable,
    models::shared::{validate_not_blank, validate_not_negative},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "deal_stage", rename_all = "snake_case")]
pub enum DealStage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Uuid,

    #[schema(example = "Renovação anual 2025")]
    pub deal_name: String,
    pub customer: String,

    #[schema(example = "15000.00")]
    pub amount: Decimal,
    pub stage: DealStage,

    #[schema(example = 40)]
    pub probability: Option<i32>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-03-31")]
    pub expected_close_date: Option<NaiveDate>,
    pub assigned_user: Option<String>,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Deal {
    const SEARCHABLE_FIELDS: &'static [&'static str] =
        &["dealName", "customer", "stage", "assignedUser", "amount"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub deal_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub customer: String,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    #[serde(default)]
    pub stage: DealStage,

    #[validate(range(min = 0, max = 100, message = "out_of_range"))]
    pub probability: Option<i32>,

    #[schema(value_type = Option<String>, format = Date)]
    pub expected_close_date: Option<NaiveDate>,

    pub assigned_user: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probability_must_be_a_percentage() {
        let payload: DealPayload = serde_json::from_value(json!({
            "dealName": "Renovação",
            "customer": "Acme",
            "amount": 1000,
            "probability": 120
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("probability"));
    }

    #[test]
    fn test_stage_defaults_to_prospecting() {
        let payload: DealPayload = serde_json::from_value(json!({
            "dealName": "Renovação",
            "customer": "Acme",
            "amount": 1000
        }))
        .unwrap();
        assert_eq!(payload.stage, DealStage::Prospecting);
        assert!(payload.validate().is_ok());
    }
}
