// src/models/account.rs

use chrono::{DateTime, Utc};
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
#[sqlx(type_name = "account_type", rename_all = "snake_case")]
pub enum AccountType {
    Customer,
    Partner,
    #[default]
    Prospect,
    Vendor,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,

    #[schema(example = "Acme Comércio Ltda")]
    pub account_name: String,
    pub account_owner: Option<String>,
    pub account_type: AccountType,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub billing_address: Option<String>,

    #[schema(example = "250000.00")]
    pub annual_revenue: Option<Decimal>,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Account {
    const SEARCHABLE_FIELDS: &'static [&'static str] = &[
        "accountName",
        "accountOwner",
        "accountType",
        "industry",
        "phone",
        "email",
        "website",
    ];
}

// Usado tanto no POST quanto no PUT
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Acme Comércio Ltda")]
    pub account_name: String,

    pub account_owner: Option<String>,

    #[serde(default)]
    pub account_type: AccountType,

    pub industry: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "contato@acme.com")]
    pub email: Option<String>,

    #[validate(url(message = "invalid_url"))]
    #[schema(example = "https://acme.com")]
    pub website: Option<String>,

    pub billing_address: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    pub annual_revenue: Option<Decimal>,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_defaults_account_type() {
        let payload: AccountPayload =
            serde_json::from_value(json!({ "accountName": "Acme" })).unwrap();
        assert_eq!(payload.account_type, AccountType::Prospect);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_payload_rejects_bad_email_url_and_revenue() {
        let payload: AccountPayload = serde_json::from_value(json!({
            "accountName": "",
            "email": "not-an-email",
            "website": "acme dot com",
            "annualRevenue": -5
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("account_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("website"));
        assert!(fields.contains_key("annual_revenue"));
    }
}
