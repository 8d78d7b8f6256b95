// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::list_query::Listable, models::shared::validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,

    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "da Silva")]
    pub last_name: String,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub title: Option<String>,

    // Referência informal à conta (texto livre, sem FK)
    pub account_name: Option<String>,
    pub lead_source: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Contact {
    const SEARCHABLE_FIELDS: &'static [&'static str] = &[
        "firstName",
        "lastName",
        "email",
        "phone",
        "mobile",
        "title",
        "accountName",
        "leadSource",
    ];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub title: Option<String>,
    pub account_name: Option<String>,
    pub lead_source: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}
