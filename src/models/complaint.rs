// src/models/complaint.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::list_query::Listable, models::shared::{validate_not_blank, Priority}};

// Mapeia o CREATE TYPE case_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "case_status", rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,

    #[schema(example = "Acme Comércio Ltda")]
    pub company_name: String,
    #[schema(example = "João Pereira")]
    pub complainer_name: String,
    #[schema(example = "(11) 99999-8888")]
    pub contact_number: String,
    pub email_address: String,
    #[schema(example = "Entrega atrasada")]
    pub subject: String,

    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub date: NaiveDate,

    pub case_status: CaseStatus,
    pub priority: Priority,

    // Canal de origem: telefone, e-mail, web...
    #[schema(example = "Phone")]
    pub case_origin: String,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Complaint {
    const SEARCHABLE_FIELDS: &'static [&'static str] = &[
        "companyName",
        "complainerName",
        "contactNumber",
        "emailAddress",
        "subject",
        "caseStatus",
        "priority",
        "caseOrigin",
    ];
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub company_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub complainer_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub contact_number: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "joao@email.com")]
    pub email_address: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub subject: String,

    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub date: NaiveDate,

    #[serde(default)]
    pub case_status: CaseStatus,

    #[serde(default)]
    pub priority: Priority,

    #[validate(custom(function = "validate_not_blank"))]
    pub case_origin: String,

    pub description: Option<String>,
}
