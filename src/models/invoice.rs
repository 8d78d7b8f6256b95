// src/models/invoice.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::list_query::Listable,
    models::shared::{date_range_error, validate_not_blank, validate_not_negative, validate_percentage},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

// Linha da tabela 'invoices'. Os totais NÃO são persistidos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,

    #[schema(example = "NF-2024-0001")]
    pub invoice_number: String,
    pub customer: String,

    #[schema(value_type = String, format = Date)]
    pub invoice_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[schema(example = "1000.00")]
    pub amount: Decimal,
    #[schema(example = "100.00")]
    pub discount: Decimal,
    // Percentual (18 = 18%)
    #[schema(example = "18")]
    pub gst_rate: Decimal,

    pub status: InvoiceStatus,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    /// subtotal = valor - desconto; imposto = subtotal * alíquota / 100,
    /// arredondado em 2 casas; total = subtotal + imposto.
    pub fn compute(amount: Decimal, discount: Decimal, gst_rate: Decimal) -> Self {
        let subtotal = (amount - discount).max(Decimal::ZERO);
        let gst_amount = (subtotal * gst_rate / Decimal::ONE_HUNDRED).round_dp(2);
        Self { subtotal, gst_amount, total: subtotal + gst_amount }
    }
}

/// O que a API devolve: a linha mais os totais calculados na leitura.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    #[serde(flatten)]
    pub invoice: Invoice,
    #[serde(flatten)]
    pub totals: InvoiceTotals,
}

impl From<Invoice> for InvoiceView {
    fn from(invoice: Invoice) -> Self {
        let totals = InvoiceTotals::compute(invoice.amount, invoice.discount, invoice.gst_rate);
        Self { invoice, totals }
    }
}

impl Listable for InvoiceView {
    const SEARCHABLE_FIELDS: &'static [&'static str] =
        &["invoiceNumber", "customer", "status", "total"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_invoice_consistency"))]
pub struct InvoicePayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub invoice_number: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub customer: String,

    #[schema(value_type = String, format = Date)]
    pub invoice_date: NaiveDate,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub discount: Decimal,

    #[validate(custom(function = "validate_percentage"))]
    #[serde(default)]
    pub gst_rate: Decimal,

    #[serde(default)]
    pub status: InvoiceStatus,

    pub notes: Option<String>,
}

fn validate_invoice_consistency(payload: &InvoicePayload) -> Result<(), ValidationError> {
    if payload.discount > payload.amount {
        let mut err = ValidationError::new("discount_exceeds_amount");
        err.message = Some("discount_exceeds_amount".into());
        return Err(err);
    }
    if payload.due_date.is_some_and(|due| due < payload.invoice_date) {
        return Err(date_range_error());
    }
    Ok(())
}
