// src/services/invoice_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::InvoiceRepository,
    models::invoice::{InvoicePayload, InvoiceView},
};

// As faturas nunca saem do banco "cruas": todo caminho de leitura passa por
// aqui e recebe os totais calculados.
#[derive(Clone)]
pub struct InvoiceService {
    repo: InvoiceRepository,
}

impl InvoiceService {
    pub fn new(repo: InvoiceRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<InvoiceView>, AppError> {
        let invoices = self.repo.list().await?;
        Ok(invoices.into_iter().map(InvoiceView::from).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<InvoiceView, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(InvoiceView::from)
            .ok_or(AppError::not_found("Fatura", id))
    }

    pub async fn create(&self, input: &InvoicePayload) -> Result<InvoiceView, AppError> {
        let invoice = self.repo.create(input).await?;
        Ok(invoice.into())
    }

    pub async fn update(&self, id: Uuid, input: &InvoicePayload) -> Result<InvoiceView, AppError> {
        self.repo
            .update(id, input)
            .await?
            .map(InvoiceView::from)
            .ok_or(AppError::not_found("Fatura", id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Fatura", id));
        }
        Ok(())
    }
}
