// src/common/response.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::common::list_query::{Page, Pagination};

// Envelope de sucesso: { success: true, message?, data }
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: Some(message.into()), data }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self { success: true, data: page.items, pagination: page.pagination }
    }
}

// Resposta sem dados (ex.: DELETE)
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}
