// src/middleware/list_params.rs

use std::collections::HashMap;

use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};

use crate::{
    common::{error::AppError, list_query::ListQuery},
    config::AppState,
};

// Extrator que transforma a query string em um ListQuery já validado,
// usando os padrões de paginação da configuração.
pub struct ListParams(pub ListQuery);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

        ListQuery::from_params(params, app_state.list_defaults).map(ListParams)
    }
}
