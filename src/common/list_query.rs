// src/common/list_query.rs
//
// Pipeline das tabelas: busca -> filtros por atributo -> ordenação -> paginação.
// Roda sobre as linhas já carregadas do banco, usando a forma JSON de cada
// registro (os mesmos nomes camelCase que o frontend enxerga).

use std::{cmp::Ordering, collections::HashMap, str::FromStr};

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::common::error::AppError;

/// Registro que pode passar pelo pipeline de listagem.
pub trait Listable: Serialize {
    /// Campos (nomes JSON) considerados pela busca livre.
    const SEARCHABLE_FIELDS: &'static [&'static str];
}

const CONTAINS_SUFFIX: &str = "__contains";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDefaults {
    pub page_size: usize,
    pub max_page_size: usize,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self { page_size: 10, max_page_size: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FieldFilter {
    fn matches(&self, record: &Value) -> bool {
        let Some(actual) = record.get(&self.field).filter(|v| !v.is_null()) else {
            return false;
        };
        // Decimais chegam como número JSON (1000.00 -> 1000.0)
        if let (FilterOp::Equals, Value::Number(n)) = (self.op, actual) {
            if let (Some(actual), Ok(expected)) = (n.as_f64(), self.value.parse::<f64>()) {
                return actual == expected;
            }
        }
        let actual = stringify(actual).to_lowercase();
        let expected = self.value.to_lowercase();
        match self.op {
            FilterOp::Equals => actual == expected,
            FilterOp::Contains => actual.contains(&expected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::InvalidQuery(format!(
                "sortOrder deve ser 'asc' ou 'desc' (recebido '{other}')."
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    // Nulos e campos ausentes sempre vão para o fim, em qualquer direção.
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let left = a.get(&self.field).filter(|v| !v.is_null());
        let right = b.get(&self.field).filter(|v| !v.is_null());
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => {
                let ord = compare_values(l, r);
                match self.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Parâmetros aceitos pelas rotas de listagem (apenas para a documentação).
#[allow(dead_code)]
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQueryParams {
    /// Busca livre, sem diferenciar maiúsculas, nos campos pesquisáveis.
    pub search: Option<String>,
    /// Campo (nome JSON) usado na ordenação.
    pub sort_by: Option<String>,
    /// `asc` ou `desc`.
    pub sort_order: Option<String>,
    /// Página, começando em 1.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: Vec<FieldFilter>,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(defaults: ListDefaults) -> Self {
        Self {
            search: None,
            filters: Vec::new(),
            sort: None,
            page: 1,
            page_size: defaults.page_size,
        }
    }

    /// Interpreta os pares da query string.
    ///
    /// Chaves reservadas: `search`, `sortBy`, `sortOrder`, `page`, `pageSize`.
    /// Qualquer outra chave vira filtro de igualdade (`caseStatus=Pending`);
    /// com o sufixo `__contains` vira filtro de substring
    /// (`subject__contains=atraso`). Valores vazios são ignorados.
    pub fn from_params(
        params: HashMap<String, String>,
        defaults: ListDefaults,
    ) -> Result<Self, AppError> {
        let mut query = Self::new(defaults);
        let mut sort_field = None;
        let mut direction = SortDirection::default();

        // Ordem determinística dos filtros
        let mut entries: Vec<(String, String)> = params.into_iter().collect();
        entries.sort();

        for (key, value) in entries {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "search" => query.search = Some(value.to_string()),
                "sortBy" => sort_field = Some(value.to_string()),
                "sortOrder" => direction = value.parse()?,
                "page" => query.page = parse_positive("page", value)?,
                "pageSize" => {
                    query.page_size = parse_positive("pageSize", value)?.min(defaults.max_page_size)
                }
                _ => {
                    let (field, op) = match key.strip_suffix(CONTAINS_SUFFIX) {
                        Some(field) => (field, FilterOp::Contains),
                        None => (key.as_str(), FilterOp::Equals),
                    };
                    if field.is_empty() {
                        return Err(AppError::InvalidQuery(format!("Filtro sem campo: '{key}'.")));
                    }
                    query.filters.push(FieldFilter {
                        field: field.to_string(),
                        op,
                        value: value.to_string(),
                    });
                }
            }
        }

        query.sort = sort_field.map(|field| SortSpec { field, direction });
        Ok(query)
    }

    pub fn apply<T: Listable>(&self, records: Vec<T>) -> Result<Page<T>, AppError> {
        let mut rows = records
            .into_iter()
            .map(|record| serde_json::to_value(&record).map(|json| (record, json)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::from)?;

        let needle = self.search.as_deref().map(str::to_lowercase);
        rows.retain(|(_, json)| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(json, T::SEARCHABLE_FIELDS, needle))
                && self.filters.iter().all(|filter| filter.matches(json))
        });

        // sort_by é estável: empates mantêm a ordem que veio do banco
        if let Some(sort) = &self.sort {
            rows.sort_by(|(_, a), (_, b)| sort.compare(a, b));
        }

        let total_items = rows.len();
        let total_pages = total_items.div_ceil(self.page_size);
        let start = (self.page - 1).saturating_mul(self.page_size);
        let items = rows
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .map(|(record, _)| record)
            .collect();

        Ok(Page {
            items,
            pagination: Pagination {
                page: self.page,
                page_size: self.page_size,
                total_items,
                total_pages,
            },
        })
    }
}

fn parse_positive(name: &str, value: &str) -> Result<usize, AppError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidQuery(format!(
            "{name} deve ser um inteiro maior que zero (recebido '{value}')."
        ))),
    }
}

fn matches_search(record: &Value, fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| {
        record
            .get(*field)
            .filter(|v| !v.is_null())
            .is_some_and(|v| stringify(v).to_lowercase().contains(needle))
    })
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => match (l.as_f64(), r.as_f64()) {
            (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::String(l), Value::String(r)) => {
            // Timestamps variam na quantidade de casas decimais dos segundos
            match (DateTime::parse_from_rfc3339(l), DateTime::parse_from_rfc3339(r)) {
                (Ok(l), Ok(r)) => l.cmp(&r),
                _ => l.to_lowercase().cmp(&r.to_lowercase()),
            }
        }
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        _ => stringify(left).cmp(&stringify(right)),
    }
}
