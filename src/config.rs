// src/config.rs

use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::list_query::ListDefaults,
    db::{
        AccountRepository, CertificateRepository, ComplaintRepository, ContactRepository,
        DealRepository, InvoiceRepository, ScheduledEventRepository, TaskRepository,
    },
    services::InvoiceService,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub list_defaults: ListDefaults,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // O .env é opcional (em produção as variáveis vêm do ambiente)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let page_size: usize = parse_or(&lookup, "DEFAULT_PAGE_SIZE", 10)?;
        let max_page_size: usize = parse_or(&lookup, "MAX_PAGE_SIZE", 100)?;
        if page_size == 0 || max_page_size < page_size {
            return Err(anyhow!(
                "DEFAULT_PAGE_SIZE ({page_size}) deve estar entre 1 e MAX_PAGE_SIZE ({max_page_size})"
            ));
        }

        Ok(Self {
            database_url,
            app_addr: lookup("APP_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?),
            list_defaults: ListDefaults { page_size, max_page_size },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Valor inválido para {key} ('{raw}'): {e}")),
    }
}

// O estado compartilhado entre todos os handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub list_defaults: ListDefaults,
    pub account_repo: AccountRepository,
    pub contact_repo: ContactRepository,
    pub complaint_repo: ComplaintRepository,
    pub deal_repo: DealRepository,
    pub task_repo: TaskRepository,
    pub event_repo: ScheduledEventRepository,
    pub certificate_repo: CertificateRepository,
    pub invoice_service: InvoiceService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, config.list_defaults))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool, list_defaults: ListDefaults) -> Self {
        Self {
            account_repo: AccountRepository::new(db_pool.clone()),
            contact_repo: ContactRepository::new(db_pool.clone()),
            complaint_repo: ComplaintRepository::new(db_pool.clone()),
            deal_repo: DealRepository::new(db_pool.clone()),
            task_repo: TaskRepository::new(db_pool.clone()),
            event_repo: ScheduledEventRepository::new(db_pool.clone()),
            certificate_repo: CertificateRepository::new(db_pool.clone()),
            invoice_service: InvoiceService::new(InvoiceRepository::new(db_pool.clone())),
            list_defaults,
            db_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/crm")]))
            .unwrap();

        assert_eq!(config.app_addr, "0.0.0.0:3000");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.list_defaults, ListDefaults::default());
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn test_invalid_numbers_fail_loudly() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("DATABASE_MAX_CONNECTIONS", "muitas"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_must_fit_under_maximum() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("DEFAULT_PAGE_SIZE", "50"),
            ("MAX_PAGE_SIZE", "20"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("APP_ADDR", "127.0.0.1:8080"),
            ("DEFAULT_PAGE_SIZE", "25"),
        ]))
        .unwrap();
        assert_eq!(config.app_addr, "127.0.0.1:8080");
        assert_eq!(config.list_defaults.page_size, 25);
        assert_eq!(config.list_defaults.max_page_size, 100);
    }
}
