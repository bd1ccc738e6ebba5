use std::str::FromStr;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use crate::core::library::{BookstoreError, BookstoreResult};
use crate::credentials::CredentialResolver;

// EnvCredentialResolver takes a connection string as is, used for local development databases
#[derive(Debug)]
pub struct EnvCredentialResolver {
    database_url: Option<String>,
}

impl EnvCredentialResolver {
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
        }
    }
}

#[async_trait]
impl CredentialResolver for EnvCredentialResolver {
    async fn resolve(&self) -> BookstoreResult<PgConnectOptions> {
        let url = self.database_url.as_deref().ok_or_else(|| BookstoreError::credentials(
            "DATABASE_URL is required for the local-postgres store", None, false))?;
        PgConnectOptions::from_str(url).map_err(|err| BookstoreError::credentials(
            format!("invalid DATABASE_URL: {}", err).as_str(), None, false))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::BookstoreError;
    use crate::credentials::CredentialResolver;
    use crate::credentials::env_credential_resolver::EnvCredentialResolver;

    #[tokio::test]
    async fn test_should_resolve_database_url() {
        let resolver = EnvCredentialResolver::new(Some("postgres://admin:pw@localhost:5432/books".to_string()));
        let _ = resolver.resolve().await.expect("should resolve options");
    }

    #[tokio::test]
    async fn test_should_require_database_url() {
        let resolver = EnvCredentialResolver::new(None);
        assert!(matches!(resolver.resolve().await, Err(BookstoreError::Credentials { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_malformed_database_url() {
        let resolver = EnvCredentialResolver::new(Some("not a url".to_string()));
        assert!(matches!(resolver.resolve().await, Err(BookstoreError::Credentials { .. })));
    }
}
