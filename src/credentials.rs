pub mod aws_credential_resolver;
pub mod env_credential_resolver;
pub mod factory;

use std::fmt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use crate::core::library::{BookstoreError, BookstoreResult};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum CredentialSource {
    AwsSecretsManager,
    Environment,
}

// CredentialResolver produces the Postgres connect options once at startup
#[async_trait]
pub trait CredentialResolver: Sync + Send {
    async fn resolve(&self) -> BookstoreResult<PgConnectOptions>;
}

// DatabaseCredentials is the JSON payload of the cluster's secret
#[derive(Clone, PartialEq, Deserialize)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
}

impl DatabaseCredentials {
    pub fn parse(secret_string: &str) -> BookstoreResult<Self> {
        serde_json::from_str(secret_string).map_err(|err| BookstoreError::credentials(
            format!("secret is not a username/password document: {}", err).as_str(), None, false))
    }
}

impl fmt::Debug for DatabaseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseCredentials")
            .field("username", &self.username)
            .field("password", &"...")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterEndpoint {
    pub host: String,
    pub database_name: String,
    pub port: u16,
}

impl ClusterEndpoint {
    pub fn connect_options(&self, credentials: &DatabaseCredentials) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(self.host.as_str())
            .port(self.port)
            .username(credentials.username.as_str())
            .password(credentials.password.as_str())
            .database(self.database_name.as_str())
    }
}
