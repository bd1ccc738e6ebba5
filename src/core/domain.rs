use std::net::SocketAddr;
use clap::Parser;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_BOOKS_FILE: &str = "books.json";
pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_DB_CLUSTER_ID: &str = "two-stack-app-db";
pub const DEFAULT_SECRET_TAG_KEY: &str = "Name";
pub const DEFAULT_ROLE_SESSION_NAME: &str = "bookstore";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the bookstore, every flag can also be set by env
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, about, version)]
pub struct Configuration {
    /// Storage backend for books.
    #[arg(long, env = "BOOKSTORE_STORE", value_enum, default_value_t = RepositoryStore::JsonFile)]
    pub store: RepositoryStore,

    /// JSON file backing the json-file store.
    #[arg(long, env = "BOOKS_FILE", default_value = DEFAULT_BOOKS_FILE)]
    pub books_file: String,

    /// Optional JSON file with sample books inserted into Postgres at startup.
    #[arg(long, env = "SEED_FILE", default_value = DEFAULT_BOOKS_FILE)]
    pub seed_file: String,

    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// RDS cluster identifier, also the tag value of the cluster's secret.
    #[arg(long, env = "DB_CLUSTER_ID", default_value = DEFAULT_DB_CLUSTER_ID)]
    pub db_cluster_id: String,

    #[arg(long, env = "DB_SECRET_TAG_KEY", default_value = DEFAULT_SECRET_TAG_KEY)]
    pub secret_tag_key: String,

    /// Role assumed before any other AWS call, for cross-account access.
    #[arg(long, env = "ASSUME_ROLE_ARN")]
    pub role_arn: Option<String>,

    #[arg(long, env = "ASSUME_ROLE_SESSION_NAME", default_value = DEFAULT_ROLE_SESSION_NAME)]
    pub role_session_name: String,

    /// Fallback when the cluster does not report a port.
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub db_port: u16,

    /// Connection string for the local-postgres store.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Address of the local HTTP server, ignored under Lambda.
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: SocketAddr,
}

impl Configuration {
    pub fn new(store: RepositoryStore, books_file: &str) -> Self {
        Configuration {
            store,
            books_file: books_file.to_string(),
            seed_file: DEFAULT_BOOKS_FILE.to_string(),
            region: DEFAULT_REGION.to_string(),
            db_cluster_id: DEFAULT_DB_CLUSTER_ID.to_string(),
            secret_tag_key: DEFAULT_SECRET_TAG_KEY.to_string(),
            role_arn: None,
            role_session_name: DEFAULT_ROLE_SESSION_NAME.to_string(),
            db_port: DEFAULT_DB_PORT,
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}
