use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rds::types::DbCluster;
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType, SecretListEntry};
use sqlx::postgres::PgConnectOptions;
use crate::core::domain::Configuration;
use crate::core::library::{BookstoreError, BookstoreResult};
use crate::credentials::{ClusterEndpoint, CredentialResolver, DatabaseCredentials};
use crate::utils::aws::build_sdk_config;

// AwsCredentialResolver finds the cluster's secret by tag, the cluster endpoint by identifier,
// and builds connect options from both. Lookups run once, there is no retry or rotation.
#[derive(Debug)]
pub struct AwsCredentialResolver {
    sdk_config: SdkConfig,
    cluster_id: String,
    secret_tag_key: String,
    default_port: u16,
}

impl AwsCredentialResolver {
    pub fn new(sdk_config: SdkConfig, cluster_id: &str, secret_tag_key: &str, default_port: u16) -> Self {
        Self {
            sdk_config,
            cluster_id: cluster_id.to_string(),
            secret_tag_key: secret_tag_key.to_string(),
            default_port,
        }
    }

    pub async fn from_config(config: &Configuration) -> BookstoreResult<Self> {
        let sdk_config = build_sdk_config(
            config.region.as_str(), config.role_arn.as_deref(), config.role_session_name.as_str()).await?;
        Ok(Self::new(sdk_config, config.db_cluster_id.as_str(), config.secret_tag_key.as_str(), config.db_port))
    }

    async fn find_secret_name(&self) -> BookstoreResult<String> {
        let out = aws_sdk_secretsmanager::Client::new(&self.sdk_config)
            .list_secrets()
            .filters(Filter::builder()
                .key(FilterNameStringType::TagKey)
                .values(self.secret_tag_key.as_str())
                .build())
            .filters(Filter::builder()
                .key(FilterNameStringType::TagValue)
                .values(self.cluster_id.as_str())
                .build())
            .send()
            .await?;
        first_secret_name(out.secret_list().unwrap_or_default()).ok_or_else(|| BookstoreError::credentials(
            format!("no secret tagged {}={}", self.secret_tag_key, self.cluster_id).as_str(), None, false))
    }

    async fn describe_cluster(&self) -> BookstoreResult<ClusterEndpoint> {
        let out = aws_sdk_rds::Client::new(&self.sdk_config)
            .describe_db_clusters()
            .db_cluster_identifier(self.cluster_id.as_str())
            .send()
            .await?;
        let cluster = out.db_clusters().unwrap_or_default().first().ok_or_else(|| BookstoreError::credentials(
            format!("db cluster {} not found", self.cluster_id).as_str(), None, false))?;
        to_cluster_endpoint(cluster, self.default_port)
    }

    async fn fetch_credentials(&self, secret_name: &str) -> BookstoreResult<DatabaseCredentials> {
        let out = aws_sdk_secretsmanager::Client::new(&self.sdk_config)
            .get_secret_value()
            .secret_id(secret_name)
            .send()
            .await?;
        let secret = out.secret_string().ok_or_else(|| BookstoreError::credentials(
            format!("secret {} has no string value", secret_name).as_str(), None, false))?;
        DatabaseCredentials::parse(secret)
    }
}

#[async_trait]
impl CredentialResolver for AwsCredentialResolver {
    async fn resolve(&self) -> BookstoreResult<PgConnectOptions> {
        let secret_name = self.find_secret_name().await?;
        let endpoint = self.describe_cluster().await?;
        let credentials = self.fetch_credentials(secret_name.as_str()).await?;
        tracing::info!(secret_name = %secret_name, host = %endpoint.host, database = %endpoint.database_name,
            port = endpoint.port, username = %credentials.username, "resolved database credentials");
        Ok(endpoint.connect_options(&credentials))
    }
}

fn first_secret_name(entries: &[SecretListEntry]) -> Option<String> {
    entries.iter().find_map(|e| e.name()).map(str::to_string)
}

fn to_cluster_endpoint(cluster: &DbCluster, default_port: u16) -> BookstoreResult<ClusterEndpoint> {
    let host = cluster.endpoint().ok_or_else(|| BookstoreError::credentials(
        "db cluster has no endpoint", None, false))?;
    let database_name = cluster.database_name().ok_or_else(|| BookstoreError::credentials(
        "db cluster has no database name", None, false))?;
    let port = cluster.port()
        .and_then(|p| u16::try_from(p).ok())
        .unwrap_or(default_port);
    Ok(ClusterEndpoint {
        host: host.to_string(),
        database_name: database_name.to_string(),
        port,
    })
}
