use crate::core::domain::Configuration;
use crate::core::library::BookstoreResult;
use crate::credentials::aws_credential_resolver::AwsCredentialResolver;
use crate::credentials::env_credential_resolver::EnvCredentialResolver;
use crate::credentials::{CredentialResolver, CredentialSource};

pub async fn create_credential_resolver(source: CredentialSource, config: &Configuration) -> BookstoreResult<Box<dyn CredentialResolver>> {
    match source {
        CredentialSource::AwsSecretsManager => {
            Ok(Box::new(AwsCredentialResolver::from_config(config).await?))
        }
        CredentialSource::Environment => {
            Ok(Box::new(EnvCredentialResolver::new(config.database_url.clone())))
        }
    }
}
