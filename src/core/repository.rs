use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::core::library::BookstoreResult;
use crate::credentials::CredentialSource;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity and return its id
    async fn create(&self, entity: &Entity) -> BookstoreResult<String>;

    // get an entity by id
    async fn get(&self, id: &str) -> BookstoreResult<Entity>;

    // all entities in insertion order
    async fn list(&self) -> BookstoreResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryStore {
    JsonFile,
    Postgres,
    LocalPostgres,
}

impl RepositoryStore {
    pub fn credential_source(&self) -> Option<CredentialSource> {
        match self {
            RepositoryStore::JsonFile => { None }
            RepositoryStore::Postgres => { Some(CredentialSource::AwsSecretsManager) }
            RepositoryStore::LocalPostgres => { Some(CredentialSource::Environment) }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use crate::core::repository::RepositoryStore;
    use crate::credentials::CredentialSource;

    #[tokio::test]
    async fn test_should_map_store_to_credential_source() {
        assert_eq!(None, RepositoryStore::JsonFile.credential_source());
        assert_eq!(Some(CredentialSource::AwsSecretsManager), RepositoryStore::Postgres.credential_source());
        assert_eq!(Some(CredentialSource::Environment), RepositoryStore::LocalPostgres.credential_source());
    }

    #[tokio::test]
    async fn test_should_parse_store_names() {
        assert_eq!(RepositoryStore::LocalPostgres, RepositoryStore::from_str("local-postgres", false).expect("should parse"));
        assert_eq!(RepositoryStore::JsonFile, RepositoryStore::from_str("json-file", false).expect("should parse"));
    }
}
