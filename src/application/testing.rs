//! Shared fixtures for service tests

use std::sync::Arc;

use crate::application::identity::CredentialService;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::memory_db;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

pub(crate) const TEST_SECRET: &str = "test-secret";

pub(crate) async fn repos() -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(memory_db().await))
}

pub(crate) fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.into(),
        expiration_hours: 1,
        issuer: "switchgear-test".into(),
    }
}

pub(crate) fn credentials() -> Arc<CredentialService> {
    Arc::new(CredentialService::new(jwt_config(), 4))
}
