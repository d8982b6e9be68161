use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    applications::repo::{ApplicationStore, PgApplicationStore},
    auth::{
        password::{Argon2Hasher, CredentialHasher},
        repo::{PgUserStore, UserStore},
    },
    config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub hasher: Arc<dyn CredentialHasher>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;

        if !config.cookies_secure {
            tracing::warn!("COOKIES_SECURE is off; session cookie is sent without Secure");
        }

        Ok(Self::from_parts(
            config,
            Arc::new(PgUserStore::new(db.clone())),
            Arc::new(PgApplicationStore::new(db)),
            Arc::new(Argon2Hasher::new()?),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        applications: Arc<dyn ApplicationStore>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            config,
            users,
            applications,
            hasher,
        }
    }
}
