use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::applications::repo_types::{JobApplication, NewApplication};

/// Per-user job application persistence. Rows of other users behave as missing.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list(&self, user_id: Uuid) -> anyhow::Result<Vec<JobApplication>>;
    async fn get(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<JobApplication>>;
    async fn create(&self, user_id: Uuid, new: &NewApplication) -> anyhow::Result<JobApplication>;
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        new: &NewApplication,
    ) -> anyhow::Result<Option<JobApplication>>;
    /// Returns whether a row was removed.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct PgApplicationStore {
    db: PgPool,
}

impl PgApplicationStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn list(&self, user_id: Uuid) -> anyhow::Result<Vec<JobApplication>> {
        let rows = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, user_id, position, company, contact, link, search_date, deadline,
                   response, interview, done, created_at, updated_at
            FROM job_applications
            WHERE user_id = $1
            ORDER BY search_date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<JobApplication>> {
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, user_id, position, company, contact, link, search_date, deadline,
                   response, interview, done, created_at, updated_at
            FROM job_applications
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, user_id: Uuid, new: &NewApplication) -> anyhow::Result<JobApplication> {
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications
                (user_id, position, company, contact, link, search_date, deadline,
                 response, interview, done)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, position, company, contact, link, search_date, deadline,
                      response, interview, done, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&new.position)
        .bind(&new.company)
        .bind(&new.contact)
        .bind(&new.link)
        .bind(new.search_date)
        .bind(new.deadline)
        .bind(new.response)
        .bind(new.interview)
        .bind(new.done)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        new: &NewApplication,
    ) -> anyhow::Result<Option<JobApplication>> {
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            UPDATE job_applications
            SET position = $3, company = $4, contact = $5, link = $6, search_date = $7,
                deadline = $8, response = $9, interview = $10, done = $11, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, position, company, contact, link, search_date, deadline,
                      response, interview, done, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&new.position)
        .bind(&new.company)
        .bind(&new.contact)
        .bind(&new.link)
        .bind(new.search_date)
        .bind(new.deadline)
        .bind(new.response)
        .bind(new.interview)
        .bind(new.done)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM job_applications WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
