use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub email: String,              // login key, unique
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 PHC string, never plaintext
    pub created_at: OffsetDateTime, // creation timestamp
}
