use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Job application row, always owned by one user.
///
/// `company` and `contact` are free text on the row itself, not references to
/// separate company/contact records.
#[derive(Debug, Clone, FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub position: String,
    pub company: String,
    pub contact: Option<String>,
    pub link: Option<String>,
    pub search_date: Date,
    pub deadline: Option<Date>,
    pub response: bool,
    pub interview: bool,
    pub done: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Writable fields of a job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub position: String,
    pub company: String,
    pub contact: Option<String>,
    pub link: Option<String>,
    pub search_date: Date,
    pub deadline: Option<Date>,
    pub response: bool,
    pub interview: bool,
    pub done: bool,
}
