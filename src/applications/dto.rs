use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    applications::repo_types::{JobApplication, NewApplication},
    error::ApiError,
};

// Civil dates travel as `YYYY-MM-DD`.
time::serde::format_description!(civil_date, Date, "[year]-[month]-[day]");

/// Body of create and update requests.
#[derive(Debug, Deserialize)]
pub struct ApplicationRequest {
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(with = "civil_date")]
    pub search_date: Date,
    #[serde(default, with = "civil_date::option")]
    pub deadline: Option<Date>,
    #[serde(default)]
    pub response: bool,
    #[serde(default)]
    pub interview: bool,
    #[serde(default)]
    pub done: bool,
}

impl ApplicationRequest {
    /// Trims text fields; `position` and `company` must be non-empty.
    pub fn into_new(self) -> Result<NewApplication, ApiError> {
        let position = self.position.trim().to_string();
        let company = self.company.trim().to_string();
        if position.is_empty() || company.is_empty() {
            return Err(ApiError::MalformedRequest);
        }
        Ok(NewApplication {
            position,
            company,
            contact: non_blank(self.contact),
            link: non_blank(self.link),
            search_date: self.search_date,
            deadline: self.deadline,
            response: self.response,
            interview: self.interview,
            done: self.done,
        })
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub position: String,
    pub company: String,
    pub contact: Option<String>,
    pub link: Option<String>,
    #[serde(with = "civil_date")]
    pub search_date: Date,
    #[serde(with = "civil_date::option")]
    pub deadline: Option<Date>,
    pub response: bool,
    pub interview: bool,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<JobApplication> for ApplicationResponse {
    fn from(a: JobApplication) -> Self {
        Self {
            id: a.id,
            position: a.position,
            company: a.company,
            contact: a.contact,
            link: a.link,
            search_date: a.search_date,
            deadline: a.deadline,
            response: a.response,
            interview: a.interview,
            done: a.done,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
