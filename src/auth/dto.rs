use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for signup and login.
#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Returned after a successful login and by `/auth/me`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
}
