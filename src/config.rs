use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const SECS_PER_DAY: u64 = 24 * 60 * 60;
const MAX_TTL_DAYS: u64 = 3650;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    /// Secure + SameSite=None + Partitioned when set, SameSite=Lax otherwise.
    pub cookies_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_days: parse_ttl_days(std::env::var("JWT_TTL_DAYS").ok().as_deref())?,
        };
        let cookies_secure = std::env::var("COOKIES_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            jwt,
            cookies_secure,
        })
    }

    /// Lifetime shared by the session token and its cookie.
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.jwt.ttl_days.saturating_mul(SECS_PER_DAY))
    }
}

/// Session lifetime in days, `30` when unset; must lie in `1..=3650`.
fn parse_ttl_days(raw: Option<&str>) -> anyhow::Result<u64> {
    let Some(raw) = raw else {
        return Ok(30);
    };
    let days = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("JWT_TTL_DAYS is not a number: {raw:?}"))?;
    if !(1..=MAX_TTL_DAYS).contains(&days) {
        anyhow::bail!("JWT_TTL_DAYS must be between 1 and {MAX_TTL_DAYS}, got {days}");
    }
    Ok(days)
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
