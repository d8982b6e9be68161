use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use tracing::error;
use uuid::Uuid;

// Argon2id work factor: 19 MiB memory, 2 passes, 1 lane.
const M_COST_KIB: u32 = 19 * 1024;
const T_COST: u32 = 2;
const P_COST: u32 = 1;

/// One-way password hashing used by signup and login.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plain: &str) -> anyhow::Result<String>;
    /// `Ok(false)` on mismatch; `Err` only when `hash` can't be parsed.
    fn verify(&self, plain: &str, hash: &str) -> anyhow::Result<bool>;
    /// Hash of a random secret nobody knows, verified against when no account matches
    /// so that a miss costs as much as a wrong password.
    fn decoy_hash(&self) -> &str;
}

pub struct Argon2Hasher {
    params: Params,
    decoy: String,
}

impl Argon2Hasher {
    pub fn new() -> anyhow::Result<Self> {
        let params = Params::new(M_COST_KIB, T_COST, P_COST, None).map_err(|e| {
            error!(error = %e, "argon2 params rejected");
            anyhow::anyhow!(e.to_string())
        })?;
        let mut hasher = Self {
            params,
            decoy: String::new(),
        };
        hasher.decoy = hasher.hash(&Uuid::new_v4().to_string())?;
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                anyhow::anyhow!(e.to_string())
            })?;
        Ok(phc.to_string())
    }

    fn verify(&self, plain: &str, hash: &str) -> anyhow::Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!(error = %e, "argon2 parse hash error");
            anyhow::anyhow!(e.to_string())
        })?;
        Ok(self
            .argon2()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }

    fn decoy_hash(&self) -> &str {
        &self.decoy
    }
}
