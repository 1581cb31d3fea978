use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::users::password::{hash_password, verify_digest};

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64, // assigned by storage on insert, immutable afterwards
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>, // Argon2 digest, not exposed in JSON
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Replace the stored credential digest. `None` clears the credential.
    pub fn set_password(&mut self, plain: Option<&str>) -> anyhow::Result<()> {
        self.password_hash = match plain {
            Some(plain) => Some(hash_password(plain)?),
            None => None,
        };
        Ok(())
    }

    /// Check a candidate password against the stored digest.
    ///
    /// Always false when the candidate is absent or no credential is stored.
    pub fn verify_password(&self, candidate: Option<&str>) -> bool {
        match (candidate, self.password_hash.as_deref()) {
            (Some(candidate), Some(digest)) => verify_digest(candidate, digest),
            _ => false,
        }
    }

    /// Human label for the account: "first last" when both names are set,
    /// a lone name when only one is, otherwise the email.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.email.clone(),
        }
    }
}
