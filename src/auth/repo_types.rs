use serde::{Deserialize, Serialize};

/// User record as kept in memory and in `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String, // Argon2 PHC hash, never plaintext
}

impl User {
    /// Builds a user from an already computed hash.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password_hash.into(),
        }
    }
}
