use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("password hash error: {0}")]
    Hash(String),
}

/// Registers a new user with a freshly salted hash.
///
/// Duplicate usernames are accepted; log-in resolves to the first match.
pub fn sign_up<'a>(
    users: &'a mut Vec<User>,
    username: &str,
    password: &str,
) -> Result<&'a User, AuthError> {
    if User::find_by_username(users, username).is_some() {
        warn!(username = %username, "username already registered; adding duplicate");
    }
    let hash = hash_password(password)?;
    let user = User::create(users, username, &hash);
    info!(username = %user.username, "user registered");
    Ok(user)
}

/// Checks a login attempt against the user list.
pub fn log_in<'a>(users: &'a [User], username: &str, password: &str) -> Result<&'a User, AuthError> {
    let Some(user) = User::find_by_username(users, username) else {
        warn!(username = %username, "login unknown username");
        return Err(AuthError::InvalidCredentials);
    };

    let ok = match verify_password(password, &user.password) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, username = %username, "stored hash unusable");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !ok {
        warn!(username = %username, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(username = %user.username, "user logged in");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_stores_hash_not_plaintext() {
        let mut users = Vec::new();
        let user = sign_up(&mut users, "alice", "pw1").expect("sign up should succeed");
        assert_eq!(user.username, "alice");
        assert_ne!(user.password, "pw1");
        assert!(verify_password("pw1", &users[0].password).expect("hash should parse"));
    }

    #[test]
    fn log_in_accepts_only_matching_credentials() {
        let mut users = Vec::new();
        sign_up(&mut users, "alice", "pw1").expect("sign up should succeed");

        let user = log_in(&users, "alice", "pw1").expect("correct credentials should log in");
        assert_eq!(user.username, "alice");
        assert_eq!(
            log_in(&users, "alice", "wrong").unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            log_in(&users, "bob", "pw1").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn log_in_with_corrupt_stored_hash_fails_generically() {
        let users = vec![User::new("mallory", "plaintext-password")];
        assert_eq!(
            log_in(&users, "mallory", "plaintext-password").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn duplicate_username_is_accepted_and_first_wins() {
        let mut users = Vec::new();
        sign_up(&mut users, "alice", "first").expect("first sign up should succeed");
        sign_up(&mut users, "alice", "second").expect("duplicate sign up is not rejected");

        assert_eq!(users.len(), 2);
        assert!(log_in(&users, "alice", "first").is_ok());
        // The second registration is shadowed by the first one.
        assert!(log_in(&users, "alice", "second").is_err());
    }
}
