use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),
    /// The stored hash is not a parseable PHC string. Only reachable when the
    /// database row itself is corrupt; a wrong password is `Ok(false)`.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hashes a password with Argon2 and a fresh OS-random salt. The PHC output
/// string embeds the algorithm, its parameters and the salt, so the work
/// factor can be raised later without invalidating existing hashes.
pub fn hash(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            PasswordError::Hash(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Recomputes with the salt and parameters embedded in `stored` and compares
/// in constant time. A mismatch is `Ok(false)`, not an error.
pub fn verify(plain: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        PasswordError::MalformedHash(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hashed = hash(password).expect("hashing should succeed");
        assert!(verify(password, &hashed).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hashed = hash(password).expect("hashing should succeed");
        assert!(!verify("wrong-password", &hashed).expect("verify should not error"));
    }

    #[test]
    fn hashes_are_salted() {
        let password = "same-input";
        let a = hash(password).expect("hash a");
        let b = hash(password).expect("hash b");
        assert_ne!(a, b);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify("anything", "not-a-valid-hash").unwrap_err();
        assert!(matches!(err, PasswordError::MalformedHash(_)));
    }
}
