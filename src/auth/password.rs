use sha2::{Digest, Sha256};

/// Hashes a raw password into its stored form.
///
/// The scheme is a plain SHA-256 hex digest: deterministic and unsalted, so
/// two users with the same password share a stored hash. That property is
/// part of the compatibility contract (login matches username and hash by
/// equality in SQL), which is why the scheme lives behind this one function.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
