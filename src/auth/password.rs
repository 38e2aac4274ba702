use sha2::{Digest, Sha256};
use uuid::Uuid;

pub fn generate_salt() -> String {
    Uuid::new_v4().to_string()
}

/// Hex SHA-256 over salt followed by password.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_per_salt() {
        let salt = generate_salt();
        assert_eq!(hash_password("secret", &salt), hash_password("secret", &salt));
    }

    #[test]
    fn test_hash_differs_across_salts() {
        assert_ne!(
            hash_password("secret", &generate_salt()),
            hash_password("secret", &generate_salt())
        );
    }

    #[test]
    fn test_hash_is_hex_encoded_sha256() {
        let hash = hash_password("secret", "salt");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
