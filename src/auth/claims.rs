use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

/// Decoded token payload. This is the trusted identity carried through one
/// request after verification succeeds; it never outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as an ObjectId hex string.
    pub sub: String,
    pub is_admin: bool,
    /// Issued at (UTC timestamp).
    pub iat: usize,
    /// Expiration (UTC timestamp). Absent when no expiry is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl Claims {
    pub fn new(user: &User, expiration_hours: Option<i64>) -> Self {
        let now = Utc::now();
        let exp = expiration_hours.map(|hours| (now + Duration::hours(hours)).timestamp() as usize);

        Self {
            sub: user.id_hex(),
            is_admin: user.is_admin,
            iat: now.timestamp() as usize,
            exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_without_expiry() {
        let user = User::test_user("Ana", "ana@example.com");
        let claims = Claims::new(&user, None);

        assert_eq!(claims.sub, user.id_hex());
        assert!(!claims.is_admin);
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_claims_with_expiry() {
        let user = User::test_admin("Root", "root@example.com");
        let claims = Claims::new(&user, Some(24));

        assert!(claims.is_admin);
        assert!(claims.exp.unwrap() > claims.iat);
    }
}
