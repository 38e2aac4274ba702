use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::auth::password;

/// Persisted credential record. The hash and salt only ever travel between
/// the repository and the authenticator; response shapes use `UserDto`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub salt: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        let salt = password::generate_salt();
        let hashed_password = password::hash_password(password, &salt);

        User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            hashed_password,
            salt,
            is_admin: false,
        }
    }

    /// Checks a plaintext password against the stored hash.
    pub fn authenticate(&self, password: &str) -> bool {
        password::hash_password(password, &self.salt) == self.hashed_password
    }

    pub fn set_password(&mut self, password: &str) {
        self.salt = password::generate_salt();
        self.hashed_password = password::hash_password(password, &self.salt);
    }

    pub fn id_hex(&self) -> String {
        self.id.map(|oid| oid.to_hex()).unwrap_or_default()
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(name: &str, email: &str) -> Self {
        let mut user = User::new(name, email, "secret");
        user.id = Some(ObjectId::new());
        user
    }

    pub fn test_admin(name: &str, email: &str) -> Self {
        let mut user = User::test_user(name, email);
        user.is_admin = true;
        user
    }
}
