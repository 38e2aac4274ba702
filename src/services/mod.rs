pub mod auth_service;
pub mod contact_service;
pub mod project_service;
pub mod qualification_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use contact_service::ContactService;
pub use project_service::ProjectService;
pub use qualification_service::QualificationService;
pub use user_service::UserService;

use mongodb::bson::oid::ObjectId;

use crate::errors::{AppError, AppResult};

/// Path ids that do not parse as ObjectIds resolve to 404, matching the
/// behavior of unknown-but-well-formed ids.
pub(crate) fn parse_object_id(id: &str, resource: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        match parse_object_id("not-an-id", "Project") {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Project not found"),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex(), "Project").unwrap(), oid);
    }
}
