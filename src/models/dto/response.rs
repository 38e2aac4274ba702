use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Contact, Project, Qualification, User};

/// Public view of a user record. Never carries the hash or salt.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id_hex(),
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        ProjectDto {
            id: project.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: project.title,
            description: project.description,
            completion: project.completion,
            image: project.image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QualificationDto {
    pub id: String,
    pub title: String,
    pub firstname: String,
    pub lastname: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<DateTime<Utc>>,
}

impl From<Qualification> for QualificationDto {
    fn from(qualification: Qualification) -> Self {
        QualificationDto {
            id: qualification.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: qualification.title,
            firstname: qualification.firstname,
            lastname: qualification.lastname,
            description: qualification.description,
            email: qualification.email,
            completion: qualification.completion,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDto {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        ContactDto {
            id: contact.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            firstname: contact.firstname,
            lastname: contact.lastname,
            email: contact.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Outcome of a bulk delete: the single atomic store operation reports how
/// many records it removed.
#[derive(Debug, Serialize)]
pub struct DeleteManyResponse {
    pub deleted_count: u64,
    pub message: String,
}

impl DeleteManyResponse {
    pub fn new(deleted_count: u64, resource: &str) -> Self {
        DeleteManyResponse {
            deleted_count,
            message: format!("{} {} deleted", deleted_count, resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_hides_credentials() {
        let user = User::test_user("Ana", "ana@example.com");
        let dto: UserDto = user.into();

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("salt").is_none());
        assert_eq!(json.get("isAdmin"), Some(&serde_json::Value::Bool(false)));
    }

    #[test]
    fn test_delete_many_response_message() {
        let response = DeleteManyResponse::new(3, "projects");
        assert_eq!(response.message, "3 projects deleted");
        assert_eq!(response.deleted_count, 3);
    }
}
