use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required(message = "Name is required"), length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"), email(message = "Please fill a valid email address"))]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 6, message = "Password must contain at least 6 characters.")
    )]
    pub password: Option<String>,
}

/// Partial profile update. `is_admin` is honored only when the caller is
/// already an admin; non-admin owners cannot escalate themselves.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(email(message = "Please fill a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must contain at least 6 characters."))]
    pub password: Option<String>,

    #[serde(alias = "isAdmin")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(required(message = "Title is required"), length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,

    pub completion: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub completion: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQualificationRequest {
    #[validate(required(message = "Title is required"), length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(
        required(message = "First Name is required"),
        length(min = 1, message = "First Name is required")
    )]
    pub firstname: Option<String>,

    #[validate(
        required(message = "Last Name is required"),
        length(min = 1, message = "Last Name is required")
    )]
    pub lastname: Option<String>,

    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,

    #[validate(email(message = "Please fill a valid email address"))]
    pub email: Option<String>,

    pub completion: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQualificationRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "First Name is required"))]
    pub firstname: Option<String>,

    #[validate(length(min = 1, message = "Last Name is required"))]
    pub lastname: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    #[validate(email(message = "Please fill a valid email address"))]
    pub email: Option<String>,

    pub completion: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(
        required(message = "First Name is required"),
        length(min = 1, message = "First Name is required")
    )]
    pub firstname: Option<String>,

    #[validate(
        required(message = "Last Name is required"),
        length(min = 1, message = "Last Name is required")
    )]
    pub lastname: Option<String>,

    #[validate(email(message = "Please fill a valid email address"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub firstname: Option<String>,

    #[validate(length(min = 1, message = "Last Name is required"))]
    pub lastname: Option<String>,

    #[validate(email(message = "Please fill a valid email address"))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_missing_fields() {
        let request = CreateProjectRequest {
            title: None,
            description: None,
            completion: None,
            image: None,
        };

        let err = request.validate().unwrap_err();
        let fields: Vec<String> = err.field_errors().keys().map(|k| k.to_string()).collect();
        assert!(fields.iter().any(|f| f == "title"));
        assert!(fields.iter().any(|f| f == "description"));
    }

    #[test]
    fn test_create_project_valid() {
        let request = CreateProjectRequest {
            title: Some("X".to_string()),
            description: Some("Y".to_string()),
            completion: None,
            image: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_bad_email_and_short_password() {
        let request = CreateUserRequest {
            name: Some("Ana".to_string()),
            email: Some("not-an-email".to_string()),
            password: Some("abc".to_string()),
        };

        let err = request.validate().unwrap_err();
        let fields: Vec<String> = err.field_errors().keys().map(|k| k.to_string()).collect();
        assert!(fields.iter().any(|f| f == "email"));
        assert!(fields.iter().any(|f| f == "password"));
    }

    #[test]
    fn test_qualification_email_is_optional() {
        let request = CreateQualificationRequest {
            title: Some("BSc".to_string()),
            firstname: Some("Ana".to_string()),
            lastname: Some("Lopez".to_string()),
            description: Some("CS".to_string()),
            email: None,
            completion: None,
        };

        assert!(request.validate().is_ok());
    }
}
