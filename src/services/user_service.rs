use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::{MessageResponse, UserDto},
        },
    },
    repositories::UserRepository,
    services::parse_object_id,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Public signup. New users are never admins; the flag can only be set
    /// later by an existing admin through `update`.
    pub async fn signup(&self, request: CreateUserRequest) -> AppResult<UserDto> {
        request.validate()?;

        let user = User::new(
            request.name.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        );

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    pub async fn list(&self) -> AppResult<Vec<UserDto>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<UserDto> {
        Ok(self.find_record(id).await?.into())
    }

    /// Resolves the profile a route's `:userId` refers to, for handlers that
    /// must answer 404 before running their guard.
    pub async fn find_record(&self, id: &str) -> AppResult<User> {
        let oid = parse_object_id(id, "User")?;
        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies exactly the fields present in the request. Callers are
    /// responsible for stripping `is_admin` from non-admin requests before
    /// this point.
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserDto> {
        request.validate()?;

        let oid = parse_object_id(id, "User")?;
        let mut user = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(password) = request.password {
            user.set_password(&password);
        }
        if let Some(is_admin) = request.is_admin {
            user.is_admin = is_admin;
        }

        let updated = self.repository.update(oid, user).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let oid = parse_object_id(id, "User")?;
        self.repository.delete(oid).await?;
        Ok(MessageResponse {
            message: "User deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    use crate::repositories::user_repository::MockUserRepository;

    fn create_request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_signup_hashes_password_and_defaults_to_non_admin() {
        let mut repository = MockUserRepository::new();
        repository.expect_create().returning(|mut user| {
            user.id = Some(ObjectId::new());
            assert_ne!(user.hashed_password, "secret123");
            assert!(!user.is_admin);
            Ok(user)
        });

        let service = UserService::new(Arc::new(repository));
        let dto = service
            .signup(create_request("Ana", "ana@example.com", "secret123"))
            .await
            .unwrap();

        assert_eq!(dto.email, "ana@example.com");
        assert!(!dto.is_admin);
    }

    #[actix_web::test]
    async fn test_signup_rejects_invalid_request() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));

        let result = service
            .signup(CreateUserRequest {
                name: None,
                email: Some("ana@example.com".to_string()),
                password: Some("secret123".to_string()),
            })
            .await;

        match result {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("Name is required")),
            _ => panic!("expected ValidationError"),
        }
    }

    #[actix_web::test]
    async fn test_get_unparseable_id_is_not_found() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));

        match service.get("garbage").await {
            Err(AppError::NotFound(_)) => {}
            _ => panic!("expected NotFound"),
        }
    }

    #[actix_web::test]
    async fn test_update_applies_requested_fields() {
        let oid = ObjectId::new();
        let mut stored = User::new("Ana", "ana@example.com", "secret123");
        stored.id = Some(oid);

        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository.expect_update().returning(|_, user| Ok(user));

        let service = UserService::new(Arc::new(repository));
        let dto = service
            .update(
                &oid.to_hex(),
                UpdateUserRequest {
                    name: Some("Ana Maria".to_string()),
                    is_admin: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(dto.name, "Ana Maria");
        // The service applies exactly what it is given; the handler strips
        // is_admin for non-admin callers before calling in.
        assert!(dto.is_admin);
    }

    #[actix_web::test]
    async fn test_update_unknown_user_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));
        let result = service
            .update(&ObjectId::new().to_hex(), UpdateUserRequest::default())
            .await;

        match result {
            Err(AppError::NotFound(_)) => {}
            _ => panic!("expected NotFound"),
        }
    }
}
