use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Qualification,
        dto::{
            request::{CreateQualificationRequest, UpdateQualificationRequest},
            response::{DeleteManyResponse, MessageResponse, QualificationDto},
        },
    },
    repositories::QualificationRepository,
    services::parse_object_id,
};

pub struct QualificationService {
    repository: Arc<dyn QualificationRepository>,
}

impl QualificationService {
    pub fn new(repository: Arc<dyn QualificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<QualificationDto>> {
        let qualifications = self.repository.find_all().await?;
        Ok(qualifications
            .into_iter()
            .map(QualificationDto::from)
            .collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<QualificationDto> {
        let oid = parse_object_id(id, "Qualification")?;
        let qualification = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Qualification not found".to_string()))?;
        Ok(qualification.into())
    }

    pub async fn create(
        &self,
        request: CreateQualificationRequest,
    ) -> AppResult<QualificationDto> {
        request.validate()?;

        let qualification = Qualification {
            id: None,
            title: request.title.unwrap_or_default().trim().to_string(),
            firstname: request.firstname.unwrap_or_default().trim().to_string(),
            lastname: request.lastname.unwrap_or_default().trim().to_string(),
            description: request.description.unwrap_or_default().trim().to_string(),
            email: request.email,
            completion: request.completion,
        };

        let created = self.repository.create(qualification).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateQualificationRequest,
    ) -> AppResult<QualificationDto> {
        request.validate()?;

        let oid = parse_object_id(id, "Qualification")?;
        let mut qualification = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Qualification not found".to_string()))?;

        if let Some(title) = request.title {
            qualification.title = title.trim().to_string();
        }
        if let Some(firstname) = request.firstname {
            qualification.firstname = firstname.trim().to_string();
        }
        if let Some(lastname) = request.lastname {
            qualification.lastname = lastname.trim().to_string();
        }
        if let Some(description) = request.description {
            qualification.description = description.trim().to_string();
        }
        if request.email.is_some() {
            qualification.email = request.email;
        }
        if request.completion.is_some() {
            qualification.completion = request.completion;
        }

        let updated = self.repository.update(oid, qualification).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let oid = parse_object_id(id, "Qualification")?;
        self.repository.delete(oid).await?;
        Ok(MessageResponse {
            message: "Qualification deleted".to_string(),
        })
    }

    pub async fn delete_many(&self) -> AppResult<DeleteManyResponse> {
        let deleted_count = self.repository.delete_many().await?;
        Ok(DeleteManyResponse::new(deleted_count, "qualifications"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repositories::qualification_repository::MockQualificationRepository;

    #[actix_web::test]
    async fn test_create_requires_names_and_description() {
        let service = QualificationService::new(Arc::new(MockQualificationRepository::new()));

        let result = service
            .create(CreateQualificationRequest {
                title: Some("BSc".to_string()),
                firstname: None,
                lastname: None,
                description: None,
                email: None,
                completion: None,
            })
            .await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("First Name is required"));
                assert!(msg.contains("Last Name is required"));
                assert!(msg.contains("Description is required"));
            }
            _ => panic!("expected ValidationError"),
        }
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_email() {
        let service = QualificationService::new(Arc::new(MockQualificationRepository::new()));

        let result = service
            .create(CreateQualificationRequest {
                title: Some("BSc".to_string()),
                firstname: Some("Ana".to_string()),
                lastname: Some("Lopez".to_string()),
                description: Some("CS".to_string()),
                email: Some("not-an-email".to_string()),
                completion: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
