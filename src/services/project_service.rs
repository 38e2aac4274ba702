use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Project,
        dto::{
            request::{CreateProjectRequest, UpdateProjectRequest},
            response::{DeleteManyResponse, MessageResponse, ProjectDto},
        },
    },
    repositories::ProjectRepository,
    services::parse_object_id,
};

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ProjectDto>> {
        let projects = self.repository.find_all().await?;
        Ok(projects.into_iter().map(ProjectDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<ProjectDto> {
        let oid = parse_object_id(id, "Project")?;
        let project = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
        Ok(project.into())
    }

    pub async fn create(&self, request: CreateProjectRequest) -> AppResult<ProjectDto> {
        request.validate()?;

        let mut project = Project::new(
            request.title.as_deref().unwrap_or_default(),
            request.description.as_deref().unwrap_or_default(),
        );
        project.completion = request.completion;
        project.image = request.image;

        let created = self.repository.create(project).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: &str, request: UpdateProjectRequest) -> AppResult<ProjectDto> {
        request.validate()?;

        let oid = parse_object_id(id, "Project")?;
        let mut project = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if let Some(title) = request.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            project.description = description.trim().to_string();
        }
        if request.completion.is_some() {
            project.completion = request.completion;
        }
        if request.image.is_some() {
            project.image = request.image;
        }

        let updated = self.repository.update(oid, project).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let oid = parse_object_id(id, "Project")?;
        self.repository.delete(oid).await?;
        Ok(MessageResponse {
            message: "Project deleted".to_string(),
        })
    }

    pub async fn delete_many(&self) -> AppResult<DeleteManyResponse> {
        let deleted_count = self.repository.delete_many().await?;
        Ok(DeleteManyResponse::new(deleted_count, "projects"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    use crate::repositories::project_repository::MockProjectRepository;

    #[actix_web::test]
    async fn test_create_missing_fields_names_them() {
        let service = ProjectService::new(Arc::new(MockProjectRepository::new()));

        let result = service
            .create(CreateProjectRequest {
                title: None,
                description: None,
                completion: None,
                image: None,
            })
            .await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("Title is required"));
                assert!(msg.contains("Description is required"));
            }
            _ => panic!("expected ValidationError"),
        }
    }

    #[actix_web::test]
    async fn test_create_returns_generated_id() {
        let mut repository = MockProjectRepository::new();
        repository.expect_create().returning(|mut project| {
            project.id = Some(ObjectId::new());
            Ok(project)
        });

        let service = ProjectService::new(Arc::new(repository));
        let dto = service
            .create(CreateProjectRequest {
                title: Some("X".to_string()),
                description: Some("Y".to_string()),
                completion: None,
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(dto.title, "X");
        assert!(!dto.id.is_empty());
    }

    #[actix_web::test]
    async fn test_get_invalid_id_is_not_found_without_store_call() {
        // No expectations set: a repository call would panic the mock.
        let service = ProjectService::new(Arc::new(MockProjectRepository::new()));

        match service.get("definitely-not-an-oid").await {
            Err(AppError::NotFound(_)) => {}
            _ => panic!("expected NotFound"),
        }
    }

    #[actix_web::test]
    async fn test_delete_many_reports_count() {
        let mut repository = MockProjectRepository::new();
        repository.expect_delete_many().returning(|| Ok(4));

        let service = ProjectService::new(Arc::new(repository));
        let response = service.delete_many().await.unwrap();

        assert_eq!(response.deleted_count, 4);
        assert_eq!(response.message, "4 projects deleted");
    }
}
