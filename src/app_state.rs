use std::sync::Arc;

use crate::{
    auth::TokenService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ContactRepository, MongoContactRepository, MongoProjectRepository,
        MongoQualificationRepository, MongoUserRepository, ProjectRepository,
        QualificationRepository, UserRepository,
    },
    services::{AuthService, ContactService, ProjectService, QualificationService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub project_service: Arc<ProjectService>,
    pub qualification_service: Arc<QualificationService>,
    pub contact_service: Arc<ContactService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let project_repository = Arc::new(MongoProjectRepository::new(&db));
        let qualification_repository = Arc::new(MongoQualificationRepository::new(&db));
        let contact_repository = Arc::new(MongoContactRepository::new(&db));

        Ok(Self::with_repositories(
            config,
            user_repository,
            project_repository,
            qualification_repository,
            contact_repository,
        ))
    }

    /// Wires services over arbitrary store implementations. Production goes
    /// through `new`; tests inject in-memory repositories here.
    pub fn with_repositories(
        config: Config,
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
        qualifications: Arc<dyn QualificationRepository>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), token_service.clone())),
            user_service: Arc::new(UserService::new(users)),
            project_service: Arc::new(ProjectService::new(projects)),
            qualification_service: Arc::new(QualificationService::new(qualifications)),
            contact_service: Arc::new(ContactService::new(contacts)),
            token_service,
        }
    }
}
