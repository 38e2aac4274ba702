pub mod contact_repository;
pub mod project_repository;
pub mod qualification_repository;
pub mod user_repository;

pub use contact_repository::{ContactRepository, MongoContactRepository};
pub use project_repository::{MongoProjectRepository, ProjectRepository};
pub use qualification_repository::{MongoQualificationRepository, QualificationRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
