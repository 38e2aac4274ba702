use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ReplaceOptions,
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Project,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: Project) -> AppResult<Project>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Project>>;
    async fn find_all(&self) -> AppResult<Vec<Project>>;
    async fn update(&self, id: ObjectId, project: Project) -> AppResult<Project>;
    async fn delete(&self, id: ObjectId) -> AppResult<()>;
    /// Single atomic collection wipe; returns the number of records removed.
    async fn delete_many(&self) -> AppResult<u64>;
}

pub struct MongoProjectRepository {
    collection: Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("projects");
        Self { collection }
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn create(&self, mut project: Project) -> AppResult<Project> {
        let result = self.collection.insert_one(&project).await?;
        project.id = result.inserted_id.as_object_id();
        Ok(project)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Project>> {
        let project = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(project)
    }

    async fn find_all(&self) -> AppResult<Vec<Project>> {
        let cursor = self.collection.find(doc! {}).await?;
        let projects: Vec<Project> = cursor.try_collect().await?;
        Ok(projects)
    }

    async fn update(&self, id: ObjectId, project: Project) -> AppResult<Project> {
        let filter = doc! { "_id": id };
        let options = ReplaceOptions::builder().upsert(false).build();

        let result = self
            .collection
            .replace_one(filter, &project)
            .with_options(options)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(project)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }

    async fn delete_many(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
